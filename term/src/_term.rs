// this module is transparently re-exported by its parent `lib`
use std::fmt;

use crate::_trait::impl_term_eq_hash;
use crate::*;

/// Any RDF term, as a closed set of variants.
///
/// The variants can also be used on their own
/// ([`NamedNode`], [`Literal`]...);
/// `Term` is what is handed out when the type of a term is only known at runtime.
#[derive(Clone, Debug)]
pub enum Term {
    /// A named node
    NamedNode(NamedNode),
    /// A blank node
    BlankNode(BlankNode),
    /// A literal
    Literal(Literal),
    /// A variable
    Variable(Variable),
    /// The default graph
    DefaultGraph(DefaultGraph),
    /// A quad
    Quad(Box<Quad>),
}

impl Term {
    /// Copy any implementation of [`TTerm`] into a `Term`.
    ///
    /// Blank nodes are obtained from `factory`,
    /// so their labels follow the rules of [`DataFactory::blank_node`].
    ///
    /// # Error
    ///
    /// Fails if `term` does not honour the contract of [`TTerm`],
    /// e.g. a literal without a datatype.
    pub(crate) fn from_term<T>(factory: &DataFactory, term: &T) -> Result<Term>
    where
        T: TTerm + ?Sized,
    {
        let tt = term.term_type();
        let broken = || TermError::UnsupportedKind {
            expected: "a term honouring the contract of TTerm",
            found: tt,
        };
        let value = || term.value().ok_or_else(broken);
        Ok(match tt {
            TermType::NamedNode => NamedNode::new(value()?).into(),
            TermType::BlankNode => factory.blank_node(Some(value()?)).into(),
            TermType::Variable => Variable::new(value()?).into(),
            TermType::DefaultGraph => DefaultGraph::with_value(value()?).into(),
            TermType::Literal => match (term.language(), term.datatype()) {
                (Some(lang), _) if !lang.is_empty() => Literal::new_lang(value()?, lang).into(),
                (_, Some(dt)) => Literal::new_dt(value()?, dt.clone()).into(),
                _ => return Err(broken()),
            },
            TermType::Quad => term.as_quad().ok_or_else(broken)?.clone().into(),
        })
    }

    /// The value of this term, if it is not a quad.
    pub fn value(&self) -> Option<&str> {
        TTerm::value(self)
    }
}

impl TTerm for Term {
    fn term_type(&self) -> TermType {
        match self {
            Term::NamedNode(t) => t.term_type(),
            Term::BlankNode(t) => t.term_type(),
            Term::Literal(t) => t.term_type(),
            Term::Variable(t) => t.term_type(),
            Term::DefaultGraph(t) => t.term_type(),
            Term::Quad(t) => t.term_type(),
        }
    }
    fn value(&self) -> Option<&str> {
        match self {
            Term::NamedNode(t) => TTerm::value(t),
            Term::BlankNode(t) => TTerm::value(t),
            Term::Literal(t) => TTerm::value(t),
            Term::Variable(t) => TTerm::value(t),
            Term::DefaultGraph(t) => TTerm::value(t),
            Term::Quad(_) => None,
        }
    }
    fn language(&self) -> Option<&str> {
        match self {
            Term::Literal(t) => TTerm::language(t),
            _ => None,
        }
    }
    fn datatype(&self) -> Option<&NamedNode> {
        match self {
            Term::Literal(t) => TTerm::datatype(t),
            _ => None,
        }
    }
    fn as_quad(&self) -> Option<&Quad> {
        match self {
            Term::Quad(q) => Some(q),
            _ => None,
        }
    }
    fn as_dyn(&self) -> &dyn TTerm {
        self
    }
}

impl_term_eq_hash!(Term);

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::_display::write_term(f, self)
    }
}

macro_rules! term_variant {
    ($variant:ident, $expected:literal) => {
        impl From<$variant> for Term {
            fn from(t: $variant) -> Self {
                Term::$variant(t)
            }
        }

        impl TryFrom<Term> for $variant {
            type Error = TermError;

            fn try_from(term: Term) -> Result<Self, Self::Error> {
                match term {
                    Term::$variant(t) => Ok(t),
                    other => Err(TermError::UnsupportedKind {
                        expected: $expected,
                        found: other.term_type(),
                    }),
                }
            }
        }
    };
}

term_variant!(NamedNode, "a named node");
term_variant!(BlankNode, "a blank node");
term_variant!(Literal, "a literal");
term_variant!(Variable, "a variable");
term_variant!(DefaultGraph, "the default graph");

impl From<Quad> for Term {
    fn from(q: Quad) -> Self {
        Term::Quad(Box::new(q))
    }
}

impl TryFrom<Term> for Quad {
    type Error = TermError;

    fn try_from(term: Term) -> Result<Self, Self::Error> {
        match term {
            Term::Quad(q) => Ok(*q),
            other => Err(TermError::UnsupportedKind {
                expected: "a quad",
                found: other.term_type(),
            }),
        }
    }
}
