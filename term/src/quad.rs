//! A quad expresses a single fact within a graph.
//!
//! Each position of a quad only accepts some types of terms,
//! which is enforced by the types [`Subject`], [`NamedNode`] (predicate),
//! [`Object`] and [`GraphName`].

use std::fmt;

use crate::_trait::impl_term_eq_hash;
use crate::{BlankNode, DefaultGraph, Literal, NamedNode, TTerm, Term, TermError, TermType};

/// Generate the enum of the term types admissible at a given position of a quad.
macro_rules! positional_term {
    ($(#[$attr:meta])* $name:ident, $expected:literal, $($variant:ident),+) => {
        $(#[$attr])*
        #[derive(Clone, Debug)]
        pub enum $name {
            $(
                #[allow(missing_docs)]
                $variant($variant),
            )+
        }

        impl TTerm for $name {
            fn term_type(&self) -> TermType {
                match self {
                    $( $name::$variant(t) => t.term_type(), )+
                }
            }
            fn value(&self) -> Option<&str> {
                match self {
                    $( $name::$variant(t) => TTerm::value(t), )+
                }
            }
            fn language(&self) -> Option<&str> {
                match self {
                    $( $name::$variant(t) => TTerm::language(t), )+
                }
            }
            fn datatype(&self) -> Option<&NamedNode> {
                match self {
                    $( $name::$variant(t) => TTerm::datatype(t), )+
                }
            }
            fn as_dyn(&self) -> &dyn TTerm {
                self
            }
        }

        impl_term_eq_hash!($name);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                crate::_display::write_term(f, self)
            }
        }

        $(
            impl From<$variant> for $name {
                fn from(t: $variant) -> Self {
                    $name::$variant(t)
                }
            }
        )+

        impl From<$name> for Term {
            fn from(t: $name) -> Self {
                match t {
                    $( $name::$variant(t) => Term::$variant(t), )+
                }
            }
        }

        impl TryFrom<Term> for $name {
            type Error = TermError;

            fn try_from(term: Term) -> Result<Self, Self::Error> {
                match term {
                    $( Term::$variant(t) => Ok($name::$variant(t)), )+
                    other => Err(TermError::UnsupportedKind {
                        expected: $expected,
                        found: other.term_type(),
                    }),
                }
            }
        }
    };
}

positional_term!(
    /// A term that can be the subject of a quad.
    Subject,
    "a named node or a blank node",
    NamedNode,
    BlankNode
);

positional_term!(
    /// A term that can be the object of a quad.
    Object,
    "a named node, a blank node or a literal",
    NamedNode,
    BlankNode,
    Literal
);

positional_term!(
    /// A term that can be the graph name of a quad.
    GraphName,
    "a named node, a blank node or the default graph",
    NamedNode,
    BlankNode,
    DefaultGraph
);

impl GraphName {
    /// Whether this is the default graph.
    pub fn is_default_graph(&self) -> bool {
        matches!(self, GraphName::DefaultGraph(_))
    }
}

impl Default for GraphName {
    fn default() -> Self {
        GraphName::DefaultGraph(DefaultGraph::new())
    }
}

/// An RDF statement: a subject, a predicate and an object, in a graph.
///
/// A quad is itself a term, of type [`TermType::Quad`], with no value.
#[derive(Clone, Debug)]
pub struct Quad {
    subject: Subject,
    predicate: NamedNode,
    object: Object,
    graph: GraphName,
}

impl Quad {
    /// Return a new quad.
    pub fn new<S, O, G>(subject: S, predicate: NamedNode, object: O, graph: G) -> Self
    where
        S: Into<Subject>,
        O: Into<Object>,
        G: Into<GraphName>,
    {
        Quad {
            subject: subject.into(),
            predicate,
            object: object.into(),
            graph: graph.into(),
        }
    }

    /// The subject of this quad.
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// The predicate of this quad.
    pub fn predicate(&self) -> &NamedNode {
        &self.predicate
    }

    /// The object of this quad.
    pub fn object(&self) -> &Object {
        &self.object
    }

    /// The graph name of this quad.
    pub fn graph(&self) -> &GraphName {
        &self.graph
    }

    /// Iterator over the four components of this quad.
    pub fn components(&self) -> impl Iterator<Item = &dyn TTerm> {
        [
            self.subject.as_dyn(),
            self.predicate.as_dyn(),
            self.object.as_dyn(),
            self.graph.as_dyn(),
        ]
        .into_iter()
    }

    /// Consume this quad into its four components.
    pub fn into_parts(self) -> (Subject, NamedNode, Object, GraphName) {
        (self.subject, self.predicate, self.object, self.graph)
    }
}

impl TTerm for Quad {
    fn term_type(&self) -> TermType {
        TermType::Quad
    }
    fn value(&self) -> Option<&str> {
        None
    }
    fn as_quad(&self) -> Option<&Quad> {
        Some(self)
    }
    fn as_dyn(&self) -> &dyn TTerm {
        self
    }
}

impl_term_eq_hash!(Quad);

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::_display::write_term(f, self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Variable;

    fn ex(suffix: &str) -> NamedNode {
        NamedNode::new(format!("http://example.org/{suffix}"))
    }

    #[test]
    fn components() {
        let q = Quad::new(ex("s"), ex("p"), Literal::new("o"), ex("g"));
        assert_eq!(q.subject(), &ex("s"));
        assert_eq!(q.predicate(), &ex("p"));
        assert_eq!(q.object(), &Literal::new("o"));
        assert_eq!(q.graph(), &ex("g"));
        assert_eq!(q.term_type(), TermType::Quad);
        assert_eq!(TTerm::value(&q), None);

        let types: Vec<_> = q.components().map(|t| t.term_type()).collect();
        assert_eq!(
            types,
            [
                TermType::NamedNode,
                TermType::NamedNode,
                TermType::Literal,
                TermType::NamedNode
            ]
        );
    }

    #[test]
    fn into_parts() {
        let q = Quad::new(ex("s"), ex("p"), ex("o"), GraphName::default());
        let (s, p, o, g) = q.into_parts();
        assert_eq!(s, ex("s"));
        assert_eq!(p, ex("p"));
        assert_eq!(o, ex("o"));
        assert!(g.is_default_graph());
    }

    #[test]
    fn positional_eq() {
        let s: Subject = ex("a").into();
        let o: Object = ex("a").into();
        let g: GraphName = ex("a").into();
        assert_eq!(s, o);
        assert_eq!(o, g);
        assert_eq!(crate::test::h(&s), crate::test::h(&g));
        assert_eq!(Term::from(s), ex("a"));
    }

    #[test]
    fn positional_try_from() {
        let lit: Term = Literal::new("x").into();
        assert!(Object::try_from(lit.clone()).is_ok());
        assert_eq!(
            Subject::try_from(lit).unwrap_err(),
            TermError::UnsupportedKind {
                expected: "a named node or a blank node",
                found: TermType::Literal,
            }
        );
        assert!(GraphName::try_from(Term::from(DefaultGraph::new())).is_ok());
        assert!(Object::try_from(Term::from(DefaultGraph::new())).is_err());
        assert!(GraphName::try_from(Term::from(Variable::new("g"))).is_err());
    }

    #[test]
    fn eq_needs_all_components() {
        let q1 = Quad::new(ex("s"), ex("p"), ex("o"), GraphName::default());
        let q2 = Quad::new(ex("s"), ex("p"), ex("o"), DefaultGraph::with_value("x"));
        let q3 = Quad::new(ex("s"), ex("p"), ex("o"), ex("g"));
        let q4 = Quad::new(ex("s"), ex("p"), Literal::new("o"), GraphName::default());
        assert_eq!(q1, q2);
        assert_eq!(crate::test::h(&q1), crate::test::h(&q2));
        assert_ne!(q1, q3);
        assert_ne!(q1, q4);
    }
}
