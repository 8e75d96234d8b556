//! This module is transparently re-exported by its parent `lib`.
use std::hash::{Hash, Hasher};

use crate::{NamedNode, Quad, TermType};

/// Trait for all RDF terms.
///
/// Six types of terms are supported (see [`TermType`]):
/// named nodes, literals, blank nodes, variables, the default graph, and quads.
/// All of them but quads carry a `value`.
///
/// # Contract
///
/// The methods of this trait are not independent:
/// depending on the value returned by [`term_type`](TTerm::term_type),
/// other methods are expected to return `Some(...)` or `None` accordingly:
///
/// * [`value`](TTerm::value) is `None` iff the term is a quad;
/// * [`language`](TTerm::language) and [`datatype`](TTerm::datatype)
///   are `Some` iff the term is a literal;
/// * [`as_quad`](TTerm::as_quad) is `Some` iff the term is a quad.
///
/// In addition, any type implementing this trait must uphold the following guarantees:
///
/// * if it implements [`Hash`], it must be consistent with (or, even better, based on) [`term_hash`];
/// * if it implements [`PartialEq`], it must be consistent with (or, even better, based on) [`term_eq`].
pub trait TTerm {
    /// Returns the type of this term.
    fn term_type(&self) -> TermType;

    /// Return the "value" of this term, which depends on its type:
    /// * for a named node, its IRI;
    /// * for a literal, its lexical value;
    /// * for a blank node, its local identifier;
    /// * for a variable, its name;
    /// * for the default graph, a fixed placeholder;
    /// * for a quad, `None`.
    fn value(&self) -> Option<&str>;

    /// Return the language tag of this term if it is a literal
    /// (the empty string if the literal is not language-tagged).
    fn language(&self) -> Option<&str> {
        None
    }

    /// Return the datatype of this term if it is a literal.
    fn datatype(&self) -> Option<&NamedNode> {
        None
    }

    /// Return the underlying quad if this term is a quad.
    fn as_quad(&self) -> Option<&Quad> {
        None
    }

    /// This method ensures that all implementations of `TTerm`
    /// can be turned into a trait object.
    fn as_dyn(&self) -> &dyn TTerm;

    /// Whether `other` is present and is structurally equal to this term.
    ///
    /// ```
    /// use rdfjs_term::{NamedNode, TTerm};
    ///
    /// let n = NamedNode::new("http://example.org/");
    /// assert!(n.equals(Some(&NamedNode::new("http://example.org/"))));
    /// assert!(!n.equals(None::<&NamedNode>));
    /// ```
    fn equals<T>(&self, other: Option<&T>) -> bool
    where
        Self: Sized,
        T: TTerm + ?Sized,
    {
        other.is_some_and(|other| term_eq(self, other))
    }
}

/// Compare two terms structurally:
/// * the term types must be the same;
/// * all default graphs are equal, whatever their stored value;
/// * quads are equal iff their four components are pairwise equal;
/// * other terms must have the same value,
///   and for literals the same language and datatype.
pub fn term_eq<T1, T2>(t1: &T1, t2: &T2) -> bool
where
    T1: TTerm + ?Sized,
    T2: TTerm + ?Sized,
{
    let tt = t1.term_type();
    if tt != t2.term_type() {
        return false;
    }
    match tt {
        TermType::DefaultGraph => true,
        TermType::Quad => match (t1.as_quad(), t2.as_quad()) {
            (Some(q1), Some(q2)) => {
                term_eq(q1.subject(), q2.subject())
                    && term_eq(q1.predicate(), q2.predicate())
                    && term_eq(q1.object(), q2.object())
                    && term_eq(q1.graph(), q2.graph())
            }
            _ => false,
        },
        TermType::Literal => {
            t1.value() == t2.value()
                && t1.language() == t2.language()
                && match (t1.datatype(), t2.datatype()) {
                    (Some(d1), Some(d2)) => d1.value() == d2.value(),
                    (d1, d2) => d1.is_none() && d2.is_none(),
                }
        }
        _ => t1.value() == t2.value(),
    }
}

/// Compute the hash of a term, consistently with [`term_eq`].
pub fn term_hash<T, H>(t: &T, state: &mut H)
where
    T: TTerm + ?Sized,
    H: Hasher,
{
    let tt = t.term_type();
    tt.hash(state);
    match tt {
        TermType::DefaultGraph => {}
        TermType::Quad => {
            if let Some(q) = t.as_quad() {
                term_hash(q.subject(), state);
                term_hash(q.predicate(), state);
                term_hash(q.object(), state);
                term_hash(q.graph(), state);
            }
        }
        TermType::Literal => {
            t.value().hash(state);
            t.language().hash(state);
            t.datatype().map(NamedNode::value).hash(state);
        }
        _ => t.value().hash(state),
    }
}

/// Implement `PartialEq` and `Hash` for a term type,
/// based on [`term_eq`] and [`term_hash`].
macro_rules! impl_term_eq_hash {
    ($ty:ty) => {
        impl<T> PartialEq<T> for $ty
        where
            T: $crate::TTerm + ?Sized,
        {
            fn eq(&self, other: &T) -> bool {
                $crate::term_eq(self, other)
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $crate::term_hash(self, state)
            }
        }
    };
}
pub(crate) use impl_term_eq_hash;
