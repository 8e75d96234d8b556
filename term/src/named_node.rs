//! Named nodes, i.e. terms identified by an
//! [IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs).

use std::fmt;
use std::sync::Arc;

use crate::_trait::impl_term_eq_hash;
use crate::{TTerm, TermType};

/// An RDF named node.
///
/// The IRI is not validated: checking that it is well-formed
/// is the responsibility of whoever provides it.
#[derive(Clone, Debug)]
pub struct NamedNode(Arc<str>);

impl NamedNode {
    /// Return a new named node with the given IRI.
    pub fn new<T>(iri: T) -> Self
    where
        T: Into<Arc<str>>,
    {
        NamedNode(iri.into())
    }

    /// The IRI of this named node.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TTerm for NamedNode {
    fn term_type(&self) -> TermType {
        TermType::NamedNode
    }
    fn value(&self) -> Option<&str> {
        Some(&self.0)
    }
    fn as_dyn(&self) -> &dyn TTerm {
        self
    }
}

impl_term_eq_hash!(NamedNode);

impl AsRef<str> for NamedNode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::_display::write_term(f, self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn value_is_kept_verbatim() {
        let n = NamedNode::new("http://example.org/a");
        assert_eq!(n.value(), "http://example.org/a");
        assert_eq!(TTerm::value(&n), Some("http://example.org/a"));
        assert_eq!(n.term_type(), TermType::NamedNode);
    }

    #[test]
    fn not_validated() {
        // no IRI check is performed
        let n = NamedNode::new("not an iri");
        assert_eq!(n.value(), "not an iri");
    }

    #[test]
    fn display() {
        let n = NamedNode::new(String::from("http://example.org/a"));
        assert_eq!(n.to_string(), "<http://example.org/a>");
    }

    // further tests are executed in `crate::test`
}
