//! Blank node like specified in [RDF](https://www.w3.org/TR/rdf11-primer/#section-blank-node).
//!
//! Blank nodes can not be built from an arbitrary label outside this crate;
//! they are minted by [`DataFactory::blank_node`](crate::DataFactory::blank_node),
//! which keeps generated labels unique.

use std::fmt;
use std::sync::Arc;

use crate::_trait::impl_term_eq_hash;
use crate::{TTerm, TermType};

/// An RDF blank node.
///
/// See [module documentation](index.html)
/// for more detail.
#[derive(Clone, Debug)]
pub struct BlankNode(Arc<str>);

impl BlankNode {
    /// Return a new blank node with the given label.
    ///
    /// # Pre-condition
    ///
    /// The caller is in charge of the uniqueness of `label`.
    pub(crate) fn new_unchecked<T>(label: T) -> Self
    where
        T: Into<Arc<str>>,
    {
        BlankNode(label.into())
    }

    /// The local identifier of this blank node.
    ///
    /// _Note:_ The identifier does not have a leading `_:`.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TTerm for BlankNode {
    fn term_type(&self) -> TermType {
        TermType::BlankNode
    }
    fn value(&self) -> Option<&str> {
        Some(&self.0)
    }
    fn as_dyn(&self) -> &dyn TTerm {
        self
    }
}

impl_term_eq_hash!(BlankNode);

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::_display::write_term(f, self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("b0" => "_:b0" ; "simple")]
    #[test_case("_" => "_:_" ; "underscore")]
    #[test_case("1z" => "_:1z" ; "base36")]
    #[test_case("a b" => "_:a\\u0020b" ; "space is escaped")]
    fn display(label: &str) -> String {
        BlankNode::new_unchecked(label).to_string()
    }

    #[test]
    fn value() {
        let b = BlankNode::new_unchecked("xyz");
        assert_eq!(b.value(), "xyz");
        assert_eq!(TTerm::value(&b), Some("xyz"));
        assert_eq!(b.term_type(), TermType::BlankNode);
    }

    // further tests are executed in `crate::test`
}
