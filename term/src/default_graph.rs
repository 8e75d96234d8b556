//! The default graph of an RDF dataset.

use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::_trait::impl_term_eq_hash;
use crate::{TTerm, TermType};

/// The value carried by default graphs built with [`DefaultGraph::new`].
pub const DEFAULT_GRAPH_VALUE: &str = "";

lazy_static! {
    static ref PLACEHOLDER: Arc<str> = Arc::from(DEFAULT_GRAPH_VALUE);
}

/// The default (unnamed) graph.
///
/// The value is kept for libraries that expect one,
/// but it plays no role in equality or hashing:
/// all default graphs are the same node.
#[derive(Clone, Debug)]
pub struct DefaultGraph(Arc<str>);

impl DefaultGraph {
    /// Return the default graph, with the standard placeholder value.
    pub fn new() -> Self {
        DefaultGraph(PLACEHOLDER.clone())
    }

    /// Return the default graph, carrying a custom placeholder value.
    pub fn with_value<T>(value: T) -> Self
    where
        T: Into<Arc<str>>,
    {
        DefaultGraph(value.into())
    }

    /// The placeholder value of this default graph.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl Default for DefaultGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TTerm for DefaultGraph {
    fn term_type(&self) -> TermType {
        TermType::DefaultGraph
    }
    fn value(&self) -> Option<&str> {
        Some(&self.0)
    }
    fn as_dyn(&self) -> &dyn TTerm {
        self
    }
}

impl_term_eq_hash!(DefaultGraph);

impl fmt::Display for DefaultGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::_display::write_term(f, self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn placeholder() {
        assert_eq!(DefaultGraph::new().value(), DEFAULT_GRAPH_VALUE);
        assert_eq!(DefaultGraph::default().value(), DEFAULT_GRAPH_VALUE);
    }

    #[test]
    fn value_ignored_by_equality() {
        let g1 = DefaultGraph::new();
        let g2 = DefaultGraph::with_value("urn:x-default");
        assert_eq!(g2.value(), "urn:x-default");
        assert!(g1.equals(Some(&g2)));
        assert!(g2.equals(Some(&g1)));
        assert_eq!(crate::test::h(&g1), crate::test::h(&g2));
    }

    #[test]
    fn not_equal_to_empty_named_node() {
        let g = DefaultGraph::new();
        let n = crate::NamedNode::new(DEFAULT_GRAPH_VALUE);
        assert!(!g.equals(Some(&n)));
    }
}
