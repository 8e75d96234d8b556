// this module is transparently re-exported by its parent `lib`
use std::fmt;
use std::str::FromStr;

use crate::TermError;

/// Any term belongs to one of those types.
///
/// The names are those of the `termType` tag shared by RDF libraries,
/// see [`TermType::as_str`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum TermType {
    /// RDF [IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    NamedNode,
    /// RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// [variable](https://www.w3.org/TR/sparql11-query/#QSynVariables)
    Variable,
    /// RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
    /// The unnamed graph of an RDF dataset
    DefaultGraph,
    /// A statement, see [`Quad`](crate::Quad)
    Quad,
}

impl TermType {
    /// All term types, in declaration order.
    pub const ALL: [TermType; 6] = [
        TermType::NamedNode,
        TermType::Literal,
        TermType::Variable,
        TermType::BlankNode,
        TermType::DefaultGraph,
        TermType::Quad,
    ];

    /// The `termType` tag of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            TermType::NamedNode => "NamedNode",
            TermType::Literal => "Literal",
            TermType::Variable => "Variable",
            TermType::BlankNode => "BlankNode",
            TermType::DefaultGraph => "DefaultGraph",
            TermType::Quad => "Quad",
        }
    }

    /// Whether terms of this type carry a `value`.
    pub fn has_value(self) -> bool {
        self != TermType::Quad
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TermType {
    type Err = TermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TermType::ALL
            .into_iter()
            .find(|tt| tt.as_str() == s)
            .ok_or_else(|| TermError::invalid_id(s, "unknown term type"))
    }
}
