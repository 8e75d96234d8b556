//! This crate defines the RDF term model shared by RDF libraries:
//! named nodes, literals, blank nodes, variables, the default graph and quads,
//! all of them exposing a `termType` tag and a structural equality.
//!
//! * Every type of term has its own type ([`NamedNode`], [`Literal`]...),
//!   and [`Term`] gathers them in a closed enum.
//! * The [`TTerm`] trait is the common surface of all of them.
//! * A [`Quad`] only accepts the appropriate types of terms in each position
//!   ([`Subject`], [`NamedNode`], [`Object`], [`GraphName`]).
//! * A [`DataFactory`] builds terms, and mints blank node labels that never collide.
//! * [`term_to_id`] computes a string identifying a term by its content.
//!
//! Terms are immutable, cheap to clone, and can be shared between threads.
//!
//! Contents are never validated: IRIs, language tags or lexical values
//! are stored as given, checking them is the job of parsers and serializers.
#![deny(missing_docs)]

mod _display;
mod _error;
pub use _error::*;
mod _kind;
pub use _kind::*;
mod _term;
pub use _term::*;
mod _trait;
pub use _trait::{term_eq, term_hash, TTerm};

pub mod blank_node;
pub use blank_node::BlankNode;
pub mod default_graph;
pub use default_graph::{DefaultGraph, DEFAULT_GRAPH_VALUE};
pub mod factory;
pub use factory::{data_factory, DataFactory, FactoryConfig};
pub mod id;
pub use id::term_to_id;
pub mod literal;
pub use literal::{LangOrDatatype, Literal};
pub mod named_node;
pub use named_node::NamedNode;
pub mod ns;
pub mod quad;
pub use quad::{GraphName, Object, Quad, Subject};
pub mod variable;
pub use variable::Variable;

#[cfg(test)]
mod test;
