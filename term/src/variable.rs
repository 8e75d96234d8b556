//! Variables like used in SPARQL or universally quantified variables in
//! Notation3.

use std::fmt;
use std::sync::Arc;

use crate::_trait::impl_term_eq_hash;
use crate::{TTerm, TermType};

/// A variable as an RDF term.
///
/// The name is not validated against SPARQL's `VARNAME` production.
#[derive(Clone, Debug)]
pub struct Variable(Arc<str>);

impl Variable {
    /// Return a new variable term with the given name.
    pub fn new<T>(name: T) -> Self
    where
        T: Into<Arc<str>>,
    {
        Variable(name.into())
    }

    /// The name of this variable, without the leading `?`.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TTerm for Variable {
    fn term_type(&self) -> TermType {
        TermType::Variable
    }
    fn value(&self) -> Option<&str> {
        Some(&self.0)
    }
    fn as_dyn(&self) -> &dyn TTerm {
        self
    }
}

impl_term_eq_hash!(Variable);

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::_display::write_term(f, self)
    }
}
