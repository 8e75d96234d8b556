//! A [`DataFactory`] is the entry point for creating terms.
//!
//! Besides building every type of term,
//! it mints blank node labels that never collide
//! with the labels it minted before.
//!
//! ```
//! use rdfjs_term::{data_factory, TTerm};
//!
//! let f = data_factory();
//! let alice = f.blank_node(None);
//! let bob = f.blank_node(None);
//! assert!(!alice.equals(Some(&bob)));
//!
//! let knows = f.named_node("http://xmlns.com/foaf/0.1/knows");
//! let q = f.quad(alice, knows, bob, None);
//! assert!(q.graph().is_default_graph());
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use num_bigint::BigUint;

use crate::id::term_from_id;
use crate::*;

/// The initial blank node counter of a factory built with [`data_factory`].
///
/// The counter is incremented before each label is generated,
/// so the first generated label is `"2"`.
pub const DEFAULT_BLANK_NODE_START: u64 = 1;

/// The radix in which blank node counter values are rendered.
pub const BLANK_NODE_RADIX: u32 = 36;

/// Configuration of a [`DataFactory`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactoryConfig {
    blank_node_start: BigUint,
}

impl FactoryConfig {
    /// Build the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// The initial value of the blank node counter.
    ///
    /// Generated labels use values strictly greater than this one.
    pub fn blank_node_start(&self) -> &BigUint {
        &self.blank_node_start
    }

    /// Change the initial value of the blank node counter.
    ///
    /// Generated labels use values strictly greater than this one.
    pub fn with_blank_node_start<N>(mut self, start: N) -> Self
    where
        N: Into<BigUint>,
    {
        self.blank_node_start = start.into();
        self
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        FactoryConfig {
            blank_node_start: DEFAULT_BLANK_NODE_START.into(),
        }
    }
}

/// A factory for terms.
///
/// # Blank nodes
///
/// Generated labels are the successive values of a counter, written in base 36.
/// The counter is incremented before each label is rendered.
/// The counter never decreases, so a given factory never generates the same label twice.
/// Two factories starting from the same value, on the other hand,
/// *will* generate the same labels.
///
/// The factory can be shared between threads:
/// the counter is protected by a lock.
#[derive(Debug)]
pub struct DataFactory {
    // the counter value of the last generated label
    last_blank_node: Mutex<BigUint>,
}

impl DataFactory {
    /// Build a factory with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&FactoryConfig::default())
    }

    /// Build a factory with the given configuration.
    pub fn with_config(config: &FactoryConfig) -> Self {
        DataFactory {
            last_blank_node: Mutex::new(config.blank_node_start.clone()),
        }
    }

    /// Move the counter to `start`, so that generated labels use values greater than `start`.
    ///
    /// The counter is never moved backwards:
    /// if it is already at or past `start`, nothing changes.
    pub fn reseed<N>(&self, start: N)
    where
        N: Into<BigUint>,
    {
        let start = start.into();
        let mut last = self.lock_counter();
        if start > *last {
            log::debug!("blank node counter moved from {} to {}", *last, start);
            *last = start;
        }
    }

    /// Return a new named node.
    ///
    /// The IRI is not validated.
    pub fn named_node<T>(&self, iri: T) -> NamedNode
    where
        T: Into<Arc<str>>,
    {
        NamedNode::new(iri)
    }

    /// Return a blank node.
    ///
    /// * Without a label, a fresh label is generated.
    /// * A label containing `#` is not used either:
    ///   it would be mistaken for an IRI fragment, so a fresh label is generated instead.
    /// * Any other label is used as is;
    ///   the caller is then in charge of avoiding collisions.
    pub fn blank_node(&self, label: Option<&str>) -> BlankNode {
        match label {
            Some(label) if !label.contains('#') => BlankNode::new_unchecked(label),
            Some(label) => {
                let fresh = self.fresh_label();
                log::debug!("blank node label {label:?} replaced by {fresh:?}");
                BlankNode::new_unchecked(fresh)
            }
            None => BlankNode::new_unchecked(self.fresh_label()),
        }
    }

    fn fresh_label(&self) -> String {
        let n = {
            let mut last = self.lock_counter();
            *last += 1u32;
            last.clone()
        };
        let label = n.to_str_radix(BLANK_NODE_RADIX);
        log::trace!("minted blank node label {label}");
        label
    }

    fn lock_counter(&self) -> std::sync::MutexGuard<'_, BigUint> {
        // the counter is consistent even if a thread panicked while holding the lock
        self.last_blank_node
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Return a new simple literal, of datatype `xsd:string`.
    pub fn literal<T>(&self, value: T) -> Literal
    where
        T: Into<Arc<str>>,
    {
        Literal::new(value)
    }

    /// Return a new language-tagged literal, of datatype `rdf:langString`.
    pub fn literal_lang<T, U>(&self, value: T, language: U) -> Literal
    where
        T: Into<Arc<str>>,
        U: Into<Arc<str>>,
    {
        Literal::new_lang(value, language)
    }

    /// Return a new typed literal.
    pub fn literal_dt<T>(&self, value: T, datatype: NamedNode) -> Literal
    where
        T: Into<Arc<str>>,
    {
        Literal::new_dt(value, datatype)
    }

    /// Return a new literal, which is
    /// * simple if `lang_or_dt` is `None`,
    /// * language-tagged if `lang_or_dt` is a language,
    /// * typed if `lang_or_dt` is a datatype.
    ///
    /// ```
    /// # use rdfjs_term::{data_factory, ns::xsd};
    /// let f = data_factory();
    /// let hello = f.literal_with("hello", Some("en".into()));
    /// assert_eq!(hello.language(), "en");
    /// let answer = f.literal_with("42", Some(f.named_node(xsd::integer).into()));
    /// assert_eq!(answer.datatype().value(), xsd::integer);
    /// ```
    pub fn literal_with<T>(&self, value: T, lang_or_dt: Option<LangOrDatatype>) -> Literal
    where
        T: Into<Arc<str>>,
    {
        Literal::new_with(value, lang_or_dt)
    }

    /// Return a new variable.
    pub fn variable<T>(&self, name: T) -> Variable
    where
        T: Into<Arc<str>>,
    {
        Variable::new(name)
    }

    /// Return the default graph.
    pub fn default_graph(&self) -> DefaultGraph {
        DefaultGraph::new()
    }

    /// Return a new quad, in the default graph if `graph` is `None`.
    pub fn quad<S, O>(
        &self,
        subject: S,
        predicate: NamedNode,
        object: O,
        graph: Option<GraphName>,
    ) -> Quad
    where
        S: Into<Subject>,
        O: Into<Object>,
    {
        let graph = graph.unwrap_or_else(|| self.default_graph().into());
        Quad::new(subject, predicate, object, graph)
    }

    /// Copy any implementation of [`TTerm`] into a [`Term`].
    ///
    /// Blank nodes are obtained through [`blank_node`](Self::blank_node),
    /// so labels containing `#` are replaced by fresh ones.
    ///
    /// # Error
    ///
    /// Fails if `term` does not honour the contract of [`TTerm`],
    /// e.g. a literal without a datatype.
    pub fn from_term<T>(&self, term: &T) -> Result<Term>
    where
        T: TTerm + ?Sized,
    {
        Term::from_term(self, term)
    }

    /// The identifier of `term`, see [`term_to_id`].
    pub fn id<T>(&self, term: &T) -> String
    where
        T: TTerm + ?Sized,
    {
        term_to_id(term)
    }

    /// The term identified by `id`, as computed by [`id`](Self::id).
    ///
    /// Blank nodes are obtained through [`blank_node`](Self::blank_node),
    /// so labels containing `#` are replaced by fresh ones.
    ///
    /// # Error
    ///
    /// Fails with [`TermError::InvalidId`](crate::TermError::InvalidId)
    /// if `id` is not a valid identifier.
    pub fn from_id(&self, id: &str) -> Result<Term> {
        term_from_id(self, id)
    }
}

impl Default for DataFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a factory with the default configuration.
pub fn data_factory() -> DataFactory {
    DataFactory::new()
}
