//! RDF literals like specified in
//! [RDF](https://www.w3.org/TR/rdf11-primer/#section-literal).
//!
//! A literal has a lexical value, a language tag and a datatype.
//! The public constructors guarantee that
//! * a language-tagged literal always has the datatype `rdf:langString`,
//! * a literal without language nor explicit datatype has the datatype `xsd:string`.

use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::_trait::impl_term_eq_hash;
use crate::ns::{rdf_lang_string, xsd_string};
use crate::{NamedNode, TTerm, TermType};

lazy_static! {
    static ref NO_LANGUAGE: Arc<str> = Arc::from("");
}

/// An RDF literal.
///
/// Neither the language tag nor the lexical value are validated:
/// the [RDF specification](https://www.w3.org/TR/2014/REC-rdf11-concepts-20140225/#section-Graph-Literal)
/// requires implementations to accept ill-typed literals,
/// and checking tags against [BCP47](https://tools.ietf.org/html/bcp47)
/// is left to the producers of literals.
#[derive(Clone, Debug)]
pub struct Literal {
    value: Arc<str>,
    language: Arc<str>,
    datatype: NamedNode,
}

impl Literal {
    // Not public: this is the only way to pair an arbitrary language with an arbitrary datatype.
    fn from_raw_parts(value: Arc<str>, language: Arc<str>, datatype: NamedNode) -> Self {
        Literal {
            value,
            language,
            datatype,
        }
    }

    /// Return a new simple literal, of datatype `xsd:string`.
    pub fn new<T>(value: T) -> Self
    where
        T: Into<Arc<str>>,
    {
        Self::from_raw_parts(value.into(), NO_LANGUAGE.clone(), xsd_string().clone())
    }

    /// Return a new language-tagged literal, of datatype `rdf:langString`.
    ///
    /// An empty `language` means "no language":
    /// the result is then the same as [`Literal::new`].
    pub fn new_lang<T, U>(value: T, language: U) -> Self
    where
        T: Into<Arc<str>>,
        U: Into<Arc<str>>,
    {
        let language = language.into();
        if language.is_empty() {
            Self::new(value)
        } else {
            Self::from_raw_parts(value.into(), language, rdf_lang_string().clone())
        }
    }

    /// Return a new literal with an arbitrary datatype, and no language.
    ///
    /// Neither is checked if `datatype` refers to a known datatype nor if `value` is
    /// in the lexical space of `datatype`.
    pub fn new_dt<T>(value: T, datatype: NamedNode) -> Self
    where
        T: Into<Arc<str>>,
    {
        Self::from_raw_parts(value.into(), NO_LANGUAGE.clone(), datatype)
    }

    /// Build a literal from its value and an optional language or datatype.
    ///
    /// See [`LangOrDatatype`].
    pub fn new_with<T>(value: T, lang_or_dt: Option<LangOrDatatype>) -> Self
    where
        T: Into<Arc<str>>,
    {
        match lang_or_dt {
            None => Self::new(value),
            Some(LangOrDatatype::Language(tag)) => Self::new_lang(value, tag),
            Some(LangOrDatatype::Datatype(dt)) => Self::new_dt(value, dt),
        }
    }

    /// The lexical value of this literal.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The language tag of this literal, or the empty string.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The datatype of this literal.
    pub fn datatype(&self) -> &NamedNode {
        &self.datatype
    }

    /// Whether this literal carries a language tag.
    pub fn is_language_tagged(&self) -> bool {
        !self.language.is_empty()
    }
}

impl TTerm for Literal {
    fn term_type(&self) -> TermType {
        TermType::Literal
    }
    fn value(&self) -> Option<&str> {
        Some(&self.value)
    }
    fn language(&self) -> Option<&str> {
        Some(&self.language)
    }
    fn datatype(&self) -> Option<&NamedNode> {
        Some(&self.datatype)
    }
    fn as_dyn(&self) -> &dyn TTerm {
        self
    }
}

impl_term_eq_hash!(Literal);

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::_display::write_term(f, self)
    }
}

/// The optional second argument when building a literal:
/// either a language tag or a datatype, never both.
///
/// Strings convert to a language tag, named nodes to a datatype.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LangOrDatatype {
    /// A language tag, implying the datatype `rdf:langString`.
    Language(Arc<str>),
    /// A datatype, implying no language.
    Datatype(NamedNode),
}

impl From<&str> for LangOrDatatype {
    fn from(tag: &str) -> Self {
        LangOrDatatype::Language(tag.into())
    }
}

impl From<String> for LangOrDatatype {
    fn from(tag: String) -> Self {
        LangOrDatatype::Language(tag.into())
    }
}

impl From<Arc<str>> for LangOrDatatype {
    fn from(tag: Arc<str>) -> Self {
        LangOrDatatype::Language(tag)
    }
}

impl From<NamedNode> for LangOrDatatype {
    fn from(dt: NamedNode) -> Self {
        LangOrDatatype::Datatype(dt)
    }
}
