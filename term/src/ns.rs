//! Standard namespaces, and the well-known datatypes used by [`Literal`](crate::Literal).
//!
//! The datatypes [`rdf_lang_string`] and [`xsd_string`] are process-wide singletons,
//! created on first use and shared by every literal afterwards.

use lazy_static::lazy_static;

use crate::NamedNode;

/// Helper for creating a "namespace module"
/// defining a set of IRIs within a given IRI space.
///
/// The IRIs are exposed as `&'static str`;
/// it is never checked that the prefix is a valid IRI.
#[macro_export]
macro_rules! namespace {
    ($iri_prefix:literal, $($suffix:ident),*) => {
        /// Prefix used in this namespace.
        pub const PREFIX: &str = $iri_prefix;
        $(
            /// Generated IRI.
            #[allow(non_upper_case_globals)]
            pub const $suffix: &str = concat!($iri_prefix, stringify!($suffix));
        )*
    };
}

/// The standard `rdf:` namespace.
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        langString,
        dirLangString,
        HTML,
        XMLLiteral,
        JSON
    );
}

/// The standard `xsd:` namespace (datatypes commonly found in literals).
#[rustfmt::skip]
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        string,
        normalizedString,
        token,
        language,
        boolean,
        decimal,
        integer,
        long,
        int,
        double,
        float,
        date,
        dateTime,
        time,
        anyURI
    );
}

lazy_static! {
    static ref RDF_LANG_STRING: NamedNode = NamedNode::new(rdf::langString);
    static ref XSD_STRING: NamedNode = NamedNode::new(xsd::string);
}

/// The datatype of every language-tagged literal.
pub fn rdf_lang_string() -> &'static NamedNode {
    &RDF_LANG_STRING
}

/// The datatype of plain literals.
pub fn xsd_string() -> &'static NamedNode {
    &XSD_STRING
}
