use super::*;
use crate::ns::{rdf, rdf_lang_string, xsd, xsd_string};
use std::collections::HashMap;
use test_case::test_case;

pub(crate) fn h<H: std::hash::Hash + ?Sized>(x: &H) -> u64 {
    use std::hash::Hasher;
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    x.hash(&mut hasher);
    hasher.finish()
}

pub(crate) fn setup() {
    TEST_SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

static TEST_SETUP: std::sync::Once = std::sync::Once::new();

fn sample() -> Vec<Term> {
    let f = data_factory();
    let s = f.named_node("http://example.org/s");
    let p = f.named_node("http://example.org/p");
    vec![
        s.clone().into(),
        f.named_node("http://example.org/S").into(),
        f.blank_node(None).into(),
        f.blank_node(Some("http://example.org/s")).into(),
        f.literal("http://example.org/s").into(),
        f.literal_lang("chat", "en").into(),
        f.literal_lang("chat", "fr").into(),
        f.literal_dt("chat", f.named_node(xsd::token)).into(),
        f.literal_dt("chat", f.named_node(rdf::langString)).into(),
        f.variable("http://example.org/s").into(),
        f.default_graph().into(),
        f.quad(s.clone(), p.clone(), f.literal("o"), None).into(),
        f.quad(s.clone(), p.clone(), f.literal("o"), Some(s.clone().into()))
            .into(),
        f.quad(s, p.clone(), p, None).into(),
    ]
}

#[test]
fn reflexive() {
    for t in sample() {
        assert!(t.equals(Some(&t)), "{t}");
        assert!(t.equals(Some(&t.clone())), "{t}");
    }
}

#[test]
fn symmetric_and_discriminating() {
    let terms = sample();
    for (i, t1) in terms.iter().enumerate() {
        for (j, t2) in terms.iter().enumerate() {
            assert_eq!(t1.equals(Some(t2)), t2.equals(Some(t1)), "{t1} {t2}");
            assert_eq!(t1.equals(Some(t2)), i == j, "{t1} {t2}");
        }
    }
}

#[test]
fn absent_is_never_equal() {
    for t in sample() {
        assert!(!t.equals(None::<&Term>), "{t}");
        assert!(!t.equals(None::<&dyn TTerm>), "{t}");
    }
}

#[test]
fn equal_terms_have_equal_hashes_and_ids() {
    let f = data_factory();
    for t in sample() {
        let copy = f.from_term(t.as_dyn()).unwrap();
        assert_eq!(copy, t);
        assert_eq!(h(&copy), h(&t));
        assert_eq!(f.id(&copy), f.id(&t));
    }
}

#[test]
fn distinct_terms_have_distinct_ids() {
    let f = data_factory();
    let terms = sample();
    let ids: HashMap<_, _> = terms.iter().map(|t| (term_to_id(t), t)).collect();
    assert_eq!(ids.len(), terms.len());
    for (id, t) in ids {
        assert_eq!(&f.from_id(&id).unwrap(), t);
    }
}

#[test]
fn term_types() {
    let types: Vec<_> = sample().iter().map(|t| t.term_type()).collect();
    for tt in TermType::ALL {
        assert!(types.contains(&tt), "{tt}");
    }
}

#[test]
fn variants_and_enum_are_interchangeable() {
    let n = NamedNode::new("http://example.org/");
    let t = Term::from(n.clone());
    assert_eq!(n, t);
    assert_eq!(t, n);
    assert_eq!(h(&n), h(&t));
    assert_eq!(NamedNode::try_from(t).unwrap(), n);
}

#[test_case(Term::from(Literal::new("x")), TermType::Literal ; "literal")]
#[test_case(Term::from(Variable::new("x")), TermType::Variable ; "variable")]
#[test_case(Term::from(DefaultGraph::new()), TermType::DefaultGraph ; "default graph")]
fn not_a_named_node(t: Term, found: TermType) {
    assert_eq!(
        NamedNode::try_from(t).unwrap_err(),
        TermError::UnsupportedKind {
            expected: "a named node",
            found
        }
    );
}

#[test]
fn terms_key_hash_maps() {
    let f = data_factory();
    let mut count: HashMap<Term, usize> = HashMap::new();
    for t in [
        Term::from(f.literal_lang("a", "en")),
        Term::from(f.literal_lang("a", "en")),
        Term::from(f.default_graph()),
        Term::from(DefaultGraph::with_value("other")),
        Term::from(f.literal("a")),
    ] {
        *count.entry(t).or_default() += 1;
    }
    assert_eq!(count.len(), 3);
    assert_eq!(count[&Term::from(Literal::new_lang("a", "en"))], 2);
    assert_eq!(count[&Term::from(DefaultGraph::new())], 2);
}

#[test]
fn literal_datatype_singletons() {
    let f = data_factory();
    assert_eq!(f.literal("x").datatype(), xsd_string());
    assert_eq!(f.literal_lang("x", "en").datatype(), rdf_lang_string());
    // the language always wins over the datatype
    let lit = f.literal_with("x", Some(LangOrDatatype::from("en")));
    assert!(TTerm::datatype(&lit).is_some_and(|dt| dt == rdf_lang_string()));
}

/// A term type outside of this crate, relying only on [`TTerm`].
#[derive(Debug)]
struct ForeignIri(&'static str);

impl TTerm for ForeignIri {
    fn term_type(&self) -> TermType {
        TermType::NamedNode
    }
    fn value(&self) -> Option<&str> {
        Some(self.0)
    }
    fn as_dyn(&self) -> &dyn TTerm {
        self
    }
}

#[test]
fn foreign_terms() {
    let foreign = ForeignIri("http://example.org/");
    let n = NamedNode::new("http://example.org/");
    assert!(foreign.equals(Some(&n)));
    assert!(n.equals(Some(&foreign)));
    assert_eq!(n, foreign);
    assert_eq!(term_to_id(&foreign), term_to_id(&n));
    assert_eq!(data_factory().from_term(&foreign).unwrap(), n);
}

/// A term type that breaks the contract of [`TTerm`].
struct BrokenLiteral;

impl TTerm for BrokenLiteral {
    fn term_type(&self) -> TermType {
        TermType::Literal
    }
    fn value(&self) -> Option<&str> {
        Some("x")
    }
    fn as_dyn(&self) -> &dyn TTerm {
        self
    }
}

#[test]
fn broken_terms_are_rejected() {
    assert!(data_factory().from_term(&BrokenLiteral).is_err());
    assert!(!BrokenLiteral.equals(Some(&Literal::new("x"))));
}

/// A blank node from outside of this crate, with an arbitrary label.
struct ForeignBlankNode(&'static str);

impl TTerm for ForeignBlankNode {
    fn term_type(&self) -> TermType {
        TermType::BlankNode
    }
    fn value(&self) -> Option<&str> {
        Some(self.0)
    }
    fn as_dyn(&self) -> &dyn TTerm {
        self
    }
}

#[test_case("b1", Some("b1") ; "plain label")]
#[test_case("", Some("") ; "empty label")]
#[test_case("http://example.org/#x", None ; "fragment label")]
#[test_case("#", None ; "bare hash")]
fn foreign_blank_node_labels(label: &'static str, kept: Option<&str>) {
    setup();
    let f = data_factory();
    let copy = BlankNode::try_from(f.from_term(&ForeignBlankNode(label)).unwrap()).unwrap();
    match kept {
        Some(exp) => assert_eq!(copy.value(), exp),
        None => {
            assert!(!copy.value().contains('#'), "{copy}");
            assert_eq!(copy.value(), "2");
        }
    }
}
