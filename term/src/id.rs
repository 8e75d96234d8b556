//! Term identifiers: strings computed from the content of a term,
//! suitable as keys of associative structures.
//!
//! Two terms get the same identifier iff they are equal
//! (see [`term_eq`](crate::term_eq)),
//! and [`DataFactory::from_id`](crate::DataFactory::from_id)
//! recovers a term from its identifier.
//!
//! | term | identifier |
//! |------|------------|
//! | named node | `<http://example.org/>` |
//! | blank node | `_:b1` |
//! | simple literal | `"hello"` |
//! | language-tagged literal | `"hello"@en` |
//! | typed literal | `"42"^^<http://www.w3.org/2001/XMLSchema#integer>` |
//! | variable | `?x` |
//! | default graph | (empty string) |
//! | quad | `<<s p o g>>`, `g` omitted for the default graph |

use crate::_display::{is_label_delimiter, write_term};
use crate::{
    DataFactory, DefaultGraph, GraphName, Literal, NamedNode, Object, Quad, Result, Subject, TTerm,
    Term, TermError, Variable,
};

/// Compute the identifier of `term`.
pub fn term_to_id<T>(term: &T) -> String
where
    T: TTerm + ?Sized,
{
    let mut id = String::new();
    // writing into a String only fails if `term` breaks the TTerm contract
    if write_term(&mut id, term).is_err() {
        log::warn!("incomplete identifier for {:?} term", term.term_type());
    }
    id
}

/// Recover a term from its identifier.
///
/// Blank nodes are obtained from `factory`,
/// so their labels follow the rules of [`DataFactory::blank_node`].
///
/// # Error
///
/// Fails with [`TermError::InvalidId`] if `id` was not produced by [`term_to_id`].
pub(crate) fn term_from_id(factory: &DataFactory, id: &str) -> Result<Term> {
    let mut parser = IdParser {
        factory,
        id,
        rest: id,
    };
    let term = parser.term()?;
    if !parser.rest.is_empty() {
        return Err(parser.error("unexpected trailing characters"));
    }
    Ok(term)
}

struct IdParser<'a> {
    factory: &'a DataFactory,
    id: &'a str,
    rest: &'a str,
}

impl<'a> IdParser<'a> {
    fn error(&self, reason: &str) -> TermError {
        let pos = self.id.len() - self.rest.len();
        TermError::invalid_id(self.id, format!("{reason} at byte {pos}"))
    }

    fn eat(&mut self, prefix: &str) -> bool {
        match self.rest.strip_prefix(prefix) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn expect(&mut self, prefix: &str) -> Result<()> {
        if self.eat(prefix) {
            Ok(())
        } else {
            Err(self.error(&format!("expected '{prefix}'")))
        }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(c)
    }

    fn term(&mut self) -> Result<Term> {
        if self.rest.is_empty() {
            Ok(DefaultGraph::new().into())
        } else if self.eat("<<") {
            self.quad().map(Term::from)
        } else if self.eat("<") {
            Ok(NamedNode::new(self.iri()?).into())
        } else if self.eat("_:") {
            let label = self.label()?;
            Ok(self.factory.blank_node(Some(&label)).into())
        } else if self.eat("?") {
            Ok(Variable::new(self.label()?).into())
        } else if self.eat("\"") {
            self.literal().map(Term::from)
        } else {
            Err(self.error("unexpected character"))
        }
    }

    fn quad(&mut self) -> Result<Quad> {
        let s = self.term()?;
        self.expect(" ")?;
        let p = self.term()?;
        self.expect(" ")?;
        let o = self.term()?;
        let g = if self.eat(" ") {
            self.term()?
        } else {
            DefaultGraph::new().into()
        };
        self.expect(">>")?;
        let s = Subject::try_from(s).map_err(|e| self.error(&e.to_string()))?;
        let p = NamedNode::try_from(p).map_err(|e| self.error(&e.to_string()))?;
        let o = Object::try_from(o).map_err(|e| self.error(&e.to_string()))?;
        let g = GraphName::try_from(g).map_err(|e| self.error(&e.to_string()))?;
        Ok(Quad::new(s, p, o, g))
    }

    // after the opening '<'
    fn iri(&mut self) -> Result<String> {
        let mut iri = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated IRI")),
                Some('>') => return Ok(iri),
                Some('\\') => iri.push(self.uchar()?),
                Some(c) => iri.push(c),
            }
        }
    }

    fn label(&mut self) -> Result<String> {
        let mut label = String::new();
        while let Some(c) = self.peek() {
            if c == '\\' {
                self.bump();
                label.push(self.uchar()?);
            } else if is_label_delimiter(c) {
                break;
            } else {
                self.bump();
                label.push(c);
            }
        }
        Ok(label)
    }

    // after the opening '"'
    fn literal(&mut self) -> Result<Literal> {
        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("unterminated literal")),
                Some('"') => break,
                Some('\\') => match self.peek() {
                    Some('"') => {
                        self.bump();
                        value.push('"');
                    }
                    Some('\\') => {
                        self.bump();
                        value.push('\\');
                    }
                    Some('n') => {
                        self.bump();
                        value.push('\n');
                    }
                    Some('r') => {
                        self.bump();
                        value.push('\r');
                    }
                    _ => value.push(self.uchar()?),
                },
                Some(c) => value.push(c),
            }
        }
        if self.eat("@") {
            let lang = self.label()?;
            Ok(Literal::new_lang(value, lang))
        } else if self.eat("^^<") {
            let dt = self.iri()?;
            Ok(Literal::new_dt(value, NamedNode::new(dt)))
        } else {
            Ok(Literal::new(value))
        }
    }

    // after a '\'
    fn uchar(&mut self) -> Result<char> {
        let len = match self.bump() {
            Some('u') => 4,
            Some('U') => 8,
            _ => return Err(self.error("invalid escape sequence")),
        };
        let hex = self
            .rest
            .get(..len)
            .ok_or_else(|| self.error("truncated escape sequence"))?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(self.error("invalid escape sequence"));
        }
        let c = u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| self.error("invalid code point"))?;
        self.rest = &self.rest[len..];
        Ok(c)
    }
}
