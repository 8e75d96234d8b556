// this module is transparently re-exported by its parent `lib`
//
// Write terms in their canonical textual form,
// used both by `Display` and by term identifiers (see `id`).
//
// The form is close to N-Triples, extended with variables (`?name`),
// quads (`<<s p o g>>`) and the default graph (empty string).
// Every character that could end a token is escaped,
// so that two different terms never get the same form.

use std::fmt;

use crate::ns::xsd_string;
use crate::{TTerm, TermType};

/// Write `term` in its canonical textual form.
pub(crate) fn write_term<W, T>(w: &mut W, term: &T) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    T: TTerm + ?Sized,
{
    let value = term.value().unwrap_or_default();
    match term.term_type() {
        TermType::NamedNode => write_iri(w, value),
        TermType::BlankNode => {
            w.write_str("_:")?;
            write_label(w, value)
        }
        TermType::Variable => {
            w.write_char('?')?;
            write_label(w, value)
        }
        TermType::DefaultGraph => Ok(()),
        TermType::Literal => {
            w.write_char('"')?;
            for c in value.chars() {
                match c {
                    '"' => w.write_str("\\\"")?,
                    '\\' => w.write_str("\\\\")?,
                    '\n' => w.write_str("\\n")?,
                    '\r' => w.write_str("\\r")?,
                    c => w.write_char(c)?,
                }
            }
            w.write_char('"')?;
            match (term.language(), term.datatype()) {
                (Some(lang), _) if !lang.is_empty() => {
                    w.write_char('@')?;
                    write_label(w, lang)
                }
                (_, Some(dt)) if dt.value() != xsd_string().value() => {
                    w.write_str("^^")?;
                    write_iri(w, dt.value())
                }
                _ => Ok(()),
            }
        }
        TermType::Quad => {
            let Some(q) = term.as_quad() else {
                return Err(fmt::Error);
            };
            w.write_str("<<")?;
            write_term(w, q.subject())?;
            w.write_char(' ')?;
            write_term(w, q.predicate())?;
            w.write_char(' ')?;
            write_term(w, q.object())?;
            if !q.graph().is_default_graph() {
                w.write_char(' ')?;
                write_term(w, q.graph())?;
            }
            w.write_str(">>")
        }
    }
}

fn write_iri<W>(w: &mut W, iri: &str) -> fmt::Result
where
    W: fmt::Write + ?Sized,
{
    w.write_char('<')?;
    for c in iri.chars() {
        match c {
            '<' | '>' | '\\' => write_uchar(w, c)?,
            c => w.write_char(c)?,
        }
    }
    w.write_char('>')
}

fn write_label<W>(w: &mut W, label: &str) -> fmt::Result
where
    W: fmt::Write + ?Sized,
{
    for c in label.chars() {
        if is_label_delimiter(c) {
            write_uchar(w, c)?;
        } else {
            w.write_char(c)?;
        }
    }
    Ok(())
}

/// Characters that end a label (blank node, variable or language tag).
pub(crate) fn is_label_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '>' | '\\' | '"' | '<')
}

fn write_uchar<W>(w: &mut W, c: char) -> fmt::Result
where
    W: fmt::Write + ?Sized,
{
    let code = c as u32;
    if code <= 0xFFFF {
        write!(w, "\\u{code:04X}")
    } else {
        write!(w, "\\U{code:08X}")
    }
}
