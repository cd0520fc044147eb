//! # Path Codec
//!
//! Canonical, copyable string form of a [`Path`]:
//!
//! ```text
//! []                 → $
//! ["a", 1, "b"]      → $["a"][1]["b"]
//! ```
//!
//! Field names are wrapped in double quotes without escaping. A name that
//! itself contains `"` encodes to a string that [`decode`] rejects, so such
//! paths do not round-trip.

use crate::{DocumentError, DocumentResult, Path, Segment};
use logos::Logos;
use std::fmt::Write;

#[derive(Logos, Debug, Clone, PartialEq)]
enum Token<'src> {
    #[token("$")]
    Root,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    // Quotes stripped; no escape sequences
    #[regex(r#""[^"]*""#, |lex| { let s = lex.slice(); &s[1..s.len() - 1] })]
    Quoted(&'src str),

    #[regex(r"[0-9]+", |lex| lex.slice())]
    Digits(&'src str),
}

/// Render a path as `$` followed by one bracketed segment per entry.
pub fn encode(path: &Path) -> String {
    let mut out = String::from("$");
    for segment in path {
        match segment {
            Segment::Field(name) => {
                out.push_str("[\"");
                out.push_str(name);
                out.push_str("\"]");
            }
            Segment::Index(i) => {
                // Writing to a String cannot fail
                let _ = write!(out, "[{}]", i);
            }
        }
    }
    out
}

/// Parse the canonical form produced by [`encode`].
///
/// Only the exact canonical form is accepted: no whitespace, no leading
/// zeros on indices, no escaped quotes.
pub fn decode(input: &str) -> DocumentResult<Path> {
    let mut lexer = Token::lexer(input);

    match lexer.next() {
        Some(Ok(Token::Root)) => {}
        _ => return Err(DocumentError::invalid_path(input, 0, "expected '$'")),
    }

    let mut path = Path::root();

    while let Some(token) = lexer.next() {
        if token != Ok(Token::LBracket) {
            return Err(DocumentError::invalid_path(
                input,
                lexer.span().start,
                "expected '['",
            ));
        }

        let segment = match lexer.next() {
            Some(Ok(Token::Quoted(name))) => Segment::Field(name.to_string()),
            Some(Ok(Token::Digits(digits))) => {
                Segment::Index(parse_index(input, lexer.span().start, digits)?)
            }
            Some(_) => {
                return Err(DocumentError::invalid_path(
                    input,
                    lexer.span().start,
                    "expected quoted field name or index",
                ))
            }
            None => {
                return Err(DocumentError::invalid_path(
                    input,
                    input.len(),
                    "unexpected end of path",
                ))
            }
        };

        match lexer.next() {
            Some(Ok(Token::RBracket)) => path.push(segment),
            Some(_) => {
                return Err(DocumentError::invalid_path(
                    input,
                    lexer.span().start,
                    "expected ']'",
                ))
            }
            None => {
                return Err(DocumentError::invalid_path(
                    input,
                    input.len(),
                    "unexpected end of path",
                ))
            }
        }
    }

    Ok(path)
}

fn parse_index(input: &str, pos: usize, digits: &str) -> DocumentResult<usize> {
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(DocumentError::invalid_path(
            input,
            pos,
            "index has leading zeros",
        ));
    }

    digits
        .parse::<usize>()
        .map_err(|_| DocumentError::invalid_path(input, pos, "index out of range"))
}
