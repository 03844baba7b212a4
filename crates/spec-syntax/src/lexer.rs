//! # Lexer - Tokenizing Syntax Stanzas
//!
//! This module provides the first stage of the pipeline: breaking the body of
//! a syntax stanza into tokens using the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## Token Rules
//!
//! At every position the longest of these rules wins:
//!
//! - `$$ ... $$` → [`TokenKind::Literal`]. The delimiters are structural and
//!   are not part of the token text. An unterminated span runs to the end of
//!   the input.
//! - `::=` → [`TokenKind::Definition`]
//! - a run of letters → [`TokenKind::Identifier`]
//! - a run of whitespace → [`TokenKind::Whitespace`]
//! - any other single character → [`TokenKind::Other`]
//!
//! Every character of the input ends up in exactly one token, so lexing is
//! total: there is no error path.
//!
//! ```
//! use spec_syntax::lexer::{lex, TokenKind};
//!
//! let kinds: Vec<_> = lex("A ::= B").iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Identifier,
//!         TokenKind::Whitespace,
//!         TokenKind::Definition,
//!         TokenKind::Whitespace,
//!         TokenKind::Identifier,
//!     ]
//! );
//! ```
//!
//! ## Public API
//!
//! - [`Lexer`] - Lazy, single-pass token iterator
//! - [`lex`] - Tokenize input, returning `Vec<Token>`
//! - [`lex_with_spans`] - Tokenize with byte offset spans
//! - [`Token`] - A token with its kind and text slice

use std::ops::Range;

use logos::Logos;
use serde::Serialize;

/// Delimiter opening and closing a literal span.
pub const LITERAL_DELIMITER: &str = "$$";

/// Marker separating a syntax name from its definition.
pub const DEFINITION_MARKER: &str = "::=";

/// Token kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// `$$literal text$$`
    #[token("$$", literal_span)]
    Literal,

    /// `::=`
    #[token("::=")]
    Definition,

    /// Run of letters (no digits, no underscores, no combining marks)
    #[regex(r"\p{L}+")]
    Identifier,

    /// Run of whitespace, line endings and the `\x1c`-`\x1f` separators
    /// included
    #[regex(r"[\s\x1c-\x1f]+")]
    Whitespace,

    /// Any single character not covered above
    #[regex(r"[^\s\x1c-\x1f\p{L}]")]
    Other,
}

/// Extends a `$$` match up to and including the closing `$$`, or to the end
/// of input when the span is never closed.
fn literal_span(lex: &mut logos::Lexer<'_, TokenKind>) {
    let rest = lex.remainder();
    let len = rest
        .find(LITERAL_DELIMITER)
        .map_or(rest.len(), |end| end + LITERAL_DELIMITER.len());
    lex.bump(len);
}

/// Strips the delimiters from the source slice of a literal token.
fn literal_content(slice: &str) -> &str {
    let inner = slice.strip_prefix(LITERAL_DELIMITER).unwrap_or(slice);
    // The body of an unterminated span can never contain the delimiter.
    inner.strip_suffix(LITERAL_DELIMITER).unwrap_or(inner)
}

/// A lexed token with its kind and text slice.
///
/// For [`TokenKind::Literal`] the text is the span's content without the
/// `$$` delimiters; for every other kind it is the matched source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Lazy token stream over a single input.
///
/// The lexer only moves forward: once a token has been produced it is never
/// revisited, and the stream cannot be restarted.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(input),
        }
    }

    /// Byte offset of the first character not yet consumed.
    pub fn position(&self) -> usize {
        self.inner.span().end
    }

    /// Produce the next token together with its full source span.
    pub fn next_with_span(&mut self) -> Option<(Token<'a>, Range<usize>)> {
        let result = self.inner.next()?;
        let span = self.inner.span();
        let slice = self.inner.slice();
        let token = match result {
            Ok(TokenKind::Literal) => Token::new(TokenKind::Literal, literal_content(slice)),
            Ok(kind) => Token::new(kind, slice),
            Err(()) => {
                // Every character is covered by some rule, but stay total
                // regardless.
                log::debug!("unmatched input at {span:?}, treating as other");
                Token::new(TokenKind::Other, slice)
            }
        };
        Some((token, span))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_span().map(|(token, _)| token)
    }
}

/// Lex the input into a sequence of tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Lex and return tokens along with their byte spans.
///
/// Spans include literal delimiters, so they are contiguous and cover the
/// whole input.
pub fn lex_with_spans(input: &str) -> Vec<(Token<'_>, Range<usize>)> {
    let mut lexer = Lexer::new(input);
    std::iter::from_fn(|| lexer.next_with_span()).collect()
}
