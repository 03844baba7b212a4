//! # Parser - Classifying Syntax Names
//!
//! This module turns the token stream into [`InlineNode`]s. Most tokens pass
//! through as plain text; the interesting work is deciding what to do with
//! identifiers.
//!
//! ## Syntax Names
//!
//! An identifier that passes [`is_syntax_identifier`] names a grammar rule.
//! It is either being **defined** or **referenced**:
//!
//! ```text
//! Item ::= Other
//! ^^^^     ^^^^^
//! |        reference: not followed by `::=`
//! definition: followed by `::=`, optionally across one whitespace token
//! ```
//!
//! ## Lookahead Without Consumption
//!
//! The definition check only *peeks* at the [`TokenBuffer`]. The whitespace
//! and `::=` tokens stay in the stream and come out of the main loop later as
//! ordinary text, so a definition site still renders its `::=`:
//!
//! ```
//! use spec_syntax::{parse_to_vec, InlineNode};
//!
//! let nodes = parse_to_vec("Item ::= Other", "grammar");
//! assert_eq!(nodes[0], InlineNode::definition("Item"));
//! assert_eq!(nodes[2], InlineNode::text("::="));
//! assert_eq!(nodes[4], InlineNode::reference("Other", "grammar"));
//! ```
//!
//! ## Module Structure
//!
//! - [`buffer`] - The lookahead buffer over the lexer
//!
//! ## Public API
//!
//! - [`parse`] - Lazily parse a stanza
//! - [`parse_to_vec`] - Parse a stanza eagerly

pub mod buffer;

use crate::classify::is_syntax_identifier;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::node::InlineNode;
use buffer::TokenBuffer;

/// The parser state machine.
///
/// Owns the token buffer for one stanza and yields one node per pulled
/// token. Parsing is total: every input produces some node sequence.
pub struct Parser<'a> {
    tokens: TokenBuffer<'a, Lexer<'a>>,
    document_name: &'a str,
}

impl<'a> Parser<'a> {
    /// Create a parser over `text`. `document_name` is attached to every
    /// cross reference as its origin.
    pub fn new(text: &'a str, document_name: &'a str) -> Self {
        Self {
            tokens: TokenBuffer::new(Lexer::new(text)),
            document_name,
        }
    }

    /// Tokens peeked but not yet consumed.
    pub fn buffered(&self) -> usize {
        self.tokens.buffered()
    }

    fn node_for(&mut self, token: Token<'a>) -> InlineNode {
        match token.kind {
            TokenKind::Literal => InlineNode::literal(token.text),
            TokenKind::Identifier if is_syntax_identifier(token.text) => {
                if self.at_definition_site() {
                    log::trace!("definition of syntax {:?}", token.text);
                    InlineNode::definition(token.text)
                } else {
                    log::trace!("reference to syntax {:?}", token.text);
                    InlineNode::reference(token.text, self.document_name)
                }
            }
            _ => InlineNode::text(token.text),
        }
    }

    /// Check if the upcoming tokens are `::=`, optionally preceded by one
    /// whitespace token. Peeks only.
    fn at_definition_site(&mut self) -> bool {
        let offset = usize::from(self.tokens.peek_is(0, TokenKind::Whitespace));
        self.tokens.peek_is(offset, TokenKind::Definition)
    }
}

impl Iterator for Parser<'_> {
    type Item = InlineNode;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        Some(self.node_for(token))
    }
}

/// Parse a stanza lazily.
pub fn parse<'a>(text: &'a str, document_name: &'a str) -> Parser<'a> {
    Parser::new(text, document_name)
}

/// Parse a stanza into a vector of nodes.
pub fn parse_to_vec(text: &str, document_name: &str) -> Vec<InlineNode> {
    parse(text, document_name).collect()
}
