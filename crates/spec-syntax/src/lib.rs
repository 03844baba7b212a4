//! # spec-syntax
//!
//! Lexer and parser for the inline grammar syntax used in specification
//! documents, built on [Logos].
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## What is a Syntax Stanza?
//!
//! Specification documents describe grammar rules in small stanzas:
//!
//! ```text
//! LetStatement ::=
//!     $$let$$ Pattern TypeAscription? $$;$$
//! ```
//!
//! Inside a stanza, `$$...$$` marks literal syntax, `Name ::=` defines a
//! grammar rule, and any other camel-case `Name` refers to a rule defined
//! somewhere in the document set. This crate recognizes those pieces. It does
//! not evaluate the grammar; repetition and alternation markers stay plain
//! text.
//!
//! ## Architecture Overview
//!
//! The pipeline is one-way and lazy:
//!
//! ```text
//! Stanza Text → Lexer → TokenBuffer → Parser → InlineNodes → Renderer
//!               (Logos)  (lookahead)             (external)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! Splits the text into literal, definition, identifier, whitespace, and
//! other tokens. Every character lands in some token.
//!
//! ### 2. Parser ([`parser`] module)
//!
//! Pulls tokens through a [`TokenBuffer`] and classifies identifiers with
//! [`is_syntax_identifier`]. A syntax identifier followed by `::=` becomes a
//! [`InlineNode::DefinitionMarker`], any other becomes a
//! [`InlineNode::CrossReference`].
//!
//! ### 3. Block ([`block`] module)
//!
//! [`SyntaxBlock`] wraps a whole stanza the way it is handed to a renderer.
//!
//! ## Quick Start
//!
//! ```
//! use spec_syntax::{SyntaxBlock, InlineNode};
//!
//! let block = SyntaxBlock::from_lines(&["Item ::=", "    $$fn$$ Name"], "items");
//!
//! assert_eq!(block.definitions().collect::<Vec<_>>(), ["Item"]);
//! assert_eq!(block.children[4], InlineNode::literal("fn"));
//! assert_eq!(block.text(), "Item ::=\n    fn Name");
//! ```

pub mod block;
pub mod classify;
pub mod lexer;
pub mod node;
pub mod parser;

pub use block::SyntaxBlock;
pub use classify::is_syntax_identifier;
pub use lexer::{Lexer, Token, TokenKind};
pub use node::{CrossReference, InlineNode, format_nodes};
pub use parser::buffer::TokenBuffer;
pub use parser::{Parser, parse, parse_to_vec};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn roundtrip_visible_text() {
        let inputs = [
            "Item ::= Other",
            "hello world",
            "Item::=X",
            "A | B*",
            "",
            "  \n\t",
            "Rule ::= Other? ;",
        ];

        for input in inputs {
            let block = SyntaxBlock::from_text(input, "doc");
            assert_eq!(block.text(), input, "Roundtrip failed for: {:?}", input);
        }
    }

    #[test]
    fn document_name_is_only_attached_to_references() {
        let block = SyntaxBlock::from_text("Item ::= Other", "chapters/items");
        let xrefs: Vec<_> = block.references().collect();
        assert_eq!(xrefs.len(), 1);
        assert_eq!(xrefs[0].ref_doc, "chapters/items");
    }
}
