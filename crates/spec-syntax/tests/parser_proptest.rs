//! Property-based tests for the lexer and parser
//!
//! These tests check that the pipeline is total and lossless for arbitrary
//! input:
//! - Lexing and parsing never panic
//! - Token spans are contiguous and cover the input
//! - Token texts plus literal delimiters rebuild the input exactly
//! - Visible node text equals the input whenever no literal spans occur
//! - Node text plus literal delimiters rebuilds the input exactly

use proptest::prelude::*;
use spec_syntax::lexer::{LITERAL_DELIMITER, TokenKind, lex_with_spans};
use spec_syntax::{InlineNode, SyntaxBlock, parse_to_vec};

/// Generate stanza-like text rich in the characters the lexer cares about
fn stanza_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z$:= \n\t?|*(){}_0-9]{0,40}",
        "([A-Z][a-z]{1,6}|::=|\\$\\$|[ \n]|[a-z]{1,4}|[|?;]){0,12}",
        any::<String>(),
    ]
}

/// Generate names that follow the syntax identifier convention
fn syntax_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z][A-Za-z]{0,8}"
}

/// Rebuild the source text of a token from its content.
fn token_source(kind: TokenKind, text: &str, span_len: usize) -> String {
    if kind != TokenKind::Literal {
        return text.to_string();
    }
    let mut source = format!("{LITERAL_DELIMITER}{text}");
    if span_len == text.len() + 2 * LITERAL_DELIMITER.len() {
        source.push_str(LITERAL_DELIMITER);
    }
    source
}

proptest! {
    #[test]
    fn spans_are_contiguous(input in stanza_strategy()) {
        let tokens = lex_with_spans(&input);
        let mut expected_start = 0;
        for (_, span) in &tokens {
            prop_assert_eq!(span.start, expected_start);
            prop_assert!(span.end > span.start);
            expected_start = span.end;
        }
        prop_assert_eq!(expected_start, input.len());
    }

    #[test]
    fn tokens_rebuild_input(input in stanza_strategy()) {
        let rebuilt: String = lex_with_spans(&input)
            .into_iter()
            .map(|(token, span)| token_source(token.kind, token.text, span.len()))
            .collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn one_node_per_token(input in stanza_strategy()) {
        let nodes = parse_to_vec(&input, "doc");
        prop_assert_eq!(nodes.len(), lex_with_spans(&input).len());
    }

    #[test]
    fn visible_text_without_literals(input in "[A-Za-z:= \n?|_0-9]{0,60}") {
        let block = SyntaxBlock::from_text(&input, "doc");
        prop_assert_eq!(block.text(), input);
    }

    #[test]
    fn nodes_rebuild_input(input in stanza_strategy()) {
        let nodes = parse_to_vec(&input, "doc");
        let spans = lex_with_spans(&input);
        prop_assert_eq!(nodes.len(), spans.len());

        let rebuilt: String = nodes
            .iter()
            .zip(&spans)
            .map(|(node, (_, span))| match node {
                InlineNode::LiteralEmphasis(text) => {
                    token_source(TokenKind::Literal, text, span.len())
                }
                other => other.as_str().to_string(),
            })
            .collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn name_before_marker_is_defined(
        name in syntax_name_strategy(),
        gap in prop_oneof![Just(""), Just(" "), Just("\n  ")],
    ) {
        let input = format!("{name}{gap}::= Rest");
        let nodes = parse_to_vec(&input, "doc");
        prop_assert_eq!(&nodes[0], &InlineNode::definition(name.as_str()));
        prop_assert!(nodes.contains(&InlineNode::text("::=")));
        prop_assert_eq!(nodes.last(), Some(&InlineNode::reference("Rest", "doc")));
    }

    #[test]
    fn name_without_marker_is_referenced(name in syntax_name_strategy()) {
        let input = format!("{name} | Other");
        let nodes = parse_to_vec(&input, "doc");
        prop_assert_eq!(&nodes[0], &InlineNode::reference(name.as_str(), "doc"));
    }
}
