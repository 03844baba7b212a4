//! Output formats for tokens and syntax blocks.

use anyhow::{Result, bail};
use html_escape::{encode_double_quoted_attribute, encode_text};
use spec_syntax::lexer::lex;
use spec_syntax::node::{LITERAL_CLASS, SYNTAX_CATEGORY};
use spec_syntax::{InlineNode, SyntaxBlock, format_nodes};
use spec_syntax_config::OutputFormat;

/// Render the lexer tokens of a stanza.
pub fn render_tokens(input: &str, format: OutputFormat) -> Result<String> {
    let tokens = lex(input);
    match format {
        OutputFormat::Text => Ok(tokens
            .iter()
            .map(|token| format!("{:?} {:?}", token.kind, token.text))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&tokens)?),
        OutputFormat::Html => bail!("tokens cannot be rendered as html"),
    }
}

/// Render a parsed stanza.
pub fn render_block(block: &SyntaxBlock, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_nodes(&block.children)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(block)?),
        OutputFormat::Html => Ok(render_html(block)),
    }
}

fn render_html(block: &SyntaxBlock) -> String {
    let mut html = format!(
        "<pre class=\"{}\">",
        encode_double_quoted_attribute(&block.classes.join(" "))
    );
    for node in &block.children {
        html.push_str(&render_html_node(node));
    }
    html.push_str("</pre>");
    html
}

fn render_html_node(node: &InlineNode) -> String {
    match node {
        InlineNode::Text(text) => encode_text(text).into_owned(),
        InlineNode::LiteralEmphasis(text) => format!(
            "<strong class=\"{LITERAL_CLASS}\">{}</strong>",
            encode_text(text)
        ),
        InlineNode::DefinitionMarker { category, name } => format!(
            "<dfn id=\"{}\">{}</dfn>",
            encode_double_quoted_attribute(&anchor(category, name)),
            encode_text(name)
        ),
        // Links to the anchor a definition with the same name would get.
        InlineNode::CrossReference(xref) => format!(
            "<a class=\"{}-{}\" href=\"#{}\" data-refdoc=\"{}\">{}</a>",
            xref.domain,
            xref.reftype,
            encode_double_quoted_attribute(&anchor(SYNTAX_CATEGORY, &xref.target)),
            encode_double_quoted_attribute(&xref.ref_doc),
            encode_text(&xref.display_text)
        ),
    }
}

fn anchor(category: &str, name: &str) -> String {
    format!("{category}-{name}")
}
