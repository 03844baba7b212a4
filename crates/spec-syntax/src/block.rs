//! The block wrapping one syntax stanza.

use serde::Serialize;

use crate::node::{BLOCK_CLASS, CrossReference, InlineNode};
use crate::parser::parse;

/// A parsed stanza: a literal block holding the stanza's inline nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxBlock {
    pub classes: Vec<String>,
    pub children: Vec<InlineNode>,
}

impl SyntaxBlock {
    /// Parse the lines of a stanza body, joined with newlines.
    pub fn from_lines<S: AsRef<str>>(lines: &[S], document_name: &str) -> Self {
        let text = lines
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<&str>>()
            .join("\n");
        Self::from_text(&text, document_name)
    }

    /// Parse a stanza body.
    pub fn from_text(text: &str, document_name: &str) -> Self {
        let children: Vec<_> = parse(text, document_name).collect();
        log::debug!(
            "parsed syntax block from {document_name:?} into {} nodes",
            children.len()
        );
        Self {
            classes: vec![BLOCK_CLASS.to_string()],
            children,
        }
    }

    /// Names defined in this block, in order of appearance.
    pub fn definitions(&self) -> impl Iterator<Item = &str> {
        self.children.iter().filter_map(|node| match node {
            InlineNode::DefinitionMarker { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }

    /// Cross references in this block, in order of appearance.
    pub fn references(&self) -> impl Iterator<Item = &CrossReference> {
        self.children.iter().filter_map(|node| match node {
            InlineNode::CrossReference(xref) => Some(xref),
            _ => None,
        })
    }

    /// Visible text of the whole block.
    pub fn text(&self) -> String {
        self.children.iter().map(InlineNode::as_str).collect()
    }
}
