//! Output nodes handed to a renderer.

use serde::Serialize;

/// Category under which syntax definitions are registered.
pub const SYNTAX_CATEGORY: &str = "syntaxes";

/// Domain of every cross reference produced for a syntax name.
pub const SPEC_DOMAIN: &str = "spec";

/// Reference type of every cross reference produced for a syntax name.
pub const REF_TYPE: &str = "ref";

/// Class attached to literal emphasis when rendered.
pub const LITERAL_CLASS: &str = "spec-syntax-literal";

/// Class attached to the block wrapping a whole stanza.
pub const BLOCK_CLASS: &str = "spec-syntax";

/// A parsed inline node.
///
/// Nodes are plain values: the parser produces them and a renderer or
/// indexer decides what they mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineNode {
    /// Verbatim text.
    Text(String),
    /// Contents of a `$$...$$` span, rendered as strong literal syntax.
    LiteralEmphasis(String),
    /// A syntax name at its definition site.
    DefinitionMarker {
        category: &'static str,
        name: String,
    },
    /// A syntax name used anywhere other than its definition site.
    CrossReference(CrossReference),
}

impl InlineNode {
    pub fn text(content: impl Into<String>) -> Self {
        InlineNode::Text(content.into())
    }

    pub fn literal(content: impl Into<String>) -> Self {
        InlineNode::LiteralEmphasis(content.into())
    }

    pub fn definition(name: impl Into<String>) -> Self {
        InlineNode::DefinitionMarker {
            category: SYNTAX_CATEGORY,
            name: name.into(),
        }
    }

    pub fn reference(target: impl Into<String>, ref_doc: impl Into<String>) -> Self {
        InlineNode::CrossReference(CrossReference::new(target, ref_doc))
    }

    /// The text this node shows when rendered.
    pub fn as_str(&self) -> &str {
        match self {
            InlineNode::Text(text) | InlineNode::LiteralEmphasis(text) => text,
            InlineNode::DefinitionMarker { name, .. } => name,
            InlineNode::CrossReference(xref) => &xref.display_text,
        }
    }
}

/// An unresolved reference to a syntax definition.
///
/// Resolution happens later against everything registered under
/// [`SYNTAX_CATEGORY`]; `ref_doc` records the document it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossReference {
    pub target: String,
    pub display_text: String,
    pub domain: &'static str,
    pub reftype: &'static str,
    pub ref_doc: String,
    /// The display text was written explicitly by the author.
    pub explicit: bool,
    /// Report a missing target when resolving.
    pub warn: bool,
}

impl CrossReference {
    /// Reference displayed with its own target name.
    pub fn new(target: impl Into<String>, ref_doc: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            display_text: target.clone(),
            target,
            domain: SPEC_DOMAIN,
            reftype: REF_TYPE,
            ref_doc: ref_doc.into(),
            explicit: false,
            warn: false,
        }
    }
}

/// Format nodes one per line for inspection and snapshot testing.
///
/// ```text
/// DefinitionMarker syntaxes "Item"
/// Text " "
/// CrossReference spec:ref "Other" "Other" @ "doc"
/// ```
pub fn format_nodes(nodes: &[InlineNode]) -> String {
    nodes
        .iter()
        .map(|node| match node {
            InlineNode::Text(text) => format!("Text {text:?}"),
            InlineNode::LiteralEmphasis(text) => format!("LiteralEmphasis {text:?}"),
            InlineNode::DefinitionMarker { category, name } => {
                format!("DefinitionMarker {category} {name:?}")
            }
            InlineNode::CrossReference(xref) => format!(
                "CrossReference {}:{} {:?} {:?} @ {:?}",
                xref.domain, xref.reftype, xref.target, xref.display_text, xref.ref_doc
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_each_variant() {
        let nodes = [
            InlineNode::definition("Item"),
            InlineNode::text(" "),
            InlineNode::literal("fn"),
            InlineNode::reference("Other", "doc"),
        ];
        assert_eq!(
            format_nodes(&nodes),
            "DefinitionMarker syntaxes \"Item\"\n\
             Text \" \"\n\
             LiteralEmphasis \"fn\"\n\
             CrossReference spec:ref \"Other\" \"Other\" @ \"doc\""
        );
    }

    #[test]
    fn reference_defaults() {
        let xref = CrossReference::new("Item", "chapter");
        assert_eq!(
            xref,
            CrossReference {
                target: "Item".to_string(),
                display_text: "Item".to_string(),
                domain: "spec",
                reftype: "ref",
                ref_doc: "chapter".to_string(),
                explicit: false,
                warn: false,
            }
        );
    }

    #[test]
    fn definition_uses_syntax_category() {
        assert_eq!(
            InlineNode::definition("Item"),
            InlineNode::DefinitionMarker {
                category: "syntaxes",
                name: "Item".to_string(),
            }
        );
    }

    #[test]
    fn visible_text_of_each_variant() {
        assert_eq!(InlineNode::text(" ").as_str(), " ");
        assert_eq!(InlineNode::literal("a + b").as_str(), "a + b");
        assert_eq!(InlineNode::definition("Item").as_str(), "Item");
        assert_eq!(InlineNode::reference("Other", "doc").as_str(), "Other");
    }
}
