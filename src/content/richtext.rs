//! Rich-text flattening
//!
//! Projects a structured rich-text document onto plain heading and
//! paragraph blocks. Inline formatting is discarded and only the text runs
//! directly under each top-level node survive.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::contentful::ContentfulError;

/// Kind of a flattened block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading,
    Paragraph,
}

/// One plain-text block of an article body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub text: String,
}

impl ContentBlock {
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Heading,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text: text.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Node {
    #[serde(rename = "nodeType", default)]
    node_type: String,

    #[serde(default)]
    value: Option<String>,

    #[serde(default)]
    content: Vec<Node>,
}

impl Node {
    fn block_kind(&self) -> Option<BlockKind> {
        match self.node_type.as_str() {
            "heading-1" | "heading-2" | "heading-3" => Some(BlockKind::Heading),
            "paragraph" => Some(BlockKind::Paragraph),
            _ => None,
        }
    }

    fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|child| child.value.as_deref())
            .collect()
    }
}

/// Flatten a rich-text body field
///
/// A missing body, or a body whose `nodeType` is not `document`, yields no
/// blocks. A document whose nodes cannot be decoded is a shape error.
pub fn flatten_document(body: Option<&Value>) -> Result<Vec<ContentBlock>, ContentfulError> {
    let Some(body) = body else {
        return Ok(Vec::new());
    };
    if body.get("nodeType").and_then(Value::as_str) != Some("document") {
        return Ok(Vec::new());
    }

    let document: Node = serde_json::from_value(body.clone())
        .map_err(|e| ContentfulError::Parse(format!("rich text body: {}", e)))?;

    Ok(document
        .content
        .iter()
        .filter_map(|node| {
            let kind = node.block_kind()?;
            let text = node.text();
            if text.is_empty() {
                None
            } else {
                Some(ContentBlock { kind, text })
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn text(value: &str) -> Value {
        json!({ "nodeType": "text", "value": value, "marks": [] })
    }

    #[test]
    fn test_heading_paragraph_and_unsupported() {
        let body = json!({
            "nodeType": "document",
            "content": [
                { "nodeType": "heading-2", "content": [text("Intro")] },
                { "nodeType": "paragraph", "content": [text("Hello world")] },
                { "nodeType": "embedded-asset-block", "data": {}, "content": [] }
            ]
        });

        let blocks = flatten_document(Some(&body)).unwrap();
        assert_eq!(
            blocks,
            vec![
                ContentBlock::heading("Intro"),
                ContentBlock::paragraph("Hello world"),
            ]
        );
    }

    #[test]
    fn test_runs_are_concatenated() {
        let body = json!({
            "nodeType": "document",
            "content": [{
                "nodeType": "paragraph",
                "content": [
                    text("Read "),
                    { "nodeType": "text", "value": "this", "marks": [{ "type": "bold" }] },
                    text(" now")
                ]
            }]
        });

        let blocks = flatten_document(Some(&body)).unwrap();
        assert_eq!(blocks, vec![ContentBlock::paragraph("Read this now")]);
    }

    #[test]
    fn test_empty_text_emits_no_block() {
        let body = json!({
            "nodeType": "document",
            "content": [
                { "nodeType": "paragraph", "content": [text("")] },
                { "nodeType": "heading-1", "content": [] },
                { "nodeType": "heading-3", "content": [text("Kept")] }
            ]
        });

        let blocks = flatten_document(Some(&body)).unwrap();
        assert_eq!(blocks, vec![ContentBlock::heading("Kept")]);
    }

    #[test]
    fn test_nested_inline_nodes_are_dropped() {
        let body = json!({
            "nodeType": "document",
            "content": [{
                "nodeType": "paragraph",
                "content": [
                    text("See "),
                    { "nodeType": "hyperlink", "data": { "uri": "https://x" }, "content": [text("here")] }
                ]
            }, {
                "nodeType": "unordered-list",
                "content": [{ "nodeType": "list-item", "content": [] }]
            }, {
                "nodeType": "heading-4",
                "content": [text("Too deep")]
            }]
        });

        let blocks = flatten_document(Some(&body)).unwrap();
        assert_eq!(blocks, vec![ContentBlock::paragraph("See ")]);
    }

    #[test]
    fn test_non_document_body() {
        assert!(flatten_document(None).unwrap().is_empty());
        assert!(flatten_document(Some(&json!("plain string body"))).unwrap().is_empty());
        assert!(flatten_document(Some(&json!({ "nodeType": "paragraph" })))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_malformed_document_is_shape_error() {
        let body = json!({ "nodeType": "document", "content": "oops" });
        assert!(matches!(
            flatten_document(Some(&body)),
            Err(ContentfulError::Parse(_))
        ));
    }

    #[test]
    fn test_block_serialization() {
        let value = serde_json::to_value(ContentBlock::heading("Intro")).unwrap();
        assert_eq!(value, json!({ "type": "heading", "text": "Intro" }));
    }
}
