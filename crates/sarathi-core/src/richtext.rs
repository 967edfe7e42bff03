//! Rich text block model.
//!
//! Documents carry their body copy as an ordered sequence of typed blocks
//! (portable-text style). Consumers must treat unrecognised block types as a
//! no-op rather than fail, so the enum carries an `Unknown` catch-all.

use serde::{Deserialize, Serialize};

/// One unit in an ordered rich text sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "_type")]
pub enum ContentBlock {
    /// A text block: paragraph, heading, list item, or quote.
    #[serde(rename = "block")]
    Text(TextBlock),

    /// An embedded image.
    #[serde(rename = "image")]
    Image(ImageBlock),

    /// Any block type this application does not understand.
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    /// Plain text of the block, empty for images and unknown blocks.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Self::Text(block) => block.plain_text(),
            _ => String::new(),
        }
    }
}

/// A text block with styled spans.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextBlock {
    /// Stable key assigned by the CMS, used for heading anchors.
    #[serde(rename = "_key", default)]
    pub key: String,

    /// Block style: "normal", "h2", "h3", "h4", "blockquote".
    #[serde(default = "default_style")]
    pub style: String,

    /// When set, this block is one item of a list run.
    #[serde(rename = "listItem", default)]
    pub list_item: Option<ListKind>,

    /// Nesting level for list items.
    #[serde(default)]
    pub level: Option<u32>,

    /// Ordered text spans.
    #[serde(default)]
    pub children: Vec<Span>,
}

fn default_style() -> String {
    "normal".to_string()
}

impl TextBlock {
    /// Concatenated text of all spans.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.children
            .iter()
            .map(|span| span.text.as_str())
            .collect()
    }

    /// Heading level for h2/h3/h4 styles.
    #[must_use]
    pub fn heading_level(&self) -> Option<u8> {
        match self.style.as_str() {
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            _ => None,
        }
    }
}

/// One span of text with optional marks (emphasis, strong, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Span {
    #[serde(rename = "_key", default)]
    pub key: String,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub marks: Vec<String>,
}

/// List kind for list-item blocks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Bullet,
    Number,
}

/// An embedded image block. Alt text is required by the authoring schema;
/// the caption is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageBlock {
    #[serde(rename = "_key", default)]
    pub key: String,

    pub asset: AssetRef,

    #[serde(default)]
    pub alt: String,

    #[serde(default)]
    pub caption: Option<String>,
}

/// Reference to a hosted image asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetRef {
    /// Opaque asset reference, e.g. `image-abc123-800x600-jpg`.
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// First non-empty paragraph of a block sequence, used for card excerpts.
#[must_use]
pub fn excerpt(blocks: &[ContentBlock]) -> Option<String> {
    blocks.iter().find_map(|block| {
        let text = block.plain_text();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(key: &str, text: &str) -> ContentBlock {
        ContentBlock::Text(TextBlock {
            key: key.to_string(),
            style: "normal".to_string(),
            list_item: None,
            level: None,
            children: vec![Span {
                key: format!("{key}-span"),
                text: text.to_string(),
                marks: vec![],
            }],
        })
    }

    #[test]
    fn test_deserialize_text_block() {
        let json = r#"{
            "_type": "block",
            "_key": "a1b2",
            "style": "h2",
            "children": [{"_key": "s1", "text": "Exam Pattern", "marks": []}]
        }"#;

        let block: ContentBlock = serde_json::from_str(json).unwrap();
        match block {
            ContentBlock::Text(text) => {
                assert_eq!(text.key, "a1b2");
                assert_eq!(text.heading_level(), Some(2));
                assert_eq!(text.plain_text(), "Exam Pattern");
            }
            _ => panic!("expected text block"),
        }
    }

    #[test]
    fn test_deserialize_image_block() {
        let json = r#"{
            "_type": "image",
            "_key": "img1",
            "asset": {"_ref": "image-abc123-800x600-jpg"},
            "alt": "Study plan chart",
            "caption": "Weekly plan"
        }"#;

        let block: ContentBlock = serde_json::from_str(json).unwrap();
        match block {
            ContentBlock::Image(image) => {
                assert_eq!(image.asset.reference, "image-abc123-800x600-jpg");
                assert_eq!(image.alt, "Study plan chart");
                assert_eq!(image.caption.as_deref(), Some("Weekly plan"));
            }
            _ => panic!("expected image block"),
        }
    }

    #[test]
    fn test_unknown_block_type_is_tolerated() {
        let json = r#"[
            {"_type": "block", "_key": "a", "children": [{"text": "hello"}]},
            {"_type": "codeSnippet", "_key": "b", "language": "python"},
            {"_type": "block", "_key": "c", "children": [{"text": "world"}]}
        ]"#;

        let blocks: Vec<ContentBlock> = serde_json::from_str(json).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1], ContentBlock::Unknown);
        assert_eq!(blocks[2].plain_text(), "world");
    }

    #[test]
    fn test_default_style_is_normal() {
        let json = r#"{"_type": "block", "children": [{"text": "x"}]}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        match block {
            ContentBlock::Text(text) => {
                assert_eq!(text.style, "normal");
                assert!(text.heading_level().is_none());
            }
            _ => panic!("expected text block"),
        }
    }

    #[test]
    fn test_excerpt_skips_empty_blocks() {
        let blocks = vec![
            paragraph("a", "   "),
            ContentBlock::Unknown,
            paragraph("b", "First real paragraph."),
        ];

        assert_eq!(excerpt(&blocks).as_deref(), Some("First real paragraph."));
        assert!(excerpt(&[]).is_none());
    }
}
