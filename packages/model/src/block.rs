//! The block tagged union.
//!
//! Ten variants, internally tagged on `"type"`. Every variant carries the
//! base fields (`id`, `position`, `styles`) plus its own payload. The
//! `container` variant is the recursive case: its `blocks` field is an
//! ordered sequence typed identically to a page's root sequence.
//!
//! `position` is a derived cache of the block's index within its sibling
//! sequence. Array order is authoritative everywhere; reordering
//! operations recompute `position` afterwards.

use crate::style::StyleSet;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of inline content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Utility class suffix shared by both compile targets.
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Visual style of a button block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
        }
    }
}

/// Flow direction of a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerLayout {
    Vertical,
    Horizontal,
}

/// Line style of a divider block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    Solid,
    Dashed,
    Dotted,
}

impl DividerStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            DividerStyle::Solid => "solid",
            DividerStyle::Dashed => "dashed",
            DividerStyle::Dotted => "dotted",
        }
    }
}

/// Marker style of a list block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ordered,
    Unordered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingBlock {
    pub id: String,
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleSet>,
    pub content: String,
    /// Heading rank, 1–3.
    pub level: u8,
    pub align: Alignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub id: String,
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleSet>,
    pub content: String,
    pub align: Alignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    pub id: String,
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleSet>,
    pub url: String,
    pub alt: String,
    pub width: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonBlock {
    pub id: String,
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleSet>,
    pub text: String,
    pub url: String,
    pub variant: ButtonVariant,
    pub align: Alignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerBlock {
    pub id: String,
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleSet>,
    /// Child sequence, recursively typed like the page root.
    pub blocks: Vec<Block>,
    pub layout: ContainerLayout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoBlock {
    pub id: String,
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleSet>,
    pub url: String,
    pub width: String,
    pub autoplay: bool,
    pub controls: bool,
    #[serde(rename = "loop")]
    pub loop_playback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerBlock {
    pub id: String,
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleSet>,
    pub style: DividerStyle,
    pub thickness: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBlock {
    pub id: String,
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleSet>,
    pub items: Vec<String>,
    pub list_type: ListType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBlock {
    pub id: String,
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleSet>,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacerBlock {
    pub id: String,
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleSet>,
    pub height: String,
}

/// One node of the content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Heading(HeadingBlock),
    Text(TextBlock),
    Image(ImageBlock),
    Button(ButtonBlock),
    Container(ContainerBlock),
    Video(VideoBlock),
    Divider(DividerBlock),
    List(ListBlock),
    Card(CardBlock),
    Spacer(SpacerBlock),
}

/// Discriminant of a [`Block`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Heading,
    Text,
    Image,
    Button,
    Container,
    Video,
    Divider,
    List,
    Card,
    Spacer,
}

impl BlockKind {
    pub const ALL: [BlockKind; 10] = [
        BlockKind::Heading,
        BlockKind::Text,
        BlockKind::Image,
        BlockKind::Button,
        BlockKind::Container,
        BlockKind::Video,
        BlockKind::Divider,
        BlockKind::List,
        BlockKind::Card,
        BlockKind::Spacer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Button => "button",
            BlockKind::Container => "container",
            BlockKind::Video => "video",
            BlockKind::Divider => "divider",
            BlockKind::List => "list",
            BlockKind::Card => "card",
            BlockKind::Spacer => "spacer",
        }
    }
}

impl Block {
    pub fn id(&self) -> &str {
        match self {
            Block::Heading(b) => &b.id,
            Block::Text(b) => &b.id,
            Block::Image(b) => &b.id,
            Block::Button(b) => &b.id,
            Block::Container(b) => &b.id,
            Block::Video(b) => &b.id,
            Block::Divider(b) => &b.id,
            Block::List(b) => &b.id,
            Block::Card(b) => &b.id,
            Block::Spacer(b) => &b.id,
        }
    }

    pub fn set_id(&mut self, id: String) {
        match self {
            Block::Heading(b) => b.id = id,
            Block::Text(b) => b.id = id,
            Block::Image(b) => b.id = id,
            Block::Button(b) => b.id = id,
            Block::Container(b) => b.id = id,
            Block::Video(b) => b.id = id,
            Block::Divider(b) => b.id = id,
            Block::List(b) => b.id = id,
            Block::Card(b) => b.id = id,
            Block::Spacer(b) => b.id = id,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Block::Heading(b) => b.position,
            Block::Text(b) => b.position,
            Block::Image(b) => b.position,
            Block::Button(b) => b.position,
            Block::Container(b) => b.position,
            Block::Video(b) => b.position,
            Block::Divider(b) => b.position,
            Block::List(b) => b.position,
            Block::Card(b) => b.position,
            Block::Spacer(b) => b.position,
        }
    }

    pub fn set_position(&mut self, position: usize) {
        match self {
            Block::Heading(b) => b.position = position,
            Block::Text(b) => b.position = position,
            Block::Image(b) => b.position = position,
            Block::Button(b) => b.position = position,
            Block::Container(b) => b.position = position,
            Block::Video(b) => b.position = position,
            Block::Divider(b) => b.position = position,
            Block::List(b) => b.position = position,
            Block::Card(b) => b.position = position,
            Block::Spacer(b) => b.position = position,
        }
    }

    pub fn styles(&self) -> Option<&StyleSet> {
        match self {
            Block::Heading(b) => b.styles.as_ref(),
            Block::Text(b) => b.styles.as_ref(),
            Block::Image(b) => b.styles.as_ref(),
            Block::Button(b) => b.styles.as_ref(),
            Block::Container(b) => b.styles.as_ref(),
            Block::Video(b) => b.styles.as_ref(),
            Block::Divider(b) => b.styles.as_ref(),
            Block::List(b) => b.styles.as_ref(),
            Block::Card(b) => b.styles.as_ref(),
            Block::Spacer(b) => b.styles.as_ref(),
        }
    }

    pub fn styles_mut(&mut self) -> &mut Option<StyleSet> {
        match self {
            Block::Heading(b) => &mut b.styles,
            Block::Text(b) => &mut b.styles,
            Block::Image(b) => &mut b.styles,
            Block::Button(b) => &mut b.styles,
            Block::Container(b) => &mut b.styles,
            Block::Video(b) => &mut b.styles,
            Block::Divider(b) => &mut b.styles,
            Block::List(b) => &mut b.styles,
            Block::Card(b) => &mut b.styles,
            Block::Spacer(b) => &mut b.styles,
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading(_) => BlockKind::Heading,
            Block::Text(_) => BlockKind::Text,
            Block::Image(_) => BlockKind::Image,
            Block::Button(_) => BlockKind::Button,
            Block::Container(_) => BlockKind::Container,
            Block::Video(_) => BlockKind::Video,
            Block::Divider(_) => BlockKind::Divider,
            Block::List(_) => BlockKind::List,
            Block::Card(_) => BlockKind::Card,
            Block::Spacer(_) => BlockKind::Spacer,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Block::Container(_))
    }

    /// Child sequence, for the container variant only.
    pub fn children(&self) -> Option<&[Block]> {
        match self {
            Block::Container(container) => Some(&container.blocks),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Block>> {
        match self {
            Block::Container(container) => Some(&mut container.blocks),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_serializes_with_type_tag() {
        let block = Block::Heading(HeadingBlock {
            id: "h-1".to_string(),
            position: 0,
            styles: None,
            content: "Hello".to_string(),
            level: 2,
            align: Alignment::Center,
        });

        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "heading");
        assert_eq!(json["level"], 2);
        assert_eq!(json["align"], "center");
        // Absent styles are omitted, not emitted as null.
        assert!(json.get("styles").is_none());
    }

    #[test]
    fn test_block_roundtrip_through_designer_json() {
        // Shape produced by the designer's persistence layer.
        let json = r#"{
            "id": "c-1",
            "type": "container",
            "position": 0,
            "layout": "horizontal",
            "gap": "1.5rem",
            "blocks": [
                {
                    "id": "v-1",
                    "type": "video",
                    "position": 0,
                    "url": "https://example.com/clip.mp4",
                    "width": "100%",
                    "autoplay": false,
                    "controls": true,
                    "loop": true
                }
            ]
        }"#;

        let block: Block = serde_json::from_str(json).unwrap();
        let container = match &block {
            Block::Container(c) => c,
            other => panic!("expected container, got {:?}", other.kind()),
        };

        assert_eq!(container.blocks.len(), 1);
        match &container.blocks[0] {
            Block::Video(video) => {
                assert!(video.loop_playback);
                assert!(video.controls);
            }
            other => panic!("expected video, got {:?}", other.kind()),
        }

        let back = serde_json::to_value(&block).unwrap();
        assert_eq!(back["blocks"][0]["loop"], true);
    }

    #[test]
    fn test_children_only_for_containers() {
        let spacer = Block::Spacer(SpacerBlock {
            id: "s-1".to_string(),
            position: 0,
            styles: None,
            height: "2rem".to_string(),
        });
        assert!(spacer.children().is_none());
        assert!(!spacer.is_container());
    }
}
