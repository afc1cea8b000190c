use std::fmt;

use serde::{Serialize, Serializer};

/// CSS-flavored dimension used in node styles. Serialized as the string the
/// rasterizer's layout engine understands: `"12px"`, `"2.5ch"`, `"1.5lh"`,
/// `"100%"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unit {
    /// Device pixels.
    Px(f32),
    /// Character units: multiples of the advance width of `0`.
    Ch(f32),
    /// Line units: multiples of the line height.
    Lh(f32),
    /// Percentage of the parent box.
    Percent(f32),
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Px(v) => write!(f, "{v}px"),
            Unit::Ch(v) => write!(f, "{v}ch"),
            Unit::Lh(v) => write!(f, "{v}lh"),
            Unit::Percent(v) => write!(f, "{v}%"),
        }
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

/// Style attributes of a container box. Everything is optional; absent fields
/// take the rasterizer's defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<FlexDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Drop-shadow depth for highlighted lines; `0` means no shadow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_depth: Option<f32>,
    /// Font size multiplier, only meaningful on the root container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_ratio: Option<f32>,
}

/// Style attributes of a text leaf.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Fixed column width, used to align line numbers across lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Unit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<Unit>,
}

/// The render tree handed to the rasterizer: a strict forest rooted at one
/// top-level container whose children are one container per source line.
///
/// Adding a node kind extends this enum; every consumer matches exhaustively,
/// so a new kind is a compile-time-checked change rather than a runtime shape
/// check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DocumentNode {
    Container {
        style: BoxStyle,
        children: Vec<DocumentNode>,
    },
    Text {
        content: String,
        style: TextStyle,
    },
}

impl DocumentNode {
    pub fn container(style: BoxStyle, children: Vec<DocumentNode>) -> Self {
        DocumentNode::Container { style, children }
    }

    pub fn text(content: impl Into<String>, style: TextStyle) -> Self {
        DocumentNode::Text {
            content: content.into(),
            style,
        }
    }

    pub fn as_container(&self) -> Option<(&BoxStyle, &[DocumentNode])> {
        match self {
            DocumentNode::Container { style, children } => Some((style, children)),
            DocumentNode::Text { .. } => None,
        }
    }

    pub fn as_text(&self) -> Option<(&str, &TextStyle)> {
        match self {
            DocumentNode::Text { content, style } => Some((content, style)),
            DocumentNode::Container { .. } => None,
        }
    }

    /// A zero-height container standing in for whitespace the rasterizer
    /// cannot measure.
    pub fn is_spacer(&self) -> bool {
        match self {
            DocumentNode::Container { style, children } => {
                children.is_empty() && style.height == Some(Unit::Px(0.0))
            }
            DocumentNode::Text { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_display() {
        assert_eq!(Unit::Px(0.0).to_string(), "0px");
        assert_eq!(Unit::Ch(2.5).to_string(), "2.5ch");
        assert_eq!(Unit::Lh(1.5).to_string(), "1.5lh");
        assert_eq!(Unit::Percent(100.0).to_string(), "100%");
    }

    #[test]
    fn test_node_serialization_is_tagged() {
        let node = DocumentNode::text(
            "42",
            TextStyle {
                color: Some("#7b7f8b".to_string()),
                ..Default::default()
            },
        );

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["content"], "42");
        assert_eq!(json["style"]["color"], "#7b7f8b");
    }

    #[test]
    fn test_container_serialization() {
        let node = DocumentNode::container(
            BoxStyle {
                direction: Some(FlexDirection::Column),
                width: Some(Unit::Percent(100.0)),
                min_height: Some(Unit::Lh(1.5)),
                ..Default::default()
            },
            vec![],
        );

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "container");
        assert_eq!(json["style"]["direction"], "column");
        assert_eq!(json["style"]["width"], "100%");
        assert_eq!(json["style"]["minHeight"], "1.5lh");
        // Unset fields stay off the wire entirely.
        assert!(json["style"].get("background").is_none());
    }

    #[test]
    fn test_spacer_detection() {
        let spacer = DocumentNode::container(
            BoxStyle {
                width: Some(Unit::Ch(1.5)),
                height: Some(Unit::Px(0.0)),
                ..Default::default()
            },
            vec![],
        );
        assert!(spacer.is_spacer());

        let text = DocumentNode::text("x", TextStyle::default());
        assert!(!text.is_spacer());
    }
}
