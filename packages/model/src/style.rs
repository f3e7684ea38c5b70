//! Optional visual property bag attached to any block.
//!
//! Absent fields mean "inherit the default" — never "reset". A style
//! patch therefore merges field-by-field instead of replacing the whole
//! set, so a partial update cannot erase unrelated keys.

use serde::{Deserialize, Serialize};

/// Font weight keywords supported by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Medium,
    Semibold,
    Bold,
}

impl FontWeight {
    /// CSS value for this weight keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Medium => "500",
            FontWeight::Semibold => "600",
            FontWeight::Bold => "bold",
        }
    }
}

/// Border line styles supported by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
    None,
}

impl BorderStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::None => "none",
        }
    }
}

/// Per-block visual properties. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_style: Option<BorderStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
}

impl StyleSet {
    /// Shallow merge: every field the patch sets replaces the field here,
    /// fields the patch leaves unset are untouched.
    pub fn merge(&mut self, patch: &StyleSet) {
        macro_rules! merge_field {
            ($field:ident) => {
                if patch.$field.is_some() {
                    self.$field = patch.$field.clone();
                }
            };
        }
        merge_field!(background_color);
        merge_field!(text_color);
        merge_field!(font_size);
        merge_field!(font_weight);
        merge_field!(font_family);
        merge_field!(padding);
        merge_field!(margin);
        merge_field!(border_radius);
        merge_field!(border_width);
        merge_field!(border_color);
        merge_field!(border_style);
        merge_field!(box_shadow);
    }

    pub fn is_empty(&self) -> bool {
        self.css_properties().is_empty()
    }

    /// Flatten the present fields into CSS property/value pairs, in the
    /// fixed emission order both code generation backends rely on.
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        let mut props = Vec::new();
        if let Some(v) = &self.background_color {
            props.push(("background-color", v.clone()));
        }
        if let Some(v) = &self.text_color {
            props.push(("color", v.clone()));
        }
        if let Some(v) = &self.font_size {
            props.push(("font-size", v.clone()));
        }
        if let Some(v) = &self.font_weight {
            props.push(("font-weight", v.as_css().to_string()));
        }
        if let Some(v) = &self.font_family {
            props.push(("font-family", v.clone()));
        }
        if let Some(v) = &self.padding {
            props.push(("padding", v.clone()));
        }
        if let Some(v) = &self.margin {
            props.push(("margin", v.clone()));
        }
        if let Some(v) = &self.border_radius {
            props.push(("border-radius", v.clone()));
        }
        if let Some(v) = &self.border_width {
            props.push(("border-width", v.clone()));
        }
        if let Some(v) = &self.border_color {
            props.push(("border-color", v.clone()));
        }
        if let Some(v) = &self.border_style {
            props.push(("border-style", v.as_css().to_string()));
        }
        if let Some(v) = &self.box_shadow {
            props.push(("box-shadow", v.clone()));
        }
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_unrelated_fields() {
        let mut base = StyleSet {
            background_color: Some("#fff".to_string()),
            padding: Some("1rem".to_string()),
            ..Default::default()
        };

        let patch = StyleSet {
            padding: Some("2rem".to_string()),
            ..Default::default()
        };

        base.merge(&patch);

        assert_eq!(base.background_color.as_deref(), Some("#fff"));
        assert_eq!(base.padding.as_deref(), Some("2rem"));
    }

    #[test]
    fn test_css_properties_fixed_order() {
        let styles = StyleSet {
            box_shadow: Some("0 1px 2px rgba(0,0,0,0.1)".to_string()),
            background_color: Some("#fff".to_string()),
            font_weight: Some(FontWeight::Semibold),
            ..Default::default()
        };

        let props = styles.css_properties();
        let keys: Vec<&str> = props.iter().map(|(k, _)| *k).collect();

        // Declaration order follows the schema, not insertion order.
        assert_eq!(keys, vec!["background-color", "font-weight", "box-shadow"]);
        assert_eq!(props[1].1, "600");
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        assert!(StyleSet::default().is_empty());
        assert!(StyleSet::default().css_properties().is_empty());
    }
}
