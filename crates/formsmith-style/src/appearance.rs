//! Appearance records.
//!
//! Every attribute is optional and stored verbatim. Nothing here applies a
//! default: resolution happens at the point of use through [`crate::defaults`],
//! so forms saved long ago pick up new defaults without migration.

use serde::{Deserialize, Serialize};

use crate::defaults::StyleAttribute;

/// Read access to a style record by attribute.
///
/// Records that lack an attribute (a label has no border) return `None`.
pub trait StyleSource {
    fn get(&self, attr: StyleAttribute) -> Option<&str>;
}

/// Flat bag of CSS-like presentation attributes.
///
/// Shared shape of field, label and submit-button styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
}

pub type FieldStyle = AppearanceStyle;
pub type LabelStyle = AppearanceStyle;
pub type ButtonStyle = AppearanceStyle;

impl AppearanceStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one attribute. An empty string clears it.
    pub fn set(&mut self, attr: StyleAttribute, value: impl Into<String>) {
        let value = value.into();
        let value = if value.is_empty() { None } else { Some(value) };
        *self.slot_mut(attr) = value;
    }

    /// Builder form of [`AppearanceStyle::set`].
    pub fn with(mut self, attr: StyleAttribute, value: impl Into<String>) -> Self {
        self.set(attr, value);
        self
    }

    fn slot_mut(&mut self, attr: StyleAttribute) -> &mut Option<String> {
        match attr {
            StyleAttribute::BackgroundColor => &mut self.background_color,
            StyleAttribute::TextColor => &mut self.text_color,
            StyleAttribute::BorderColor => &mut self.border_color,
            StyleAttribute::BorderWidth => &mut self.border_width,
            StyleAttribute::BorderRadius => &mut self.border_radius,
            StyleAttribute::FontSize => &mut self.font_size,
            StyleAttribute::FontFamily => &mut self.font_family,
            StyleAttribute::Padding => &mut self.padding,
            StyleAttribute::Margin => &mut self.margin,
            StyleAttribute::BoxShadow => &mut self.box_shadow,
        }
    }
}

impl StyleSource for AppearanceStyle {
    fn get(&self, attr: StyleAttribute) -> Option<&str> {
        let slot = match attr {
            StyleAttribute::BackgroundColor => &self.background_color,
            StyleAttribute::TextColor => &self.text_color,
            StyleAttribute::BorderColor => &self.border_color,
            StyleAttribute::BorderWidth => &self.border_width,
            StyleAttribute::BorderRadius => &self.border_radius,
            StyleAttribute::FontSize => &self.font_size,
            StyleAttribute::FontFamily => &self.font_family,
            StyleAttribute::Padding => &self.padding,
            StyleAttribute::Margin => &self.margin,
            StyleAttribute::BoxShadow => &self.box_shadow,
        };
        slot.as_deref()
    }
}

/// Reduced style for the form title and description blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextBlockStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
}

impl StyleSource for TextBlockStyle {
    fn get(&self, attr: StyleAttribute) -> Option<&str> {
        match attr {
            StyleAttribute::TextColor => self.text_color.as_deref(),
            StyleAttribute::FontSize => self.font_size.as_deref(),
            StyleAttribute::FontFamily => self.font_family.as_deref(),
            StyleAttribute::Margin => self.margin.as_deref(),
            StyleAttribute::Padding => self.padding.as_deref(),
            _ => None,
        }
    }
}

/// Form-level appearance with nested title, description and button styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_style: Option<TextBlockStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_style: Option<TextBlockStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_style: Option<ButtonStyle>,
}

impl FormStyle {
    /// Title sub-style, empty when unset.
    pub fn title(&self) -> TextBlockStyle {
        self.title_style.clone().unwrap_or_default()
    }

    /// Description sub-style, empty when unset.
    pub fn description(&self) -> TextBlockStyle {
        self.description_style.clone().unwrap_or_default()
    }

    /// Submit button sub-style, empty when unset.
    pub fn button(&self) -> ButtonStyle {
        self.button_style.clone().unwrap_or_default()
    }
}

impl StyleSource for FormStyle {
    fn get(&self, attr: StyleAttribute) -> Option<&str> {
        match attr {
            StyleAttribute::BackgroundColor => self.background_color.as_deref(),
            StyleAttribute::TextColor => self.text_color.as_deref(),
            StyleAttribute::BorderColor => self.border_color.as_deref(),
            StyleAttribute::BorderWidth => self.border_width.as_deref(),
            StyleAttribute::BorderRadius => self.border_radius.as_deref(),
            StyleAttribute::FontSize => self.font_size.as_deref(),
            StyleAttribute::FontFamily => self.font_family.as_deref(),
            StyleAttribute::Padding => self.padding.as_deref(),
            StyleAttribute::BoxShadow => self.box_shadow.as_deref(),
            StyleAttribute::Margin => None,
        }
    }
}

impl<T: StyleSource> StyleSource for Option<T> {
    fn get(&self, attr: StyleAttribute) -> Option<&str> {
        self.as_ref().and_then(|s| s.get(attr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_and_get() {
        let style = AppearanceStyle::new()
            .with(StyleAttribute::BackgroundColor, "#fff")
            .with(StyleAttribute::Padding, "4px 8px");
        assert_eq!(style.get(StyleAttribute::BackgroundColor), Some("#fff"));
        assert_eq!(style.get(StyleAttribute::Padding), Some("4px 8px"));
        assert_eq!(style.get(StyleAttribute::Margin), None);
    }

    #[test]
    fn test_set_empty_clears() {
        let mut style = AppearanceStyle::new().with(StyleAttribute::Margin, "2px");
        style.set(StyleAttribute::Margin, "");
        assert_eq!(style.margin, None);
    }

    #[test]
    fn test_text_block_ignores_border() {
        let block = TextBlockStyle {
            text_color: Some("#111".into()),
            ..Default::default()
        };
        assert_eq!(block.get(StyleAttribute::TextColor), Some("#111"));
        assert_eq!(block.get(StyleAttribute::BorderWidth), None);
    }

    #[test]
    fn test_form_style_camel_case_json() {
        let json = r##"{"backgroundColor":"#ffffff","padding":"24px","buttonStyle":{"textColor":"#000"}}"##;
        let style: FormStyle = serde_json::from_str(json).unwrap();
        assert_eq!(style.background_color.as_deref(), Some("#ffffff"));
        assert_eq!(style.padding.as_deref(), Some("24px"));
        assert_eq!(style.button().text_color.as_deref(), Some("#000"));
        assert_eq!(style.title(), TextBlockStyle::default());

        let back = serde_json::to_string(&style).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_unknown_style_keys_are_ignored() {
        let style: AppearanceStyle =
            serde_json::from_str(r#"{"textColor":"red","letterSpacing":"2px"}"#).unwrap();
        assert_eq!(style.text_color.as_deref(), Some("red"));
    }
}
