//! Default resolution.
//!
//! One table maps `(attribute, scope)` to the value an unset attribute takes.
//! The preview renderer and every generator dialect go through the functions
//! here and nowhere else.
//!
//! An attribute counts as explicitly set when it is present, non-empty and not
//! equal to its no-op sentinel (`transparent`, `inherit`, `0px`, `none`).
//! A sentinel value behaves exactly like an absent one.

use crate::appearance::StyleSource;

/// One styleable attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleAttribute {
    BackgroundColor,
    TextColor,
    BorderColor,
    BorderWidth,
    BorderRadius,
    FontSize,
    FontFamily,
    Padding,
    Margin,
    BoxShadow,
}

impl StyleAttribute {
    pub const ALL: [StyleAttribute; 10] = [
        StyleAttribute::BackgroundColor,
        StyleAttribute::TextColor,
        StyleAttribute::BorderColor,
        StyleAttribute::BorderWidth,
        StyleAttribute::BorderRadius,
        StyleAttribute::FontSize,
        StyleAttribute::FontFamily,
        StyleAttribute::Padding,
        StyleAttribute::Margin,
        StyleAttribute::BoxShadow,
    ];

    /// CSS property name.
    pub fn css_property(self) -> &'static str {
        match self {
            StyleAttribute::BackgroundColor => "background-color",
            StyleAttribute::TextColor => "color",
            StyleAttribute::BorderColor => "border-color",
            StyleAttribute::BorderWidth => "border-width",
            StyleAttribute::BorderRadius => "border-radius",
            StyleAttribute::FontSize => "font-size",
            StyleAttribute::FontFamily => "font-family",
            StyleAttribute::Padding => "padding",
            StyleAttribute::Margin => "margin",
            StyleAttribute::BoxShadow => "box-shadow",
        }
    }

    /// The value meaning "do not override". `None` means every value counts.
    ///
    /// Padding has no sentinel: `0px` padding differs from the default.
    pub fn noop_sentinel(self) -> Option<&'static str> {
        match self {
            StyleAttribute::BackgroundColor | StyleAttribute::BorderColor => Some("transparent"),
            StyleAttribute::TextColor
            | StyleAttribute::FontSize
            | StyleAttribute::FontFamily => Some("inherit"),
            StyleAttribute::BorderWidth
            | StyleAttribute::BorderRadius
            | StyleAttribute::Margin => Some("0px"),
            StyleAttribute::BoxShadow => Some("none"),
            StyleAttribute::Padding => None,
        }
    }

    /// Returns true if `value` is empty or equals the no-op sentinel.
    pub fn is_noop(self, value: &str) -> bool {
        let value = value.trim();
        value.is_empty() || self.noop_sentinel() == Some(value)
    }
}

/// Where a style applies. Each scope has its own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleScope {
    Form,
    Field,
    Label,
    Title,
    Description,
    Button,
}

impl StyleScope {
    pub const ALL: [StyleScope; 6] = [
        StyleScope::Form,
        StyleScope::Field,
        StyleScope::Label,
        StyleScope::Title,
        StyleScope::Description,
        StyleScope::Button,
    ];

    /// Attributes this scope reads, in emission order.
    pub fn attributes(self) -> &'static [StyleAttribute] {
        use StyleAttribute::*;
        match self {
            StyleScope::Form => &[
                BackgroundColor,
                TextColor,
                BorderColor,
                BorderWidth,
                BorderRadius,
                FontSize,
                FontFamily,
                Padding,
                BoxShadow,
            ],
            StyleScope::Field | StyleScope::Button => &StyleAttribute::ALL,
            StyleScope::Label => &[TextColor, FontSize, FontFamily],
            StyleScope::Title | StyleScope::Description => {
                &[TextColor, FontSize, FontFamily, Margin, Padding]
            }
        }
    }

    /// Class name used for this scope in generated stylesheets.
    pub fn class_name(self) -> &'static str {
        match self {
            StyleScope::Form => "form-container",
            StyleScope::Field => "form-control",
            StyleScope::Label => "form-label",
            StyleScope::Title => "form-title",
            StyleScope::Description => "form-description",
            StyleScope::Button => "submit-btn",
        }
    }
}

/// Value an unset attribute resolves to in `scope`.
pub fn default_value(attr: StyleAttribute, scope: StyleScope) -> &'static str {
    use StyleAttribute::*;
    use StyleScope::*;
    match (scope, attr) {
        (Form, Padding) => "24px",

        (Field, BorderColor) => "#e5e7eb",
        (Field, BorderWidth) => "1px",
        (Field, Padding) => "8px 12px",

        (Title, FontSize) => "24px",
        (Title, Margin) => "0px 0px 16px 0px",
        (Title, Padding) => "0px",

        (Description, TextColor) => "#666666",
        (Description, FontSize) => "16px",
        (Description, Padding) => "0px",

        (Button, BackgroundColor) => "#3b82f6",
        (Button, TextColor) => "#ffffff",
        (Button, BorderColor) => "#3b82f6",
        (Button, BorderWidth) => "1px",
        (Button, BorderRadius) => "6px",
        (Button, FontSize) => "16px",
        (Button, Padding) => "12px 24px",

        (_, Padding) => "0px",
        (_, attr) => attr.noop_sentinel().unwrap_or(""),
    }
}

/// The explicitly set value of `attr`, if any.
pub fn explicit_value(source: &dyn StyleSource, attr: StyleAttribute) -> Option<&str> {
    source
        .get(attr)
        .filter(|v| !attr.is_noop(v))
        .map(str::trim)
}

/// The value `attr` takes in `scope`: explicit if set, otherwise the default.
pub fn resolve<'a>(source: &'a dyn StyleSource, attr: StyleAttribute, scope: StyleScope) -> &'a str {
    explicit_value(source, attr).unwrap_or_else(|| default_value(attr, scope))
}

/// A single CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }

    /// camelCase property name for JS style objects.
    pub fn js_property(&self) -> String {
        camel_case(self.property)
    }
}

/// `background-color` → `backgroundColor`
pub fn camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut upper = false;
    for ch in property.chars() {
        if ch == '-' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Declarations for attributes explicitly set on `source`.
///
/// A set border width also emits `border-style: solid`, since a width alone
/// paints nothing.
pub fn explicit_declarations(source: &dyn StyleSource, scope: StyleScope) -> Vec<Declaration> {
    let mut decls = Vec::new();
    for &attr in scope.attributes() {
        if let Some(value) = explicit_value(source, attr) {
            decls.push(Declaration::new(attr.css_property(), value));
            if attr == StyleAttribute::BorderWidth {
                decls.push(Declaration::new("border-style", "solid"));
            }
        }
    }
    decls
}

/// Fully resolved declarations for every attribute of `scope`.
///
/// Attributes that resolve to their sentinel are left out; the sentinel paints
/// the same as inheriting.
pub fn resolved_declarations(source: &dyn StyleSource, scope: StyleScope) -> Vec<Declaration> {
    let mut decls = Vec::new();
    for &attr in scope.attributes() {
        let value = resolve(source, attr, scope);
        if attr.is_noop(value) {
            continue;
        }
        decls.push(Declaration::new(attr.css_property(), value));
        if attr == StyleAttribute::BorderWidth {
            decls.push(Declaration::new("border-style", "solid"));
        }
    }
    decls
}

/// Resolved declarations for a style with nothing set.
pub fn default_declarations(scope: StyleScope) -> Vec<Declaration> {
    resolved_declarations(&Unstyled, scope)
}

struct Unstyled;

impl StyleSource for Unstyled {
    fn get(&self, _attr: StyleAttribute) -> Option<&str> {
        None
    }
}
