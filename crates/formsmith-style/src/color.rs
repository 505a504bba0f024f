//! Color validation and the color input state.
//!
//! Accepted forms: `#rgb`, `#rrggbb`, `rgb()`/`rgba()` and `hsl()`/`hsla()`.
//! Invalid text never reaches the model; the last valid color is kept.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::ColorError;

/// Palette shown in the color picker.
pub const PRESET_COLORS: [&str; 30] = [
    "#ffffff", "#f8f9fa", "#e9ecef", "#dee2e6", "#ced4da", "#adb5bd", "#6c757d", "#495057",
    "#343a40", "#212529", "#007bff", "#6610f2", "#6f42c1", "#e83e8c", "#dc3545", "#fd7e14",
    "#ffc107", "#28a745", "#20c997", "#17a2b8", "#f8f9fa", "#e9ecef", "#dee2e6", "#ced4da",
    "#adb5bd", "#6c757d", "#495057", "#343a40", "#212529", "#000000",
];

fn color_patterns() -> &'static [Regex; 3] {
    static PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex pattern is valid"),
            Regex::new(r"^rgba?\(\d+,\s*\d+,\s*\d+(,\s*[\d.]+)?\)$").expect("rgb pattern is valid"),
            Regex::new(r"^hsla?\(\d+,\s*\d+%,\s*\d+%(,\s*[\d.]+)?\)$")
                .expect("hsl pattern is valid"),
        ]
    })
}

/// Returns true if `s` is one of the accepted color forms.
pub fn is_valid_color(s: &str) -> bool {
    color_patterns().iter().any(|re| re.is_match(s))
}

/// A validated color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color(String);

impl Color {
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        if is_valid_color(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ColorError {
                input: s.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for a native `<input type="color">`, which only takes hex.
    pub fn native_picker_value(&self) -> &str {
        if self.0.starts_with('#') {
            &self.0
        } else {
            "#ffffff"
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-text color entry.
///
/// `draft` follows keystrokes; `committed` only changes on valid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorInput {
    committed: String,
    draft: String,
}

impl ColorInput {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            draft: value.clone(),
            committed: value,
        }
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Record typed text. Returns the newly committed color, if the text is valid.
    pub fn input(&mut self, text: &str) -> Option<&str> {
        self.draft = text.to_string();
        if is_valid_color(text) {
            self.committed = text.to_string();
            Some(&self.committed)
        } else {
            None
        }
    }

    /// Pick a color from the palette or native picker.
    pub fn pick(&mut self, color: &Color) {
        self.committed = color.as_str().to_string();
        self.draft = self.committed.clone();
    }

    /// Focus left the input: drop an invalid draft.
    pub fn blur(&mut self) {
        if !is_valid_color(&self.draft) {
            self.draft = self.committed.clone();
        }
    }
}
