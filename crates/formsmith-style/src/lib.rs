//! Formsmith Style Model
//!
//! Plain appearance records for forms, fields, labels and their sub-parts,
//! plus the single table that decides what an unset attribute resolves to.
//! Both the live preview and the code generator read styles through
//! [`defaults`], so the two never disagree about a fallback value.
//!
//! ```text
//! stored string ──> Length / BoxShorthand ──> SpacingEditor (per-side edits)
//!                                      └────> shorthand string (compressed)
//! ```
//!
//! # Example
//!
//! ```
//! use formsmith_style::{BoxShorthand, SpacingEditor, Side};
//!
//! let mut editor = SpacingEditor::from_value("10px");
//! editor.toggle_linked();
//! assert_eq!(editor.set_side(Side::Right, 5.0), "10px 5px 10px 10px");
//! assert_eq!(BoxShorthand::parse("8px 8px").to_string(), "8px");
//! ```

pub mod appearance;
pub mod color;
pub mod defaults;
pub mod layout;
pub mod length;
pub mod shorthand;
pub mod spacing_editor;

pub use appearance::{
    AppearanceStyle, ButtonStyle, FieldStyle, FormStyle, LabelStyle, StyleSource, TextBlockStyle,
};
pub use color::{is_valid_color, Color, ColorInput, PRESET_COLORS};
pub use defaults::{Declaration, StyleAttribute, StyleScope};
pub use length::{format_number, Length, LengthUnit};
pub use shorthand::{BoxShorthand, Side, Sides};
pub use spacing_editor::SpacingEditor;

/// Rejected color text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid color '{input}': expected hex, rgb(a) or hsl(a)")]
pub struct ColorError {
    pub input: String,
}
