//! Formsmith Model
//!
//! The structured document a form is saved as, and the in-memory editing
//! operations the builder performs on it.
//!
//! ```text
//! stored JSON ──> Form::from_json() ──> Form { form_fields, style, .. }
//!                                          │
//!                     FormBuilder edits ───┘──> Form::to_json()
//! ```
//!
//! Style values stay as stored strings; see `formsmith-style` for resolution.

pub mod builder;
pub mod field;
pub mod form;
pub mod submission;

pub use builder::FormBuilder;
pub use field::{derive_option_value, Field, FieldOption, FieldType, Widget, WIDGETS};
pub use form::{parse_form_style, Form, FormStep};
pub use submission::{Answer, FormResponse, Submission};

/// Rejected model operation. The model is left unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("Field '{field_id}' must keep at least one option")]
    LastOption { field_id: String },

    #[error("Field '{field_id}' does not take options")]
    NotAChoiceField { field_id: String },

    #[error("No field with id '{field_id}'")]
    FieldNotFound { field_id: String },

    #[error("Field '{field_id}' has no option at index {index}")]
    OptionOutOfRange { field_id: String, index: usize },

    #[error("Index {index} out of range for {len} fields")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Required field '{label}' is missing")]
    MissingRequired { field_id: String, label: String },

    #[error("Invalid form document: {0}")]
    Document(String),
}
