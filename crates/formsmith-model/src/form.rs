//! The persisted form document.
//!
//! Field names follow the hosted datastore (`form_fields`, `is_public`, ...).
//! The `style` column may arrive as a JSON object, a JSON-encoded string, or
//! null; all three normalize to a [`FormStyle`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use formsmith_style::FormStyle;

use crate::field::Field;
use crate::ModelError;

fn default_true() -> bool {
    true
}

/// Reserved for multi-step forms. Carried through storage untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormStep {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A form and its presentation.
///
/// `view_count` and `submission_count` are maintained by analytics; they are
/// only read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub form_fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<FormStep>,
    #[serde(default, deserialize_with = "deserialize_form_style")]
    pub style: FormStyle,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default = "default_true")]
    pub show_title: bool,
    #[serde(default = "default_true")]
    pub show_description: bool,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub submission_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Form {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            form_fields: Vec::new(),
            steps: Vec::new(),
            style: FormStyle::default(),
            is_public: false,
            show_title: true,
            show_description: true,
            view_count: 0,
            submission_count: 0,
            user_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Parse a stored document.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::Document(e.to_string()))
    }

    /// Parse an already-decoded document value.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        serde_json::from_value(value).map_err(|e| ModelError::Document(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        serde_json::to_string_pretty(self).map_err(|e| ModelError::Document(e.to_string()))
    }

    /// Description text, empty when unset.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Submissions per view, if the form has been viewed.
    pub fn conversion_rate(&self) -> Option<f64> {
        if self.view_count == 0 {
            None
        } else {
            Some(self.submission_count as f64 / self.view_count as f64)
        }
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.form_fields.iter().find(|f| f.id == id)
    }
}

/// Normalize a stored `style` value. Anything unreadable becomes empty.
pub fn parse_form_style(value: &Value) -> FormStyle {
    match value {
        Value::Null => FormStyle::default(),
        Value::String(s) if s.trim().is_empty() => FormStyle::default(),
        Value::String(s) => serde_json::from_str(s).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored form style is not valid JSON, using empty style");
            FormStyle::default()
        }),
        Value::Object(_) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "stored form style has unexpected shape, using empty style");
            FormStyle::default()
        }),
        other => {
            tracing::warn!(kind = ?other, "stored form style is not an object, using empty style");
            FormStyle::default()
        }
    }
}

fn deserialize_form_style<'de, D>(deserializer: D) -> Result<FormStyle, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(parse_form_style).unwrap_or_default())
}
