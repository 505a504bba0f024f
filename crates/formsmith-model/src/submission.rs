//! Submissions and the client-side answer state that produces them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::ModelError;

/// An answer: text for most fields, a list for multi-choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Choices(Vec<String>),
}

impl Answer {
    /// Initial value for a field: `[]` for multi-choice, `''` otherwise.
    pub fn empty_for(field: &Field) -> Self {
        if field.field_type.is_multi_choice() {
            Answer::Choices(Vec::new())
        } else {
            Answer::Text(String::new())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Answer::Text(s) => s.is_empty(),
            Answer::Choices(v) => v.is_empty(),
        }
    }
}

/// A stored submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub form_id: String,
    pub submitted_at: DateTime<Utc>,
    pub data: BTreeMap<String, Answer>,
}

/// Answers being filled in on a public form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormResponse {
    answers: BTreeMap<String, Answer>,
}

impl FormResponse {
    /// Start with an empty answer per field.
    pub fn new(fields: &[Field]) -> Self {
        let answers = fields
            .iter()
            .map(|f| (f.id.clone(), Answer::empty_for(f)))
            .collect();
        Self { answers }
    }

    pub fn get(&self, field_id: &str) -> Option<&Answer> {
        self.answers.get(field_id)
    }

    /// Replace a scalar answer.
    pub fn set_text(&mut self, field_id: &str, value: impl Into<String>) {
        self.answers
            .insert(field_id.to_string(), Answer::Text(value.into()));
    }

    /// Check or uncheck one choice of a multi-choice answer.
    pub fn toggle_choice(&mut self, field_id: &str, option: &str, checked: bool) {
        let entry = self
            .answers
            .entry(field_id.to_string())
            .or_insert_with(|| Answer::Choices(Vec::new()));
        if !matches!(entry, Answer::Choices(_)) {
            *entry = Answer::Choices(Vec::new());
        }
        let Answer::Choices(choices) = entry else {
            return;
        };
        if checked {
            if !choices.iter().any(|c| c == option) {
                choices.push(option.to_string());
            }
        } else {
            choices.retain(|c| c != option);
        }
    }

    /// First required field without an answer, in field order.
    pub fn validate(&self, fields: &[Field]) -> Result<(), ModelError> {
        for field in fields.iter().filter(|f| f.required) {
            let missing = self.answers.get(&field.id).map_or(true, Answer::is_empty);
            if missing {
                return Err(ModelError::MissingRequired {
                    field_id: field.id.clone(),
                    label: field.label.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validate and freeze into a submission.
    pub fn submit(
        self,
        form_id: &str,
        fields: &[Field],
        submitted_at: DateTime<Utc>,
    ) -> Result<Submission, ModelError> {
        self.validate(fields)?;
        Ok(Submission {
            id: None,
            form_id: form_id.to_string(),
            submitted_at,
            data: self.answers,
        })
    }
}
