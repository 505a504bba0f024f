//! Field definitions.

use serde::{Deserialize, Serialize};

use formsmith_style::{FieldStyle, LabelStyle};

use crate::ModelError;

/// Input kind of a field.
///
/// The tag doubles as the native `<input type>` for simple kinds, so unknown
/// tags are kept verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Text,
    Email,
    Tel,
    Textarea,
    Select,
    Radio,
    Checkbox,
    Other(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Tel => "tel",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Radio => "radio",
            FieldType::Checkbox => "checkbox",
            FieldType::Other(tag) => tag,
        }
    }

    /// Dropdown, single-choice or multi-choice.
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio | FieldType::Checkbox)
    }

    /// Answers are a list rather than a single string.
    pub fn is_multi_choice(&self) -> bool {
        matches!(self, FieldType::Checkbox)
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "text" => FieldType::Text,
            "email" => FieldType::Email,
            "tel" => FieldType::Tel,
            "textarea" => FieldType::Textarea,
            "select" => FieldType::Select,
            "radio" => FieldType::Radio,
            "checkbox" => FieldType::Checkbox,
            _ => FieldType::Other(tag),
        }
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        FieldType::from(tag.to_string())
    }
}

impl From<FieldType> for String {
    fn from(ty: FieldType) -> Self {
        ty.as_str().to_string()
    }
}

/// An entry in the widget panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Widget {
    pub tag: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const WIDGETS: [Widget; 7] = [
    Widget {
        tag: "text",
        label: "Text Input",
        description: "Single line text input",
    },
    Widget {
        tag: "email",
        label: "Email",
        description: "Email input with validation",
    },
    Widget {
        tag: "tel",
        label: "Phone",
        description: "Phone number input",
    },
    Widget {
        tag: "textarea",
        label: "Textarea",
        description: "Multi-line text input",
    },
    Widget {
        tag: "select",
        label: "Select",
        description: "Dropdown selection",
    },
    Widget {
        tag: "radio",
        label: "Radio",
        description: "Single choice from options",
    },
    Widget {
        tag: "checkbox",
        label: "Checkbox",
        description: "Multiple choice options",
    },
];

/// One choice of a dropdown, radio or checkbox field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawOption")]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

/// Stored options are either bare labels or `{label, value}` pairs.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawOption {
    Label(String),
    Pair {
        label: String,
        #[serde(default)]
        value: Option<String>,
    },
}

impl From<RawOption> for FieldOption {
    fn from(raw: RawOption) -> Self {
        match raw {
            RawOption::Label(label) => FieldOption::new(label),
            RawOption::Pair { label, value } => {
                let value = value.unwrap_or_else(|| derive_option_value(&label));
                FieldOption { label, value }
            }
        }
    }
}

impl FieldOption {
    /// Option whose value is derived from its label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: derive_option_value(&label),
            label,
        }
    }
}

/// `"Option 1"` → `"option-1"`: lowercase, each whitespace run becomes `-`.
pub fn derive_option_value(label: &str) -> String {
    let mut value = String::with_capacity(label.len());
    let mut in_space = false;
    for ch in label.chars() {
        if ch.is_whitespace() {
            if !in_space {
                value.push('-');
            }
            in_space = true;
        } else {
            value.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    value
}

fn default_step() -> u32 {
    1
}

/// One input control of a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(default = "default_step")]
    pub step: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<FieldStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_style: Option<LabelStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_label: Option<bool>,
}

impl Field {
    /// A fresh field as dropped from the widget panel.
    ///
    /// Choice fields start with two options.
    pub fn new(id: impl Into<String>, field_type: FieldType) -> Self {
        let options = if field_type.is_choice() {
            vec![FieldOption::new("Option 1"), FieldOption::new("Option 2")]
        } else {
            Vec::new()
        };
        Self {
            id: id.into(),
            label: format!("New {} field", field_type.as_str()),
            field_type,
            required: false,
            placeholder: Some(String::new()),
            options,
            step: 1,
            style: Some(FieldStyle::default()),
            label_style: Some(LabelStyle::default()),
            show_label: Some(true),
        }
    }

    /// The label renders unless explicitly hidden.
    pub fn label_visible(&self) -> bool {
        self.show_label != Some(false)
    }

    /// Placeholder text, treating an empty string as unset.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref().filter(|p| !p.is_empty())
    }

    fn require_choice(&self) -> Result<(), ModelError> {
        if self.field_type.is_choice() {
            Ok(())
        } else {
            Err(ModelError::NotAChoiceField {
                field_id: self.id.clone(),
            })
        }
    }

    fn option_mut(&mut self, index: usize) -> Result<&mut FieldOption, ModelError> {
        let field_id = self.id.clone();
        self.options
            .get_mut(index)
            .ok_or(ModelError::OptionOutOfRange { field_id, index })
    }

    /// Append `Option N`.
    pub fn add_option(&mut self) -> Result<&FieldOption, ModelError> {
        self.require_choice()?;
        let n = self.options.len() + 1;
        self.options.push(FieldOption {
            label: format!("Option {n}"),
            value: format!("option-{n}"),
        });
        Ok(&self.options[n - 1])
    }

    /// Change an option's label; its value is re-derived.
    pub fn rename_option(&mut self, index: usize, label: &str) -> Result<(), ModelError> {
        self.require_choice()?;
        let option = self.option_mut(index)?;
        option.label = label.to_string();
        option.value = derive_option_value(label);
        Ok(())
    }

    /// Set an option's value independently of its label.
    pub fn set_option_value(&mut self, index: usize, value: &str) -> Result<(), ModelError> {
        self.require_choice()?;
        self.option_mut(index)?.value = value.to_string();
        Ok(())
    }

    /// Remove an option. The last remaining option cannot be removed.
    pub fn remove_option(&mut self, index: usize) -> Result<FieldOption, ModelError> {
        self.require_choice()?;
        if index >= self.options.len() {
            return Err(ModelError::OptionOutOfRange {
                field_id: self.id.clone(),
                index,
            });
        }
        if self.options.len() <= 1 {
            return Err(ModelError::LastOption {
                field_id: self.id.clone(),
            });
        }
        Ok(self.options.remove(index))
    }

    /// Whether the remove-option control should be enabled.
    pub fn can_remove_option(&self) -> bool {
        self.options.len() > 1
    }
}
