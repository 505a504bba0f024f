//! Formsmith Code Generator
//!
//! Compiles a field list and form style into one self-contained source file
//! in the chosen dialect: a static HTML document, a React component, or a Vue
//! single-file component.
//!
//! ```text
//! (fields, FormStyle, title, ..) → prepare() → FormContext → Emitter → String
//! ```
//!
//! Generation is pure: identical input always yields byte-identical output.

pub mod css;
pub mod export;
pub mod html;
pub mod markup;
pub mod react;
pub mod vue;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use formsmith_model::{Field, Form};
use formsmith_style::defaults::explicit_declarations;
use formsmith_style::{Declaration, FormStyle, StyleAttribute, StyleScope};

pub use export::{export_file_name, ExportSession};

/// Code generation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Codegen error: {message}")]
pub struct CodegenError {
    pub message: String,
}

impl CodegenError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Standalone HTML with embedded CSS and a submit script.
    #[default]
    Html,
    /// React function component.
    React,
    /// Vue single-file component.
    Vue,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Html, Dialect::React, Dialect::Vue];

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Html => "html",
            Dialect::React => "react",
            Dialect::Vue => "vue",
        }
    }

    /// File extension for downloads.
    pub fn extension(self) -> &'static str {
        match self {
            Dialect::Html => "html",
            Dialect::React => "jsx",
            Dialect::Vue => "vue",
        }
    }

    fn emitter(self) -> &'static dyn Emitter {
        match self {
            Dialect::Html => &html::HtmlEmitter,
            Dialect::React => &react::ReactEmitter,
            Dialect::Vue => &vue::VueEmitter,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Dialect::Html),
            "react" | "jsx" => Ok(Dialect::React),
            "vue" => Ok(Dialect::Vue),
            other => Err(CodegenError::new(format!("unknown dialect '{other}'"))),
        }
    }
}

/// Per-dialect emission.
pub trait Emitter {
    /// Emit the complete artifact.
    fn emit_form(&self, ctx: &FormContext<'_>) -> String;

    /// Emit one field's markup into `out` at `depth`.
    fn emit_field(&self, field: &FieldContext<'_>, out: &mut markup::Lines, depth: usize);
}

/// A field with its inline declarations worked out.
pub struct FieldContext<'a> {
    pub field: &'a Field,
    /// Inline declarations for the input control.
    pub control: Vec<Declaration>,
    /// Inline declarations for the label.
    pub label: Vec<Declaration>,
    /// Inline declarations for choice option text.
    pub option_text: Vec<Declaration>,
}

impl FieldContext<'_> {
    pub fn id(&self) -> &str {
        &self.field.id
    }

    /// Label text with the required marker appended.
    pub fn label_text(&self) -> String {
        if self.field.required {
            format!("{} *", self.field.label)
        } else {
            self.field.label.clone()
        }
    }

    /// Quoted key into the component state object.
    pub fn state_key(&self) -> String {
        markup::js_string(&self.field.id)
    }

    /// Initial state value: `[]` for multi-choice, `''` otherwise.
    pub fn initial_value(&self) -> &'static str {
        if self.field.field_type.is_multi_choice() {
            "[]"
        } else {
            "''"
        }
    }
}

/// Everything an emitter needs, validated.
pub struct FormContext<'a> {
    pub fields: Vec<FieldContext<'a>>,
    pub title: &'a str,
    /// `None` when hidden or empty.
    pub description: Option<&'a str>,
    pub show_title: bool,
    pub form: Vec<Declaration>,
    pub title_style: Vec<Declaration>,
    pub description_style: Vec<Declaration>,
    pub button: Vec<Declaration>,
}

impl<'a> FormContext<'a> {
    pub fn has_header(&self) -> bool {
        self.show_title || self.description.is_some()
    }

    /// Required multi-choice fields. A native `required` on each checkbox
    /// would demand every box, so these are checked on submit instead.
    pub fn required_groups(&self) -> impl Iterator<Item = &FieldContext<'a>> + '_ {
        self.fields
            .iter()
            .filter(|f| f.field.required && f.field.field_type.is_multi_choice())
    }

    /// Emit a submit-time check that every required group has a selection.
    /// `state` is the expression holding the form state.
    pub(crate) fn emit_required_group_check(
        &self,
        out: &mut markup::Lines,
        depth: usize,
        state: &str,
    ) {
        let groups: Vec<_> = self.required_groups().collect();
        if groups.is_empty() {
            return;
        }
        out.line(depth, "const requiredGroups = [");
        for group in groups {
            out.line(
                depth + 1,
                &format!(
                    "{{ id: {}, label: {} }},",
                    group.state_key(),
                    markup::js_string(&group.field.label)
                ),
            );
        }
        out.line(depth, "];");
        out.line(
            depth,
            &format!("const missing = requiredGroups.find((group) => {state}[group.id].length === 0);"),
        );
        out.line(depth, "if (missing) {");
        out.line(depth + 1, "alert('Please fill in: ' + missing.label);");
        out.line(depth + 1, "return;");
        out.line(depth, "}");
    }
}

/// Typed generation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub dialect: Dialect,
    pub show_title: bool,
    pub show_description: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::Html,
            show_title: true,
            show_description: true,
        }
    }
}

/// Validate input and collect inline declarations.
pub fn prepare<'a>(
    fields: &'a [Field],
    style: &'a FormStyle,
    title: &'a str,
    description: &'a str,
    show_title: bool,
    show_description: bool,
) -> Result<FormContext<'a>, CodegenError> {
    let mut seen = HashSet::new();
    let mut field_ctxs = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        if field.id.trim().is_empty() {
            return Err(CodegenError::new(format!("field at position {index} has no id")));
        }
        if !seen.insert(field.id.as_str()) {
            return Err(CodegenError::new(format!("duplicate field id '{}'", field.id)));
        }
        if field.field_type.is_choice() && field.options.is_empty() {
            return Err(CodegenError::new(format!(
                "{} field '{}' has no options",
                field.field_type.as_str(),
                field.id
            )));
        }

        let control = explicit_declarations(&field.style, StyleScope::Field);
        let option_text = control
            .iter()
            .filter(|d| d.property == StyleAttribute::TextColor.css_property())
            .cloned()
            .collect();
        field_ctxs.push(FieldContext {
            field,
            control,
            label: explicit_declarations(&field.label_style, StyleScope::Label),
            option_text,
        });
    }

    let description = Some(description).filter(|d| show_description && !d.is_empty());

    Ok(FormContext {
        fields: field_ctxs,
        title,
        description,
        show_title,
        form: explicit_declarations(style, StyleScope::Form),
        title_style: explicit_declarations(&style.title_style, StyleScope::Title),
        description_style: explicit_declarations(&style.description_style, StyleScope::Description),
        button: explicit_declarations(&style.button_style, StyleScope::Button),
    })
}

/// Generate a standalone form in `dialect`.
pub fn generate(
    fields: &[Field],
    style: &FormStyle,
    title: &str,
    description: &str,
    show_title: bool,
    show_description: bool,
    dialect: Dialect,
) -> Result<String, CodegenError> {
    let ctx = prepare(fields, style, title, description, show_title, show_description)?;
    let output = dialect.emitter().emit_form(&ctx);
    tracing::debug!(
        dialect = dialect.as_str(),
        fields = fields.len(),
        bytes = output.len(),
        "form generated"
    );
    Ok(output)
}

/// Generate from a stored form, using its own visibility flags.
pub fn generate_form(form: &Form, dialect: Dialect) -> Result<String, CodegenError> {
    generate_with(
        form,
        GenerateOptions {
            dialect,
            show_title: form.show_title,
            show_description: form.show_description,
        },
    )
}

/// Generate from a stored form with explicit options.
pub fn generate_with(form: &Form, options: GenerateOptions) -> Result<String, CodegenError> {
    generate(
        &form.form_fields,
        &form.style,
        &form.title,
        form.description_text(),
        options.show_title,
        options.show_description,
        options.dialect,
    )
}
