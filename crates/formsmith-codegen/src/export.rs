//! Export dialog state and download naming.

use formsmith_model::Form;

use crate::{generate_form, CodegenError, Dialect};

/// `Contact Us` + React → `contact-us-form.jsx`
pub fn export_file_name(title: &str, dialect: Dialect) -> String {
    let slug = title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    let stem = if slug.is_empty() { "untitled".to_string() } else { slug };
    format!("{stem}-form.{}", dialect.extension())
}

/// The code shown in the export dialog.
///
/// A failed regeneration leaves the last good output in place.
#[derive(Debug, Clone, Default)]
pub struct ExportSession {
    dialect: Dialect,
    output: Option<String>,
}

impl ExportSession {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            output: None,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn set_dialect(&mut self, dialect: Dialect) {
        self.dialect = dialect;
    }

    /// Last successfully generated code.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Regenerate for `form`. On error the previous output is kept.
    pub fn regenerate(&mut self, form: &Form) -> Result<&str, CodegenError> {
        match generate_form(form, self.dialect) {
            Ok(code) => Ok(self.output.insert(code).as_str()),
            Err(err) => {
                tracing::warn!(dialect = self.dialect.as_str(), error = %err, "generation failed");
                Err(err)
            }
        }
    }

    pub fn file_name(&self, form: &Form) -> String {
        export_file_name(&form.title, self.dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_model::{Field, FieldType};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_file_names() {
        assert_eq!(export_file_name("Contact Us", Dialect::Html), "contact-us-form.html");
        assert_eq!(export_file_name("  Job \t Application ", Dialect::React), "job-application-form.jsx");
        assert_eq!(export_file_name("", Dialect::Vue), "untitled-form.vue");
        assert_eq!(export_file_name("   ", Dialect::Html), "untitled-form.html");
    }

    #[test]
    fn test_failed_regenerate_keeps_output() {
        let mut form = Form::new("f1", "Contact");
        form.form_fields.push(Field::new("a", FieldType::Text));

        let mut session = ExportSession::new(Dialect::Html);
        let first = session.regenerate(&form).unwrap().to_string();

        form.form_fields.push(Field::new("a", FieldType::Email));
        assert!(session.regenerate(&form).is_err());
        assert_eq!(session.output(), Some(first.as_str()));
    }

    #[test]
    fn test_dialect_switch() {
        let form = Form::new("f1", "Signup");
        let mut session = ExportSession::new(Dialect::Html);
        assert_eq!(session.output(), None);

        session.set_dialect(Dialect::Vue);
        let code = session.regenerate(&form).unwrap();
        assert!(code.starts_with("<template>"));
        assert_eq!(session.file_name(&form), "signup-form.vue");
    }
}
