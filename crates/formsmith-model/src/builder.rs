//! Editing state of the form builder screen.
//!
//! Owns the field list while a form is open. All edits mark the builder dirty
//! until the next save.

use chrono::{DateTime, Utc};

use formsmith_style::FormStyle;

use crate::field::{Field, FieldType};
use crate::form::Form;
use crate::ModelError;

#[derive(Debug, Clone, PartialEq)]
pub struct FormBuilder {
    form: Form,
    selected: Option<String>,
    dirty: bool,
}

impl FormBuilder {
    pub fn new(form: Form) -> Self {
        Self {
            form,
            selected: None,
            dirty: false,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn fields(&self) -> &[Field] {
        &self.form.form_fields
    }

    pub fn selected(&self) -> Option<&Field> {
        let id = self.selected.as_deref()?;
        self.form.field(id)
    }

    pub fn has_changes(&self) -> bool {
        self.dirty
    }

    pub fn select(&mut self, field_id: &str) -> Result<(), ModelError> {
        if self.form.field(field_id).is_none() {
            return Err(ModelError::FieldNotFound {
                field_id: field_id.to_string(),
            });
        }
        self.selected = Some(field_id.to_string());
        Ok(())
    }

    /// Drop a widget at `index`, using the current time for its id.
    pub fn add_widget(&mut self, field_type: FieldType, index: usize) -> Result<&Field, ModelError> {
        self.add_widget_at(field_type, index, Utc::now())
    }

    /// Drop a widget at `index` with an id derived from `now`.
    ///
    /// Ids are millisecond timestamps, bumped until unique within the form.
    pub fn add_widget_at(
        &mut self,
        field_type: FieldType,
        index: usize,
        now: DateTime<Utc>,
    ) -> Result<&Field, ModelError> {
        let len = self.form.form_fields.len();
        if index > len {
            return Err(ModelError::IndexOutOfRange { index, len });
        }

        let mut stamp = now.timestamp_millis();
        while self.form.field(&stamp.to_string()).is_some() {
            stamp += 1;
        }
        let field = Field::new(stamp.to_string(), field_type);
        tracing::debug!(id = %field.id, kind = field.field_type.as_str(), index, "field added");

        self.selected = Some(field.id.clone());
        self.form.form_fields.insert(index, field);
        self.dirty = true;
        Ok(&self.form.form_fields[index])
    }

    /// Move the field at `from` to `to`. Other fields keep their order.
    pub fn move_field(&mut self, from: usize, to: usize) -> Result<(), ModelError> {
        let len = self.form.form_fields.len();
        for index in [from, to] {
            if index >= len {
                return Err(ModelError::IndexOutOfRange { index, len });
            }
        }
        let field = self.form.form_fields.remove(from);
        self.form.form_fields.insert(to, field);
        self.dirty = true;
        Ok(())
    }

    /// Apply an edit to one field in place.
    pub fn update_field<F>(&mut self, field_id: &str, edit: F) -> Result<(), ModelError>
    where
        F: FnOnce(&mut Field) -> Result<(), ModelError>,
    {
        let field = self
            .form
            .form_fields
            .iter_mut()
            .find(|f| f.id == field_id)
            .ok_or_else(|| ModelError::FieldNotFound {
                field_id: field_id.to_string(),
            })?;

        // Edit a copy so a rejected edit leaves the field untouched.
        let mut edited = field.clone();
        edit(&mut edited)?;
        *field = edited;
        self.dirty = true;
        Ok(())
    }

    pub fn remove_field(&mut self, field_id: &str) -> Result<Field, ModelError> {
        let index = self
            .form
            .form_fields
            .iter()
            .position(|f| f.id == field_id)
            .ok_or_else(|| ModelError::FieldNotFound {
                field_id: field_id.to_string(),
            })?;
        if self.selected.as_deref() == Some(field_id) {
            self.selected = None;
        }
        self.dirty = true;
        Ok(self.form.form_fields.remove(index))
    }

    pub fn set_title(&mut self, title: &str) {
        self.form.title = title.to_string();
        self.dirty = true;
    }

    pub fn set_description(&mut self, description: &str) {
        self.form.description = Some(description.to_string());
        self.dirty = true;
    }

    pub fn toggle_show_title(&mut self) {
        self.form.show_title = !self.form.show_title;
        self.dirty = true;
    }

    pub fn toggle_show_description(&mut self) {
        self.form.show_description = !self.form.show_description;
        self.dirty = true;
    }

    pub fn set_style(&mut self, style: FormStyle) {
        self.form.style = style;
        self.dirty = true;
    }

    /// Hand the document to storage and clear the dirty flag.
    pub fn save(&mut self) -> &Form {
        self.dirty = false;
        &self.form
    }

    pub fn into_form(self) -> Form {
        self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn builder_with(n: usize) -> FormBuilder {
        let mut b = FormBuilder::new(Form::new("f1", "Test"));
        for i in 0..n {
            b.add_widget_at(FieldType::Text, i, at(1_000 + i as i64)).unwrap();
        }
        b
    }

    fn ids(b: &FormBuilder) -> Vec<&str> {
        b.fields().iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_add_widget_selects_and_dirties() {
        let mut b = FormBuilder::new(Form::new("f1", "Test"));
        let id = b
            .add_widget_at(FieldType::Email, 0, at(1_700_000_000_000))
            .unwrap()
            .id
            .clone();
        assert_eq!(id, "1700000000000");
        assert_eq!(b.selected().map(|f| f.id.as_str()), Some("1700000000000"));
        assert!(b.has_changes());
    }

    #[test]
    fn test_add_widget_ids_unique() {
        let mut b = FormBuilder::new(Form::new("f1", "Test"));
        b.add_widget_at(FieldType::Text, 0, at(5)).unwrap();
        b.add_widget_at(FieldType::Text, 1, at(5)).unwrap();
        assert_eq!(ids(&b), vec!["5", "6"]);
    }

    #[test]
    fn test_add_widget_inserts_at_index() {
        let mut b = builder_with(2);
        b.add_widget_at(FieldType::Radio, 1, at(9_000)).unwrap();
        assert_eq!(ids(&b), vec!["1000", "9000", "1001"]);
    }

    #[test]
    fn test_add_widget_index_out_of_range() {
        let mut b = builder_with(1);
        assert!(matches!(
            b.add_widget_at(FieldType::Text, 5, at(1)),
            Err(ModelError::IndexOutOfRange { index: 5, len: 1 })
        ));
    }

    #[test]
    fn test_move_field_preserves_others() {
        let mut b = builder_with(4);
        b.move_field(0, 2).unwrap();
        assert_eq!(ids(&b), vec!["1001", "1002", "1000", "1003"]);
        b.move_field(3, 0).unwrap();
        assert_eq!(ids(&b), vec!["1003", "1001", "1002", "1000"]);
    }

    #[test]
    fn test_update_field() {
        let mut b = builder_with(1);
        b.update_field("1000", |f| {
            f.label = "Work Email".into();
            f.required = true;
            Ok(())
        })
        .unwrap();
        assert_eq!(b.fields()[0].label, "Work Email");
        assert!(b.fields()[0].required);
    }

    #[test]
    fn test_rejected_edit_leaves_field() {
        let mut b = FormBuilder::new(Form::new("f1", "Test"));
        b.add_widget_at(FieldType::Select, 0, at(1)).unwrap();
        b.update_field("1", |f| f.remove_option(0).map(|_| ())).unwrap();
        let before = b.fields()[0].clone();
        let result = b.update_field("1", |f| {
            f.label = "changed".into();
            f.remove_option(0).map(|_| ())
        });
        assert!(matches!(result, Err(ModelError::LastOption { .. })));
        assert_eq!(b.fields()[0], before);
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut b = builder_with(2);
        b.select("1001").unwrap();
        b.remove_field("1001").unwrap();
        assert!(b.selected().is_none());
        assert_eq!(ids(&b), vec!["1000"]);
    }

    #[test]
    fn test_save_clears_dirty() {
        let mut b = builder_with(1);
        b.toggle_show_title();
        assert!(b.has_changes());
        assert!(!b.save().show_title);
        assert!(!b.has_changes());
    }
}
