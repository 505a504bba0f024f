//! Interpret a form into a styled element tree.
//!
//! Styles are resolved through `formsmith_style::defaults` with the same
//! scopes the generators use, so the canvas paints what an export renders.

use formsmith_model::{Answer, Field, FieldType, Form, FormBuilder, FormResponse};
use formsmith_style::defaults::resolved_declarations;
use formsmith_style::{Declaration, StyleAttribute, StyleScope, StyleSource};

use crate::node::PreviewNode;

pub const EMPTY_CANVAS_HINT: &str = "Drag widgets here to build your form";

/// Where the preview is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    /// Builder canvas: controls are inert.
    Builder,
    /// Published form: controls are live and a submit button is shown.
    Public,
}

/// Render a whole form.
pub fn render_form(form: &Form, mode: PreviewMode) -> PreviewNode {
    render(form, mode, None, None)
}

/// Render the builder canvas, marking the selected field.
pub fn render_canvas(builder: &FormBuilder) -> PreviewNode {
    let selected = builder.selected().map(|f| f.id.as_str());
    render(builder.form(), PreviewMode::Builder, selected, None)
}

/// Render a public form filled with `response`.
pub fn render_response(form: &Form, response: &FormResponse) -> PreviewNode {
    render(form, PreviewMode::Public, None, Some(response))
}

fn render(
    form: &Form,
    mode: PreviewMode,
    selected: Option<&str>,
    response: Option<&FormResponse>,
) -> PreviewNode {
    let style = &form.style;
    let mut container = PreviewNode::new("div")
        .class(StyleScope::Form.class_name())
        .styled(resolved_declarations(style, StyleScope::Form));

    let description = Some(form.description_text()).filter(|d| form.show_description && !d.is_empty());
    if form.show_title || description.is_some() {
        let mut header = PreviewNode::new("div").class("form-header");
        if form.show_title {
            header = header.child(
                PreviewNode::new("h1")
                    .class(StyleScope::Title.class_name())
                    .styled(resolved_declarations(&style.title_style, StyleScope::Title))
                    .text(&form.title),
            );
        }
        if let Some(description) = description {
            header = header.child(
                PreviewNode::new("p")
                    .class(StyleScope::Description.class_name())
                    .styled(resolved_declarations(
                        &style.description_style,
                        StyleScope::Description,
                    ))
                    .text(description),
            );
        }
        container = container.child(header);
    }

    let mut body = PreviewNode::new(if mode == PreviewMode::Public { "form" } else { "div" })
        .class("form-body");

    if form.form_fields.is_empty() && mode == PreviewMode::Builder {
        body = body.child(PreviewNode::new("p").class("empty-canvas").text(EMPTY_CANVAS_HINT));
    }

    for field in &form.form_fields {
        let answer = response.and_then(|r| r.get(&field.id));
        let mut group = render_field(field, mode, answer);
        if selected == Some(field.id.as_str()) {
            group = group.attr("data-selected", "true");
        }
        body = body.child(group);
    }

    if mode == PreviewMode::Public {
        body = body.child(
            PreviewNode::new("div").class("form-actions").child(
                PreviewNode::new("button")
                    .attr("type", "submit")
                    .class(StyleScope::Button.class_name())
                    .styled(resolved_declarations(&style.button_style, StyleScope::Button))
                    .text("Submit"),
            ),
        );
    }

    tracing::debug!(
        form = %form.id,
        fields = form.form_fields.len(),
        ?mode,
        "preview rendered"
    );
    container.child(body)
}

/// Render one field group: label plus control.
pub fn render_field(field: &Field, mode: PreviewMode, answer: Option<&Answer>) -> PreviewNode {
    let inert = mode == PreviewMode::Builder;
    let mut group = PreviewNode::new("div")
        .class("form-group")
        .attr("data-field-id", &field.id);

    if field.label_visible() {
        let text = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.clone()
        };
        group = group.child(
            PreviewNode::new("label")
                .class(StyleScope::Label.class_name())
                .styled(resolved_declarations(&field.label_style, StyleScope::Label))
                .text(text),
        );
    }

    let control_style = resolved_declarations(&field.style, StyleScope::Field);
    // Builder shows the label as a hint when no placeholder is set.
    let placeholder = match (field.placeholder(), inert) {
        (Some(p), _) => Some(p.to_string()),
        (None, true) => Some(field.label.clone()),
        (None, false) => None,
    };
    let text_answer = match answer {
        Some(Answer::Text(s)) => s.as_str(),
        _ => "",
    };

    let control = match &field.field_type {
        FieldType::Textarea => {
            let mut node = control_node("textarea", field, inert, control_style);
            if let Some(p) = placeholder {
                node = node.attr("placeholder", p);
            }
            node.text(text_answer)
        }
        FieldType::Select => {
            let prompt = field.placeholder().unwrap_or("Select an option");
            let mut node = control_node("select", field, inert, control_style)
                .child(PreviewNode::new("option").attr("value", "").text(prompt));
            for option in &field.options {
                node = node.child(
                    PreviewNode::new("option")
                        .attr("value", &option.value)
                        .flag("selected", text_answer == option.value)
                        .text(&option.label),
                );
            }
            node
        }
        FieldType::Radio | FieldType::Checkbox => {
            let radio = field.field_type == FieldType::Radio;
            let (group_class, input_type) = if radio {
                ("radio-group", "radio")
            } else {
                ("checkbox-group", "checkbox")
            };
            let option_style = option_text_style(&field.style);
            let mut node = PreviewNode::new("div").class(group_class);
            for option in &field.options {
                let checked = match answer {
                    Some(Answer::Choices(chosen)) => chosen.contains(&option.value),
                    Some(Answer::Text(s)) => *s == option.value,
                    None => false,
                };
                node = node.child(
                    PreviewNode::new("label")
                        .class("choice")
                        .child(
                            PreviewNode::new("input")
                                .attr("type", input_type)
                                .attr("name", &field.id)
                                .attr("value", &option.value)
                                .flag("checked", checked)
                                .flag("required", radio && field.required && !inert)
                                .flag("disabled", inert),
                        )
                        .child(
                            PreviewNode::new("span")
                                .styled(option_style.clone())
                                .text(&option.label),
                        ),
                );
            }
            node
        }
        other => {
            let mut node =
                control_node("input", field, inert, control_style).attr("type", other.as_str());
            if let Some(p) = placeholder {
                node = node.attr("placeholder", p);
            }
            if !text_answer.is_empty() {
                node = node.attr("value", text_answer);
            }
            node
        }
    };

    group.child(control)
}

fn control_node(
    tag: &'static str,
    field: &Field,
    inert: bool,
    style: Vec<Declaration>,
) -> PreviewNode {
    PreviewNode::new(tag)
        .attr("id", &field.id)
        .attr("name", &field.id)
        .class(StyleScope::Field.class_name())
        .flag("required", field.required && !inert)
        .flag("disabled", inert)
        .styled(style)
}

/// Choice option text takes only the field's text color.
fn option_text_style(style: &dyn StyleSource) -> Vec<Declaration> {
    resolved_declarations(style, StyleScope::Field)
        .into_iter()
        .filter(|d| d.property == StyleAttribute::TextColor.css_property())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use formsmith_style::{AppearanceStyle, FormStyle, TextBlockStyle};
    use pretty_assertions::assert_eq;

    fn email_field() -> Field {
        let mut f = Field::new("1700000000000", FieldType::Email);
        f.label = "Work Email".into();
        f.required = true;
        f
    }

    fn form_with(fields: Vec<Field>) -> Form {
        let mut form = Form::new("f1", "Contact");
        form.description = Some("We reply fast".into());
        form.form_fields = fields;
        form
    }

    // =========================================================================
    // Builder mode
    // =========================================================================

    #[test]
    fn test_empty_canvas_hint() {
        let tree = render_form(&form_with(vec![]), PreviewMode::Builder);
        let hint = tree.find_by_class("empty-canvas").unwrap();
        assert_eq!(hint.text.as_deref(), Some(EMPTY_CANVAS_HINT));

        let public = render_form(&form_with(vec![]), PreviewMode::Public);
        assert!(public.find_by_class("empty-canvas").is_none());
    }

    #[test]
    fn test_builder_controls_inert() {
        let tree = render_form(&form_with(vec![email_field()]), PreviewMode::Builder);
        let input = tree.find(&|n| n.tag == "input").unwrap();
        assert!(input.has_attr("disabled"));
        assert!(!input.has_attr("required"));
        assert_eq!(input.get_attr("placeholder"), Some("Work Email"));
        assert!(tree.find(&|n| n.tag == "button").is_none());
    }

    #[test]
    fn test_canvas_marks_selection() {
        let mut builder = FormBuilder::new(form_with(vec![]));
        let at = chrono::Utc.timestamp_millis_opt(42).unwrap();
        builder.add_widget_at(FieldType::Text, 0, at).unwrap();
        let tree = render_canvas(&builder);
        let group = tree.find_by_class("form-group").unwrap();
        assert_eq!(group.get_attr("data-selected"), Some("true"));
        assert_eq!(group.get_attr("data-field-id"), Some("42"));
    }

    // =========================================================================
    // Public mode
    // =========================================================================

    #[test]
    fn test_public_controls_live() {
        let tree = render_form(&form_with(vec![email_field()]), PreviewMode::Public);
        assert_eq!(tree.children[1].tag, "form");
        let input = tree.find(&|n| n.tag == "input").unwrap();
        assert!(input.has_attr("required"));
        assert!(!input.has_attr("disabled"));
        assert_eq!(input.get_attr("type"), Some("email"));
        assert_eq!(input.get_attr("placeholder"), None);

        let label = tree.find(&|n| n.tag == "label").unwrap();
        assert_eq!(label.text.as_deref(), Some("Work Email *"));
    }

    #[test]
    fn test_submit_button_uses_button_style() {
        let mut form = form_with(vec![]);
        form.style = FormStyle {
            button_style: Some(AppearanceStyle::new().with(StyleAttribute::BackgroundColor, "#10b981")),
            ..Default::default()
        };
        let tree = render_form(&form, PreviewMode::Public);
        let button = tree.find(&|n| n.tag == "button").unwrap();
        assert_eq!(button.style_value("background-color"), Some("#10b981"));
        assert_eq!(button.style_value("color"), Some("#ffffff"));
        assert_eq!(button.style_value("padding"), Some("12px 24px"));
    }

    #[test]
    fn test_response_fills_controls() {
        let fields = vec![email_field(), Field::new("tags", FieldType::Checkbox)];
        let form = form_with(fields.clone());
        let mut response = FormResponse::new(&fields);
        response.set_text("1700000000000", "ada@example.com");
        response.toggle_choice("tags", "option-2", true);

        let tree = render_response(&form, &response);
        let input = tree.find(&|n| n.get_attr("type") == Some("email")).unwrap();
        assert_eq!(input.get_attr("value"), Some("ada@example.com"));
        let found = tree.find_all(&|n| n.has_attr("checked"));
        let checked: Vec<_> = found
            .iter()
            .filter_map(|n| n.get_attr("value"))
            .collect();
        assert_eq!(checked, vec!["option-2"]);
    }

    // =========================================================================
    // Header and styles
    // =========================================================================

    #[test]
    fn test_header_gating() {
        let mut form = form_with(vec![]);
        form.show_description = false;
        let tree = render_form(&form, PreviewMode::Public);
        assert!(tree.find_by_class("form-title").is_some());
        assert!(tree.find_by_class("form-description").is_none());

        form.show_title = false;
        let tree = render_form(&form, PreviewMode::Public);
        assert!(tree.find_by_class("form-header").is_none());

        form.show_description = true;
        form.description = Some(String::new());
        let tree = render_form(&form, PreviewMode::Public);
        assert!(tree.find_by_class("form-header").is_none());
    }

    #[test]
    fn test_field_style_defaults_applied() {
        let tree = render_form(&form_with(vec![email_field()]), PreviewMode::Public);
        let input = tree.find(&|n| n.tag == "input").unwrap();
        assert_eq!(input.style_value("border-color"), Some("#e5e7eb"));
        assert_eq!(input.style_value("border-width"), Some("1px"));
        assert_eq!(input.style_value("background-color"), None);
    }

    #[test]
    fn test_title_style_resolved() {
        let mut form = form_with(vec![]);
        form.style.title_style = Some(TextBlockStyle {
            font_size: Some("inherit".into()),
            text_color: Some("#111111".into()),
            ..Default::default()
        });
        let tree = render_form(&form, PreviewMode::Public);
        let title = tree.find_by_class("form-title").unwrap();
        assert_eq!(title.style_value("font-size"), Some("24px"));
        assert_eq!(title.style_value("color"), Some("#111111"));
    }

    #[test]
    fn test_hidden_label() {
        let mut f = email_field();
        f.show_label = Some(false);
        let tree = render_form(&form_with(vec![f]), PreviewMode::Public);
        assert!(tree.find(&|n| n.tag == "label").is_none());
    }
}
