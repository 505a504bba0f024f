//! Vue dialect: a single-file component using `v-model` bindings.

use formsmith_model::FieldType;
use formsmith_style::Declaration;

use crate::markup::{escape_html, js_style_object, Lines};
use crate::{css, Emitter, FieldContext, FormContext};

pub struct VueEmitter;

impl Emitter for VueEmitter {
    fn emit_form(&self, ctx: &FormContext<'_>) -> String {
        let mut out = Lines::new("  ");

        out.line(0, "<template>");
        out.line(1, "<div class=\"form-wrapper\">");
        out.line(
            2,
            &format!("<div class=\"form-container\"{}>", style_binding(&ctx.form)),
        );

        if ctx.has_header() {
            out.line(3, "<div class=\"form-header\">");
            if ctx.show_title {
                out.line(
                    4,
                    &format!(
                        "<h1 class=\"form-title\"{}>{}</h1>",
                        style_binding(&ctx.title_style),
                        escape_html(ctx.title)
                    ),
                );
            }
            if let Some(description) = ctx.description {
                out.line(
                    4,
                    &format!(
                        "<p class=\"form-description\"{}>{}</p>",
                        style_binding(&ctx.description_style),
                        escape_html(description)
                    ),
                );
            }
            out.line(3, "</div>");
        }

        out.line(3, "<form @submit.prevent=\"handleSubmit\">");
        for field in &ctx.fields {
            self.emit_field(field, &mut out, 4);
        }
        out.line(4, "<div class=\"form-actions\">");
        out.line(
            5,
            &format!(
                "<button type=\"submit\" class=\"submit-btn\"{}>Submit</button>",
                style_binding(&ctx.button)
            ),
        );
        out.line(4, "</div>");
        out.line(3, "</form>");
        out.line(2, "</div>");
        out.line(1, "</div>");
        out.line(0, "</template>");
        out.line(0, "");

        out.line(0, "<script>");
        out.line(0, "export default {");
        out.line(1, "name: 'GeneratedForm',");
        out.line(1, "data() {");
        out.line(2, "return {");
        out.line(3, "formData: {");
        for field in &ctx.fields {
            out.line(
                4,
                &format!("{}: {},", field.state_key(), field.initial_value()),
            );
        }
        out.line(3, "},");
        out.line(2, "};");
        out.line(1, "},");
        out.line(1, "methods: {");
        out.line(2, "handleSubmit() {");
        ctx.emit_required_group_check(&mut out, 3, "this.formData");
        out.line(3, "console.log('Form submitted:', { ...this.formData });");
        out.line(2, "},");
        out.line(1, "},");
        out.line(0, "};");
        out.line(0, "</script>");
        out.line(0, "");

        out.line(0, "<style scoped>");
        out.raw(&css::stylesheet(""));
        out.line(0, "</style>");
        out.finish()
    }

    fn emit_field(&self, ctx: &FieldContext<'_>, out: &mut Lines, depth: usize) {
        let field = ctx.field;
        let id = escape_html(ctx.id());
        let model = format!(" v-model=\"{}\"", attr_expr(&format!("formData[{}]", ctx.state_key())));
        let required = if field.required { " required" } else { "" };
        let control_style = style_binding(&ctx.control);
        let placeholder = field
            .placeholder()
            .map(|p| format!(" placeholder=\"{}\"", escape_html(p)))
            .unwrap_or_default();
        let is_group = matches!(field.field_type, FieldType::Radio | FieldType::Checkbox);

        out.line(depth, "<div class=\"form-group\">");

        if field.label_visible() {
            let target = if is_group {
                String::new()
            } else {
                format!(" for=\"{id}\"")
            };
            out.line(
                depth + 1,
                &format!(
                    "<label{target} class=\"form-label\"{}>{}</label>",
                    style_binding(&ctx.label),
                    escape_html(&ctx.label_text())
                ),
            );
        }

        match &field.field_type {
            FieldType::Textarea => {
                out.line(
                    depth + 1,
                    &format!(
                        "<textarea id=\"{id}\" name=\"{id}\" class=\"form-control\"{control_style}{placeholder}{model}{required}></textarea>"
                    ),
                );
            }
            FieldType::Select => {
                out.line(
                    depth + 1,
                    &format!(
                        "<select id=\"{id}\" name=\"{id}\" class=\"form-control\"{control_style}{model}{required}>"
                    ),
                );
                let prompt = field.placeholder().unwrap_or("Select an option");
                out.line(
                    depth + 2,
                    &format!("<option value=\"\">{}</option>", escape_html(prompt)),
                );
                for option in &field.options {
                    out.line(
                        depth + 2,
                        &format!(
                            "<option value=\"{}\">{}</option>",
                            escape_html(&option.value),
                            escape_html(&option.label)
                        ),
                    );
                }
                out.line(depth + 1, "</select>");
            }
            FieldType::Radio | FieldType::Checkbox => {
                let radio = field.field_type == FieldType::Radio;
                let (group, input_type) = if radio {
                    ("radio-group", "radio")
                } else {
                    ("checkbox-group", "checkbox")
                };
                let required = if radio { required } else { "" };
                let text_style = style_binding(&ctx.option_text);

                out.line(depth + 1, &format!("<div class=\"{group}\">"));
                for option in &field.options {
                    out.line(depth + 2, "<label class=\"choice\">");
                    out.line(
                        depth + 3,
                        &format!(
                            "<input type=\"{input_type}\" name=\"{id}\" value=\"{}\"{model}{required}>",
                            escape_html(&option.value)
                        ),
                    );
                    out.line(
                        depth + 3,
                        &format!("<span{text_style}>{}</span>", escape_html(&option.label)),
                    );
                    out.line(depth + 2, "</label>");
                }
                out.line(depth + 1, "</div>");
            }
            other => {
                out.line(
                    depth + 1,
                    &format!(
                        "<input type=\"{}\" id=\"{id}\" name=\"{id}\" class=\"form-control\"{control_style}{placeholder}{model}{required}>",
                        escape_html(other.as_str())
                    ),
                );
            }
        }

        out.line(depth, "</div>");
    }
}

/// Escape a JS expression for a double-quoted template attribute.
fn attr_expr(expr: &str) -> String {
    expr.replace('&', "&amp;").replace('"', "&quot;")
}

fn style_binding(decls: &[Declaration]) -> String {
    if decls.is_empty() {
        String::new()
    } else {
        format!(" :style=\"{}\"", attr_expr(&js_style_object(decls)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate, Dialect};
    use formsmith_model::Field;
    use formsmith_style::{AppearanceStyle, FormStyle, StyleAttribute};
    use pretty_assertions::assert_eq;

    fn sfc(fields: &[Field]) -> String {
        generate(fields, &FormStyle::default(), "Survey", "Hello", true, true, Dialect::Vue).unwrap()
    }

    #[test]
    fn test_component_sections() {
        let out = sfc(&[]);
        assert!(out.starts_with("<template>\n"));
        assert!(out.contains("\n<script>\nexport default {\n  name: 'GeneratedForm',\n"));
        assert!(out.contains("<style scoped>\n.form-wrapper {\n"));
        assert!(out.ends_with("</style>\n"));
    }

    #[test]
    fn test_data_initial_values() {
        let out = sfc(&[
            Field::new("name", FieldType::Text),
            Field::new("tags", FieldType::Checkbox),
        ]);
        assert!(out.contains("formData: {\n        'name': '',\n        'tags': [],\n      },"));
    }

    #[test]
    fn test_v_model_bindings() {
        let mut f = Field::new("1700000000000", FieldType::Email);
        f.required = true;
        let out = sfc(&[f, Field::new("tags", FieldType::Checkbox)]);
        assert!(out.contains(
            "<input type=\"email\" id=\"1700000000000\" name=\"1700000000000\" class=\"form-control\" v-model=\"formData['1700000000000']\" required>"
        ));
        assert!(out.contains(
            "<input type=\"checkbox\" name=\"tags\" value=\"option-2\" v-model=\"formData['tags']\">"
        ));
    }

    #[test]
    fn test_submit_only_logs() {
        let out = sfc(&[]);
        assert!(out.contains("<form @submit.prevent=\"handleSubmit\">"));
        assert!(out.contains("console.log('Form submitted:', { ...this.formData });"));
        assert!(!out.contains("fetch("));
    }

    #[test]
    fn test_style_binding_escapes_quotes() {
        let style = AppearanceStyle::new().with(StyleAttribute::FontFamily, "\"Inter\", sans-serif");
        assert_eq!(
            style_binding(&formsmith_style::defaults::explicit_declarations(
                &style,
                formsmith_style::StyleScope::Field
            )),
            " :style=\"{ fontFamily: '&quot;Inter&quot;, sans-serif' }\""
        );
    }
}
