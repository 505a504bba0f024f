//! Static HTML dialect.
//!
//! Emits one self-contained document: markup, the shared stylesheet in a
//! `<style>` block, and a small script that collects the answers on submit and
//! logs them to the console.

use formsmith_model::FieldType;
use formsmith_style::Declaration;

use crate::markup::{css_inline, escape_html, js_string, Lines};
use crate::{css, Emitter, FieldContext, FormContext};

pub struct HtmlEmitter;

const FORM_ID: &str = "generated-form";

impl Emitter for HtmlEmitter {
    fn emit_form(&self, ctx: &FormContext<'_>) -> String {
        let mut out = Lines::new("  ");
        let page_title = if ctx.title.is_empty() { "Form" } else { ctx.title };

        out.line(0, "<!DOCTYPE html>");
        out.line(0, "<html lang=\"en\">");
        out.line(0, "<head>");
        out.line(1, "<meta charset=\"UTF-8\">");
        out.line(
            1,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">",
        );
        out.line(1, &format!("<title>{}</title>", escape_html(page_title)));
        out.line(1, "<style>");
        out.line(
            2,
            "body { margin: 0; padding: 40px 16px; background: #f9fafb; font-family: system-ui, sans-serif; }",
        );
        out.raw(&css::stylesheet("    "));
        out.line(1, "</style>");
        out.line(0, "</head>");
        out.line(0, "<body>");
        out.line(1, "<div class=\"form-wrapper\">");
        out.line(
            2,
            &format!("<div class=\"form-container\"{}>", style_attr(&ctx.form)),
        );

        if ctx.has_header() {
            out.line(3, "<div class=\"form-header\">");
            if ctx.show_title {
                out.line(
                    4,
                    &format!(
                        "<h1 class=\"form-title\"{}>{}</h1>",
                        style_attr(&ctx.title_style),
                        escape_html(ctx.title)
                    ),
                );
            }
            if let Some(description) = ctx.description {
                out.line(
                    4,
                    &format!(
                        "<p class=\"form-description\"{}>{}</p>",
                        style_attr(&ctx.description_style),
                        escape_html(description)
                    ),
                );
            }
            out.line(3, "</div>");
        }

        out.line(3, &format!("<form id=\"{FORM_ID}\">"));
        for field in &ctx.fields {
            self.emit_field(field, &mut out, 4);
        }
        out.line(4, "<div class=\"form-actions\">");
        out.line(
            5,
            &format!(
                "<button type=\"submit\" class=\"submit-btn\"{}>Submit</button>",
                style_attr(&ctx.button)
            ),
        );
        out.line(4, "</div>");
        out.line(3, "</form>");
        out.line(2, "</div>");
        out.line(1, "</div>");

        emit_script(ctx, &mut out);

        out.line(0, "</body>");
        out.line(0, "</html>");
        out.finish()
    }

    fn emit_field(&self, ctx: &FieldContext<'_>, out: &mut Lines, depth: usize) {
        let field = ctx.field;
        let id = escape_html(ctx.id());
        let required = if field.required { " required" } else { "" };
        let control_style = style_attr(&ctx.control);
        let placeholder = field
            .placeholder()
            .map(|p| format!(" placeholder=\"{}\"", escape_html(p)))
            .unwrap_or_default();

        out.line(depth, "<div class=\"form-group\">");

        if field.label_visible() {
            let target = if field.field_type.is_multi_choice() || field.field_type == FieldType::Radio {
                String::new()
            } else {
                format!(" for=\"{id}\"")
            };
            out.line(
                depth + 1,
                &format!(
                    "<label{target} class=\"form-label\"{}>{}</label>",
                    style_attr(&ctx.label),
                    escape_html(&ctx.label_text())
                ),
            );
        }

        match &field.field_type {
            FieldType::Textarea => {
                out.line(
                    depth + 1,
                    &format!(
                        "<textarea id=\"{id}\" name=\"{id}\" class=\"form-control\"{control_style}{placeholder}{required}></textarea>"
                    ),
                );
            }
            FieldType::Select => {
                out.line(
                    depth + 1,
                    &format!(
                        "<select id=\"{id}\" name=\"{id}\" class=\"form-control\"{control_style}{required}>"
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
                let (group, input_type) = if field.field_type == FieldType::Radio {
                    ("radio-group", "radio")
                } else {
                    ("checkbox-group", "checkbox")
                };
                // Browsers would demand every box be checked; required
                // checkbox groups are enforced by the submit script instead.
                let required = if field.field_type == FieldType::Radio { required } else { "" };
                let text_style = style_attr(&ctx.option_text);

                out.line(depth + 1, &format!("<div class=\"{group}\">"));
                for option in &field.options {
                    out.line(depth + 2, "<label class=\"choice\">");
                    out.line(
                        depth + 3,
                        &format!(
                            "<input type=\"{input_type}\" name=\"{id}\" value=\"{}\"{required}>",
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
                        "<input type=\"{}\" id=\"{id}\" name=\"{id}\" class=\"form-control\"{control_style}{placeholder}{required}>",
                        escape_html(other.as_str())
                    ),
                );
            }
        }

        out.line(depth, "</div>");
    }
}

fn style_attr(decls: &[Declaration]) -> String {
    if decls.is_empty() {
        String::new()
    } else {
        format!(" style=\"{}\"", escape_html(&css_inline(decls)))
    }
}

fn emit_script(ctx: &FormContext<'_>, out: &mut Lines) {
    out.line(1, "<script>");
    out.line(2, "const fields = [");
    for field in &ctx.fields {
        out.line(
            3,
            &format!(
                "{{ id: {}, label: {}, multiple: {}, required: {} }},",
                js_string(field.id()),
                js_string(&field.field.label),
                field.field.field_type.is_multi_choice(),
                field.field.required
            ),
        );
    }
    out.line(2, "];");
    out.line(0, "");
    out.line(
        2,
        &format!(
            "document.getElementById('{FORM_ID}').addEventListener('submit', function (event) {{"
        ),
    );
    out.line(3, "event.preventDefault();");
    out.line(3, "const formData = new FormData(event.target);");
    out.line(3, "const data = {};");
    out.line(3, "for (const field of fields) {");
    out.line(
        4,
        "data[field.id] = field.multiple ? formData.getAll(field.id) : (formData.get(field.id) || '');",
    );
    out.line(3, "}");
    out.line(3, "const missing = fields.find(function (field) {");
    out.line(4, "return field.required && field.multiple && data[field.id].length === 0;");
    out.line(3, "});");
    out.line(3, "if (missing) {");
    out.line(4, "alert('Please fill in: ' + missing.label);");
    out.line(4, "return;");
    out.line(3, "}");
    out.line(3, "console.log('Form submitted:', data);");
    out.line(3, "alert('Form submitted! Check the console for the data.');");
    out.line(2, "});");
    out.line(1, "</script>");
}
