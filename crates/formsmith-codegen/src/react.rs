//! React dialect: one function component with local state per field.

use formsmith_model::FieldType;
use formsmith_style::Declaration;

use crate::markup::{escape_html, js_string, js_style_object, Lines};
use crate::{css, Emitter, FieldContext, FormContext};

pub struct ReactEmitter;

impl Emitter for ReactEmitter {
    fn emit_form(&self, ctx: &FormContext<'_>) -> String {
        let mut out = Lines::new("  ");

        out.line(0, "import React, { useState } from 'react';");
        out.line(0, "");
        out.line(0, "const formStyles = `");
        out.raw(&css::stylesheet("  "));
        out.line(0, "`;");
        out.line(0, "");
        out.line(0, "export default function GeneratedForm() {");

        out.line(1, "const [formData, setFormData] = useState({");
        for field in &ctx.fields {
            out.line(
                2,
                &format!("{}: {},", field.state_key(), field.initial_value()),
            );
        }
        out.line(1, "});");
        out.line(0, "");

        out.line(1, "const handleChange = (event) => {");
        out.line(2, "const { name, value, type, checked } = event.target;");
        out.line(2, "if (type === 'checkbox') {");
        out.line(3, "setFormData((prev) => {");
        out.line(4, "const current = prev[name] || [];");
        out.line(4, "return {");
        out.line(5, "...prev,");
        out.line(
            5,
            "[name]: checked ? [...current, value] : current.filter((item) => item !== value),",
        );
        out.line(4, "};");
        out.line(3, "});");
        out.line(2, "} else {");
        out.line(3, "setFormData((prev) => ({ ...prev, [name]: value }));");
        out.line(2, "}");
        out.line(1, "};");
        out.line(0, "");

        out.line(1, "const handleSubmit = (event) => {");
        out.line(2, "event.preventDefault();");
        ctx.emit_required_group_check(&mut out, 2, "formData");
        out.line(2, "console.log('Form submitted:', formData);");
        out.line(1, "};");
        out.line(0, "");

        out.line(1, "return (");
        out.line(2, "<div className=\"form-wrapper\">");
        out.line(3, "<style>{formStyles}</style>");
        out.line(
            3,
            &format!("<div className=\"form-container\"{}>", style_prop(&ctx.form)),
        );

        if ctx.has_header() {
            out.line(4, "<div className=\"form-header\">");
            if ctx.show_title {
                out.line(
                    5,
                    &format!(
                        "<h1 className=\"form-title\"{}>{}</h1>",
                        style_prop(&ctx.title_style),
                        escape_html(ctx.title)
                    ),
                );
            }
            if let Some(description) = ctx.description {
                out.line(
                    5,
                    &format!(
                        "<p className=\"form-description\"{}>{}</p>",
                        style_prop(&ctx.description_style),
                        escape_html(description)
                    ),
                );
            }
            out.line(4, "</div>");
        }

        out.line(4, "<form onSubmit={handleSubmit}>");
        for field in &ctx.fields {
            self.emit_field(field, &mut out, 5);
        }
        out.line(5, "<div className=\"form-actions\">");
        out.line(
            6,
            &format!(
                "<button type=\"submit\" className=\"submit-btn\"{}>Submit</button>",
                style_prop(&ctx.button)
            ),
        );
        out.line(5, "</div>");
        out.line(4, "</form>");
        out.line(3, "</div>");
        out.line(2, "</div>");
        out.line(1, ");");
        out.line(0, "}");
        out.finish()
    }

    fn emit_field(&self, ctx: &FieldContext<'_>, out: &mut Lines, depth: usize) {
        let field = ctx.field;
        let id = escape_html(ctx.id());
        let key = ctx.state_key();
        let required = if field.required { " required" } else { "" };
        let control_style = style_prop(&ctx.control);
        let placeholder = field
            .placeholder()
            .map(|p| format!(" placeholder=\"{}\"", escape_html(p)))
            .unwrap_or_default();
        let is_group = matches!(field.field_type, FieldType::Radio | FieldType::Checkbox);

        out.line(depth, "<div className=\"form-group\">");

        if field.label_visible() {
            let target = if is_group {
                String::new()
            } else {
                format!(" htmlFor=\"{id}\"")
            };
            out.line(
                depth + 1,
                &format!(
                    "<label{target} className=\"form-label\"{}>{}</label>",
                    style_prop(&ctx.label),
                    escape_html(&ctx.label_text())
                ),
            );
        }

        let bound = format!("value={{formData[{key}]}} onChange={{handleChange}}");

        match &field.field_type {
            FieldType::Textarea => {
                out.line(
                    depth + 1,
                    &format!(
                        "<textarea id=\"{id}\" name=\"{id}\" className=\"form-control\"{control_style}{placeholder} {bound}{required} />"
                    ),
                );
            }
            FieldType::Select => {
                out.line(
                    depth + 1,
                    &format!(
                        "<select id=\"{id}\" name=\"{id}\" className=\"form-control\"{control_style} {bound}{required}>"
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
                let group = if radio { "radio-group" } else { "checkbox-group" };
                let text_style = style_prop(&ctx.option_text);

                out.line(depth + 1, &format!("<div className=\"{group}\">"));
                for option in &field.options {
                    let value = js_string(&option.value);
                    let (input_type, checked, required) = if radio {
                        ("radio", format!("formData[{key}] === {value}"), required)
                    } else {
                        ("checkbox", format!("formData[{key}].includes({value})"), "")
                    };
                    out.line(depth + 2, "<label className=\"choice\">");
                    out.line(
                        depth + 3,
                        &format!(
                            "<input type=\"{input_type}\" name=\"{id}\" value=\"{}\" checked={{{checked}}} onChange={{handleChange}}{required} />",
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
                        "<input type=\"{}\" id=\"{id}\" name=\"{id}\" className=\"form-control\"{control_style}{placeholder} {bound}{required} />",
                        escape_html(other.as_str())
                    ),
                );
            }
        }

        out.line(depth, "</div>");
    }
}

fn style_prop(decls: &[Declaration]) -> String {
    if decls.is_empty() {
        String::new()
    } else {
        format!(" style={{{}}}", js_style_object(decls))
    }
}
