//! Formsmith Preview
//!
//! Interprets a form directly into an element tree with resolved styles, for
//! the builder canvas and the published form. Nothing here generates source
//! code; it resolves the same defaults table the code generator compiles from.
//!
//! ```
//! use formsmith_model::{Field, FieldType, Form};
//! use formsmith_preview::{render_form, PreviewMode};
//!
//! let mut form = Form::new("f1", "Contact");
//! form.form_fields.push(Field::new("email", FieldType::Email));
//!
//! let tree = render_form(&form, PreviewMode::Public);
//! let input = tree.find(&|n| n.tag == "input").unwrap();
//! assert_eq!(input.style_value("border-width"), Some("1px"));
//! ```

pub mod node;
pub mod render;

pub use node::PreviewNode;
pub use render::{
    render_canvas, render_field, render_form, render_response, PreviewMode, EMPTY_CANVAS_HINT,
};

use formsmith_model::Form;
use formsmith_style::layout::{layout_stylesheet, push_rule};
use formsmith_style::Declaration;

/// Page chrome the exported code leaves to its host.
const PAGE_RULES: &[(&str, &[(&str, &str)])] = &[
    (
        "body",
        &[
            ("margin", "0"),
            ("padding", "40px 16px"),
            ("background", "#f9fafb"),
            ("font-family", "system-ui, sans-serif"),
        ],
    ),
    (
        ".empty-canvas",
        &[("text-align", "center"), ("color", "#9ca3af"), ("padding", "48px 0")],
    ),
];

/// Layout rules for a standalone preview page. Appearance is inline.
fn page_css(indent: &str) -> String {
    let mut css = String::new();
    for (selector, props) in PAGE_RULES {
        let decls: Vec<Declaration> = props
            .iter()
            .map(|&(p, v)| Declaration::new(p, v))
            .collect();
        push_rule(&mut css, indent, selector, &decls);
    }
    css.push_str(&layout_stylesheet(indent));
    css
}

/// Render `form` as a standalone HTML page.
pub fn render_page(form: &Form, mode: PreviewMode) -> String {
    let tree = PreviewNode::new("div")
        .class("form-wrapper")
        .child(render_form(form, mode));
    let title = if form.title.is_empty() { "Form" } else { form.title.as_str() };
    let mut body = String::new();
    for line in tree.to_html().lines() {
        body.push_str("  ");
        body.push_str(line);
        body.push('\n');
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n  <title>{} (preview)</title>\n  <style>\n{}  </style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title.replace('&', "&amp;").replace('<', "&lt;"),
        page_css("    ")
    )
}
