//! Fixed layout rules: widths, stacking and spacing between parts.
//!
//! These never depend on a form's style. Exported code and the preview page
//! both render them from [`LAYOUT_RULES`].

use crate::Declaration;

pub const LAYOUT_RULES: &[(&str, &[(&str, &str)])] = &[
    (
        ".form-wrapper",
        &[("max-width", "42rem"), ("margin", "0 auto")],
    ),
    (
        ".form-header",
        &[("text-align", "center"), ("margin-bottom", "32px")],
    ),
    (".form-title", &[("font-weight", "bold")]),
    (".form-group", &[("margin-bottom", "24px")]),
    (
        ".form-label",
        &[
            ("display", "block"),
            ("margin-bottom", "8px"),
            ("font-weight", "500"),
        ],
    ),
    (
        ".form-control",
        &[("width", "100%"), ("box-sizing", "border-box"), ("outline", "none")],
    ),
    ("textarea.form-control", &[("min-height", "80px"), ("resize", "vertical")]),
    (
        ".radio-group, .checkbox-group",
        &[
            ("display", "flex"),
            ("flex-direction", "column"),
            ("gap", "8px"),
        ],
    ),
    (
        ".choice",
        &[
            ("display", "flex"),
            ("align-items", "center"),
            ("gap", "8px"),
        ],
    ),
    ("form .form-actions", &[("margin-top", "32px")]),
    ("form .submit-btn", &[("width", "100%"), ("cursor", "pointer")]),
];

/// Append `selector { ... }` to `css`, each line prefixed by `indent`.
pub fn push_rule(css: &mut String, indent: &str, selector: &str, decls: &[Declaration]) {
    css.push_str(&format!("{indent}{selector} {{\n"));
    for d in decls {
        css.push_str(&format!("{indent}  {}: {};\n", d.property, d.value));
    }
    css.push_str(&format!("{indent}}}\n"));
}

/// Render every layout rule.
pub fn layout_stylesheet(indent: &str) -> String {
    let mut css = String::new();
    for (selector, props) in LAYOUT_RULES {
        let decls: Vec<Declaration> = props
            .iter()
            .map(|&(p, v)| Declaration::new(p, v))
            .collect();
        push_rule(&mut css, indent, selector, &decls);
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_rule() {
        let mut css = String::new();
        push_rule(&mut css, "  ", ".a", &[Declaration::new("color", "red")]);
        assert_eq!(css, "  .a {\n    color: red;\n  }\n");
    }

    #[test]
    fn test_layout_stylesheet_has_every_rule() {
        let css = layout_stylesheet("");
        for (selector, _) in LAYOUT_RULES {
            assert!(css.contains(&format!("{selector} {{\n")), "{selector}");
        }
        assert!(css.contains("textarea.form-control {\n  min-height: 80px;\n  resize: vertical;\n}\n"));
    }
}
