//! Stylesheet shared by every dialect.
//!
//! Style-model defaults come from the defaults table, one rule per scope.
//! Layout rules (widths, stacking) are fixed. Inline styles written on
//! elements only carry what the user explicitly set, so the effective value of
//! an attribute is always "inline if set, otherwise this stylesheet".

use formsmith_style::defaults::{default_declarations, explicit_declarations};
use formsmith_style::layout::{layout_stylesheet, push_rule};
use formsmith_style::{Declaration, StyleScope, StyleSource};

/// Scopes that get a default rule, in stylesheet order.
const STYLED_SCOPES: [StyleScope; 6] = [
    StyleScope::Form,
    StyleScope::Title,
    StyleScope::Description,
    StyleScope::Label,
    StyleScope::Field,
    StyleScope::Button,
];

/// Render the stylesheet with each line prefixed by `indent`.
pub fn stylesheet(indent: &str) -> String {
    let mut css = layout_stylesheet(indent);

    for scope in STYLED_SCOPES {
        let decls = default_declarations(scope);
        if decls.is_empty() {
            continue;
        }
        push_rule(&mut css, indent, &format!(".{}", scope.class_name()), &decls);
    }

    css
}

/// What a browser computes for `scope` from the stylesheet plus inline styles.
pub fn effective_declarations(source: &dyn StyleSource, scope: StyleScope) -> Vec<Declaration> {
    let mut decls = default_declarations(scope);
    for inline in explicit_declarations(source, scope) {
        match decls.iter_mut().find(|d| d.property == inline.property) {
            Some(existing) => existing.value = inline.value,
            None => decls.push(inline),
        }
    }
    decls
}
