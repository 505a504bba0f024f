//! WASM bindings for Formsmith.
//!
//! Exposes export generation, preview rendering, style normalization and the
//! shorthand editing helpers to the browser UI via wasm-bindgen.

use formsmith_codegen::{export_file_name, generate_form, Dialect};
use formsmith_model::{parse_form_style, Form};
use formsmith_preview::{render_page, PreviewMode};
use formsmith_style::{LengthUnit, Side, SpacingEditor};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Generate export code for a form document.
///
/// `form` is the stored document as a plain object. Returns
/// `{ code: string, fileName: string }`. Throws if the document is malformed
/// or generation fails.
#[wasm_bindgen]
pub fn generate(form: JsValue, dialect: &str) -> Result<JsValue, JsError> {
    let value: serde_json::Value =
        serde_wasm_bindgen::from_value(form).map_err(|e| JsError::new(&e.to_string()))?;
    let form = Form::from_value(value).map_err(|e| JsError::new(&e.to_string()))?;
    let (code, file_name) = export(&form, dialect).map_err(|e| JsError::new(&e))?;

    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"code".into(), &code.into())
        .map_err(|_| JsError::new("Failed to set code property"))?;
    js_sys::Reflect::set(&js_obj, &"fileName".into(), &file_name.into())
        .map_err(|_| JsError::new("Failed to set fileName property"))?;

    Ok(js_obj.into())
}

/// Generate export code from a JSON-encoded form document.
#[wasm_bindgen(js_name = generateJson)]
pub fn generate_json(form_json: &str, dialect: &str) -> Result<String, JsError> {
    let form = Form::from_json(form_json).map_err(|e| JsError::new(&e.to_string()))?;
    export(&form, dialect)
        .map(|(code, _)| code)
        .map_err(|e| JsError::new(&e))
}

/// Render a standalone preview page. `mode` is `"builder"` or `"public"`.
#[wasm_bindgen(js_name = previewHtml)]
pub fn preview_html(form_json: &str, mode: &str) -> Result<String, JsError> {
    let form = Form::from_json(form_json).map_err(|e| JsError::new(&e.to_string()))?;
    let mode = preview_mode(mode).map_err(|e| JsError::new(&e))?;
    Ok(render_page(&form, mode))
}

/// Normalize a stored `style` column (object, JSON string, or null) into a
/// style object. Never throws on malformed style data.
#[wasm_bindgen(js_name = normalizeStyle)]
pub fn normalize_style(style: JsValue) -> Result<JsValue, JsError> {
    let value: serde_json::Value = serde_wasm_bindgen::from_value(style).unwrap_or_default();
    parse_form_style(&value)
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Set one side of a shorthand and return the new compressed value.
#[wasm_bindgen(js_name = setShorthandSide)]
pub fn set_shorthand_side(
    value: &str,
    linked: bool,
    side: &str,
    magnitude: f64,
) -> Result<String, JsError> {
    let side = Side::from_name(side).ok_or_else(|| JsError::new(&format!("unknown side '{side}'")))?;
    Ok(edit_side(value, linked, side, magnitude))
}

/// Change the unit of a shorthand, keeping magnitudes.
#[wasm_bindgen(js_name = setShorthandUnit)]
pub fn set_shorthand_unit(value: &str, unit: &str) -> String {
    SpacingEditor::from_value(value).set_unit(LengthUnit::parse(unit))
}

/// Check a color against the accepted hex, rgb(a) and hsl(a) forms.
#[wasm_bindgen(js_name = isValidColor)]
pub fn is_valid_color(color: &str) -> bool {
    formsmith_style::is_valid_color(color)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn export(form: &Form, dialect: &str) -> Result<(String, String), String> {
    let dialect: Dialect = dialect.parse().map_err(|e: formsmith_codegen::CodegenError| e.to_string())?;
    let code = generate_form(form, dialect).map_err(|e| e.to_string())?;
    Ok((code, export_file_name(&form.title, dialect)))
}

fn preview_mode(mode: &str) -> Result<PreviewMode, String> {
    match mode {
        "builder" => Ok(PreviewMode::Builder),
        "public" => Ok(PreviewMode::Public),
        other => Err(format!("unknown preview mode '{other}'")),
    }
}

fn edit_side(value: &str, linked: bool, side: Side, magnitude: f64) -> String {
    let mut editor = SpacingEditor::from_value(value);
    if editor.is_linked() != linked {
        editor.toggle_linked();
    }
    editor.set_side(side, magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Native tests (non-WASM): exercise the paths behind each binding
    // =========================================================================

    const CONTACT: &str = r##"{
        "id": "f1",
        "title": "Contact Us",
        "form_fields": [
            {"id": "1700000000000", "label": "Work Email", "type": "email",
             "required": true, "placeholder": "you@company.com"}
        ],
        "style": "{\"backgroundColor\":\"#ffffff\",\"padding\":\"24px\"}"
    }"##;

    fn contact() -> Form {
        Form::from_json(CONTACT).unwrap()
    }

    #[test]
    fn test_export_html() {
        let (code, file_name) = export(&contact(), "html").unwrap();
        assert_eq!(file_name, "contact-us-form.html");
        assert!(code.contains("type=\"email\""));
        assert!(code.contains(">Work Email *</label>"));
        assert!(code.contains("style=\"background-color: #ffffff; padding: 24px\""));
    }

    #[test]
    fn test_export_react() {
        let (code, file_name) = export(&contact(), "react").unwrap();
        assert_eq!(file_name, "contact-us-form.jsx");
        assert!(code.contains("useState"));
    }

    #[test]
    fn test_export_unknown_dialect() {
        let err = export(&contact(), "svelte").unwrap_err();
        assert_eq!(err, "Codegen error: unknown dialect 'svelte'");
    }

    #[test]
    fn test_preview_mode() {
        assert_eq!(preview_mode("builder"), Ok(PreviewMode::Builder));
        assert!(preview_mode("edit").is_err());
    }

    #[test]
    fn test_preview_page() {
        let page = render_page(&contact(), PreviewMode::Builder);
        assert!(page.contains("disabled"));
    }

    #[test]
    fn test_edit_side_unlinked() {
        assert_eq!(edit_side("10px", false, Side::Right, 5.0), "10px 5px 10px 10px");
    }

    #[test]
    fn test_edit_side_linked() {
        assert_eq!(edit_side("4px 8px", true, Side::Top, 6.0), "6px");
    }

    #[test]
    fn test_set_unit() {
        assert_eq!(set_shorthand_unit("8px 12px", "rem"), "8rem 12rem");
    }

    #[test]
    fn test_color_validation() {
        assert!(is_valid_color("#fff"));
        assert!(!is_valid_color("blue-ish"));
    }

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
        assert!(v.contains('.'));
    }

    #[test]
    fn test_multiple_exports_independent() {
        let mut other = contact();
        other.title = "Other".into();
        other.form_fields.clear();
        let (a, _) = export(&contact(), "vue").unwrap();
        let (b, _) = export(&other, "vue").unwrap();
        assert!(a.contains("1700000000000"));
        assert!(!b.contains("1700000000000"));
    }
}
