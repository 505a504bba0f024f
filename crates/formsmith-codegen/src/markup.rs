//! Escaping and style-declaration rendering shared by the dialects.

use formsmith_style::Declaration;

/// Escape text for HTML content and double-quoted attributes.
///
/// Braces are escaped too so the same text is safe in JSX and Vue templates.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Single-quoted JS string literal, safe inside a `<script>` block.
pub fn js_string(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('<', "\\x3C");
    format!("'{escaped}'")
}

/// `color: #333; padding: 4px`
pub fn css_inline(decls: &[Declaration]) -> String {
    decls
        .iter()
        .map(|d| format!("{}: {}", d.property, d.value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// `{ color: '#333', padding: '4px' }`
pub fn js_style_object(decls: &[Declaration]) -> String {
    let parts: Vec<String> = decls
        .iter()
        .map(|d| format!("{}: {}", d.js_property(), js_string(&d.value)))
        .collect();
    format!("{{ {} }}", parts.join(", "))
}

/// Indented line writer.
pub struct Lines {
    out: String,
    unit: &'static str,
}

impl Lines {
    pub fn new(unit: &'static str) -> Self {
        Self {
            out: String::new(),
            unit,
        }
    }

    pub fn line(&mut self, depth: usize, text: &str) {
        if text.is_empty() {
            self.out.push('\n');
            return;
        }
        self.out.push_str(&self.unit.repeat(depth));
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Append pre-indented text verbatim.
    pub fn raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape_html("{x}"), "&#123;x&#125;");
        assert_eq!(escape_html("Work Email *"), "Work Email *");
    }

    #[test]
    fn test_js_string() {
        assert_eq!(js_string("it's"), "'it\\'s'");
        assert_eq!(js_string("a\\b"), "'a\\\\b'");
        assert_eq!(js_string("</script>"), "'\\x3C/script>'");
    }

    #[test]
    fn test_css_inline() {
        let decls = vec![
            Declaration::new("color", "#333"),
            Declaration::new("border-width", "2px"),
        ];
        assert_eq!(css_inline(&decls), "color: #333; border-width: 2px");
        assert_eq!(css_inline(&[]), "");
    }

    #[test]
    fn test_js_style_object() {
        let decls = vec![
            Declaration::new("background-color", "#fff"),
            Declaration::new("box-shadow", "0 1px 2px rgba(0, 0, 0, 0.1)"),
        ];
        assert_eq!(
            js_style_object(&decls),
            "{ backgroundColor: '#fff', boxShadow: '0 1px 2px rgba(0, 0, 0, 0.1)' }"
        );
    }

    #[test]
    fn test_lines() {
        let mut lines = Lines::new("  ");
        lines.line(0, "<div>");
        lines.line(1, "<span>x</span>");
        lines.line(0, "");
        lines.line(0, "</div>");
        assert_eq!(lines.finish(), "<div>\n  <span>x</span>\n\n</div>\n");
    }
}
