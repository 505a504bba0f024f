//! Element tree produced by the renderer.

use formsmith_style::Declaration;

const VOID_TAGS: &[&str] = &["input", "br", "hr", "img", "meta"];

/// One element of the rendered preview.
///
/// Styles are kept as resolved declarations rather than a string so callers
/// can inspect exactly what will be painted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreviewNode {
    pub tag: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub style: Vec<Declaration>,
    pub text: Option<String>,
    pub children: Vec<PreviewNode>,
}

impl PreviewNode {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Boolean attribute, added only when `on`.
    pub fn flag(self, name: &'static str, on: bool) -> Self {
        if on {
            self.attr(name, "")
        } else {
            self
        }
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn styled(mut self, style: Vec<Declaration>) -> Self {
        self.style = style;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: PreviewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    /// Resolved value of a CSS property on this node.
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Depth-first search, this node included.
    pub fn find(&self, pred: &dyn Fn(&PreviewNode) -> bool) -> Option<&PreviewNode> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }

    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&PreviewNode) -> bool) -> Vec<&'a PreviewNode> {
        let mut found = Vec::new();
        self.collect(pred, &mut found);
        found
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&PreviewNode) -> bool, found: &mut Vec<&'a PreviewNode>) {
        if pred(self) {
            found.push(self);
        }
        for child in &self.children {
            child.collect(pred, found);
        }
    }

    pub fn find_by_class(&self, class: &str) -> Option<&PreviewNode> {
        self.find(&|n| n.has_class(class))
    }

    /// Serialize as indented HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out, 0);
        out
    }

    fn write_html(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attributes {
            if value.is_empty() {
                out.push_str(&format!(" {name}"));
            } else {
                out.push_str(&format!(" {name}=\"{}\"", escape(value)));
            }
        }
        if !self.style.is_empty() {
            let css: Vec<String> = self
                .style
                .iter()
                .map(|d| format!("{}: {}", d.property, d.value))
                .collect();
            out.push_str(&format!(" style=\"{}\"", escape(&css.join("; "))));
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            out.push('\n');
            return;
        }

        let text = self.text.as_deref().map(escape).unwrap_or_default();
        if self.children.is_empty() {
            out.push_str(&text);
        } else {
            out.push('\n');
            if !text.is_empty() {
                out.push_str(&format!("{indent}  {text}\n"));
            }
            for child in &self.children {
                child.write_html(out, depth + 1);
            }
            out.push_str(&indent);
        }
        out.push_str(&format!("</{}>\n", self.tag));
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_html() {
        let node = PreviewNode::new("div")
            .class("form-group")
            .child(PreviewNode::new("label").text("A & B"))
            .child(
                PreviewNode::new("input")
                    .attr("type", "text")
                    .flag("disabled", true)
                    .styled(vec![Declaration::new("padding", "8px 12px")]),
            );
        assert_eq!(
            node.to_html(),
            "<div class=\"form-group\">\n  <label>A &amp; B</label>\n  <input type=\"text\" disabled style=\"padding: 8px 12px\">\n</div>\n"
        );
    }

    #[test]
    fn test_flag_off_adds_nothing() {
        let node = PreviewNode::new("input").flag("required", false);
        assert!(!node.has_attr("required"));
    }

    #[test]
    fn test_find_all() {
        let node = PreviewNode::new("div")
            .child(PreviewNode::new("span").class("choice"))
            .child(PreviewNode::new("div").child(PreviewNode::new("span").class("choice extra")));
        assert_eq!(node.find_all(&|n| n.has_class("choice")).len(), 2);
        assert!(node.find_by_class("extra").is_some());
        assert!(node.find_by_class("missing").is_none());
    }
}
