//! Minimal HTML element builder.

/// Escape text for use in element content or a quoted attribute value.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// An HTML element under construction.
///
/// Attributes keep insertion order. Children are already-rendered HTML;
/// use [`Element::text`] for escaped text content.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(String, Option<String>)>,
    children: Vec<String>,
}

impl Element {
    /// Start a new element.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the class attribute, appending to any earlier classes.
    pub fn class(mut self, class: &str) -> Self {
        let class = class.trim();
        if class.is_empty() {
            return self;
        }
        if let Some((_, Some(existing))) = self.attrs.iter_mut().find(|(k, _)| k == "class") {
            existing.push(' ');
            existing.push_str(class);
            return self;
        }
        self.attrs.push(("class".to_string(), Some(class.to_string())));
        self
    }

    /// Append an optional extra class.
    pub fn class_opt(self, class: Option<&str>) -> Self {
        match class {
            Some(class) => self.class(class),
            None => self,
        }
    }

    /// Add a valued attribute.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), Some(value.into())));
        self
    }

    /// Add a boolean attribute when `on` is true.
    pub fn flag(mut self, name: &str, on: bool) -> Self {
        if on {
            self.attrs.push((name.to_string(), None));
        }
        self
    }

    /// Append rendered child HTML.
    pub fn child(mut self, html: impl Into<String>) -> Self {
        self.children.push(html.into());
        self
    }

    /// Append escaped text content.
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(html_escape(text));
        self
    }

    /// Look up an attribute value. Boolean attributes yield `Some("")`.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    /// Render to HTML.
    pub fn render(&self) -> String {
        let mut html = format!("<{}", self.tag);
        for (name, value) in &self.attrs {
            match value {
                Some(value) => html.push_str(&format!(r#" {}="{}""#, name, html_escape(value))),
                None => html.push_str(&format!(" {}", name)),
            }
        }
        html.push('>');
        for child in &self.children {
            html.push_str(child);
        }
        html.push_str(&format!("</{}>", self.tag));
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_element_render_with_attrs() {
        let html = Element::new("div")
            .class("flex")
            .class("gap-4")
            .attr("data-section", "hero")
            .flag("hidden", true)
            .flag("muted", false)
            .text("a < b")
            .render();

        assert_eq!(
            html,
            r#"<div class="flex gap-4" data-section="hero" hidden>a &lt; b</div>"#
        );
    }

    #[test]
    fn test_empty_class_is_ignored() {
        let el = Element::new("p").class("  ").class_opt(None);
        assert_eq!(el.get_attr("class"), None);
        assert_eq!(el.render(), "<p></p>");
    }

    #[test]
    fn test_get_attr_boolean() {
        let el = Element::new("video").flag("muted", true);
        assert_eq!(el.get_attr("muted"), Some(""));
        assert_eq!(el.get_attr("autoplay"), None);
    }

    #[test]
    fn test_child_is_not_escaped() {
        let html = Element::new("div").child("<span>ok</span>").render();
        assert_eq!(html, "<div><span>ok</span></div>");
    }
}
