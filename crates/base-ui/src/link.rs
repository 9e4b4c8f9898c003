//! Anchors.

use crate::html::Element;

/// `rel` value for links opened in a new browsing context.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

/// An anchor wrapping rendered content.
#[derive(Debug, Clone)]
pub struct Link {
    href: String,
    new_context: bool,
    children: Vec<String>,
}

impl Link {
    /// Same-context link.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            new_context: false,
            children: Vec::new(),
        }
    }

    /// Link opened in a new browsing context without opener access.
    pub fn external(href: impl Into<String>) -> Self {
        Self {
            new_context: true,
            ..Self::new(href)
        }
    }

    /// Append rendered child HTML.
    pub fn child(mut self, html: impl Into<String>) -> Self {
        self.children.push(html.into());
        self
    }

    /// Render to HTML.
    pub fn render(&self) -> String {
        let mut el = Element::new("a").attr("href", self.href.as_str());
        if self.new_context {
            el = el.attr("target", "_blank").attr("rel", EXTERNAL_REL);
        }
        self.children
            .iter()
            .fold(el, |el, child| el.child(child.as_str()))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_link_isolated() {
        let html = Link::external("https://example.com/?a=1&b=2")
            .child("go")
            .render();

        assert_eq!(
            html,
            r#"<a href="https://example.com/?a=1&amp;b=2" target="_blank" rel="noopener noreferrer">go</a>"#
        );
    }

    #[test]
    fn test_internal_link_has_no_target() {
        let html = Link::new("/docs").child("Docs").render();
        assert_eq!(html, r#"<a href="/docs">Docs</a>"#);
    }
}
