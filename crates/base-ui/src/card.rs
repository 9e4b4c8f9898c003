//! Card container.

use crate::html::Element;

/// Classes every card carries.
pub const CARD_CLASSES: &str = "w-full rounded-xl border border-gray-80 bg-gray-90 overflow-hidden";

/// Rounded, bordered container wrapping pre-rendered content.
#[derive(Debug, Clone, Default)]
pub struct Card {
    children: Vec<String>,
}

impl Card {
    /// Create an empty card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append rendered child HTML.
    pub fn child(mut self, html: impl Into<String>) -> Self {
        self.children.push(html.into());
        self
    }

    /// Render to HTML.
    pub fn render(&self) -> String {
        self.children
            .iter()
            .fold(
                Element::new("div").class(CARD_CLASSES),
                |el, child| el.child(child.as_str()),
            )
            .render()
    }
}
