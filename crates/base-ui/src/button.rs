//! Buttons and icons.

use serde::{Deserialize, Serialize};

use crate::html::Element;

/// Layout classes shared by every button variant.
pub const BUTTON_BASE_CLASSES: &str =
    "flex items-center justify-between gap-4 rounded-lg px-4 py-3 font-sans";

/// Classes of an icon glyph placeholder.
pub const ICON_CLASSES: &str = "icon inline-block h-4 w-4";

/// Visual button variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outlined,
}

impl ButtonVariant {
    /// Classes for this variant.
    pub fn classes(&self) -> &'static str {
        match self {
            Self::Primary => "bg-white text-black hover:bg-gray-15",
            Self::Secondary => "bg-black text-white hover:bg-gray-90",
            Self::Outlined => "border border-white bg-transparent text-white hover:bg-gray-90",
        }
    }

    /// Name used in the `data-variant` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outlined => "outlined",
        }
    }
}

/// Render a named icon glyph placeholder.
pub fn render_icon(name: &str) -> String {
    Element::new("span")
        .class(ICON_CLASSES)
        .attr("data-icon", name)
        .attr("aria-hidden", "true")
        .render()
}

/// A button with a label and optional trailing icon.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
    icon: Option<String>,
    class: Option<String>,
}

impl Button {
    /// Create a primary button.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            icon: None,
            class: None,
        }
    }

    /// Set the variant.
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the trailing icon name.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Add extra classes.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Render to HTML.
    pub fn render(&self) -> String {
        let el = Element::new("button")
            .attr("type", "button")
            .class(BUTTON_BASE_CLASSES)
            .class(self.variant.classes())
            .class_opt(self.class.as_deref())
            .attr("data-variant", self.variant.name())
            .child(Element::new("span").text(&self.label).render());

        match &self.icon {
            Some(icon) => el.child(render_icon(icon)).render(),
            None => el.render(),
        }
    }
}
