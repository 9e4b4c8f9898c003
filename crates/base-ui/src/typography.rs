//! Title and body text.

use serde::{Deserialize, Serialize};

use crate::html::Element;

/// Visual level of a title. Display levels are the large marketing sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleLevel {
    Display1,
    Display2,
    Display3,
    Display4,
    Headline,
    Title1,
    Title2,
}

impl TitleLevel {
    /// Heading tag used for this level.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Display1 => "h1",
            Self::Display2 | Self::Display3 | Self::Display4 => "h2",
            Self::Headline => "h3",
            Self::Title1 | Self::Title2 => "h4",
        }
    }

    /// Typography classes for this level.
    pub fn classes(&self) -> &'static str {
        match self {
            Self::Display1 => "font-display text-[3.5rem] leading-[1.1] md:text-[5rem]",
            Self::Display2 => "font-display text-[2.5rem] leading-[1.1] md:text-[4rem]",
            Self::Display3 => "font-display text-[2rem] leading-[1.15] md:text-[3rem]",
            Self::Display4 => "font-display text-[1.75rem] leading-[1.2] md:text-[2.5rem]",
            Self::Headline => "font-sans text-[1.5rem] leading-[1.25]",
            Self::Title1 => "font-sans text-[1.25rem] leading-[1.3]",
            Self::Title2 => "font-sans text-[1.125rem] leading-[1.35]",
        }
    }
}

/// A heading at a given visual level.
#[derive(Debug, Clone)]
pub struct Title {
    level: TitleLevel,
    text: String,
    class: Option<String>,
}

impl Title {
    /// Create a title.
    pub fn new(level: TitleLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            class: None,
        }
    }

    /// Add extra classes.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Build the element.
    pub fn element(&self) -> Element {
        Element::new(self.level.tag())
            .class(self.level.classes())
            .class_opt(self.class.as_deref())
            .text(&self.text)
    }

    /// Render to HTML.
    pub fn render(&self) -> String {
        self.element().render()
    }
}

/// Classes of a body copy paragraph.
pub const TEXT_CLASSES: &str = "font-sans text-base leading-relaxed text-gray-muted md:text-lg";

/// A paragraph of body copy.
#[derive(Debug, Clone)]
pub struct Text {
    text: String,
}

impl Text {
    /// Create body text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Render to HTML.
    pub fn render(&self) -> String {
        Element::new("p")
            .class(TEXT_CLASSES)
            .text(&self.text)
            .render()
    }
}
