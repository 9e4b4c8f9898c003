//! Inline video element.

use crate::html::Element;

/// Preload hint: fetch dimensions and duration, not the media itself.
pub const VIDEO_PRELOAD: &str = "metadata";

/// A `<video>` element. Muted and inline by default, never autoplaying
/// unless asked.
#[derive(Debug, Clone)]
pub struct Video {
    src: String,
    muted: bool,
    plays_inline: bool,
    autoplay: bool,
    id: Option<String>,
    class: Option<String>,
}

impl Video {
    /// Create a video for `src`.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            muted: true,
            plays_inline: true,
            autoplay: false,
            id: None,
            class: None,
        }
    }

    /// Set the muted flag.
    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// Set the inline-playback flag.
    pub fn plays_inline(mut self, plays_inline: bool) -> Self {
        self.plays_inline = plays_inline;
        self
    }

    /// Set the autoplay flag.
    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add classes.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Build the element.
    pub fn element(&self) -> Element {
        let mut el = Element::new("video");
        if let Some(id) = &self.id {
            el = el.attr("id", id.as_str());
        }
        el.attr("src", self.src.as_str())
            .flag("muted", self.muted)
            .flag("playsinline", self.plays_inline)
            .flag("autoplay", self.autoplay)
            .attr("preload", VIDEO_PRELOAD)
            .class_opt(self.class.as_deref())
    }

    /// Render to HTML.
    pub fn render(&self) -> String {
        self.element().render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_defaults() {
        let el = Video::new("/assets/cubes.webm").element();

        assert_eq!(el.get_attr("src"), Some("/assets/cubes.webm"));
        assert_eq!(el.get_attr("muted"), Some(""));
        assert_eq!(el.get_attr("playsinline"), Some(""));
        assert_eq!(el.get_attr("autoplay"), None);
        assert_eq!(el.get_attr("preload"), Some(VIDEO_PRELOAD));
    }

    #[test]
    fn test_video_render() {
        let html = Video::new("a.webm")
            .with_id("v")
            .with_class("mx-auto")
            .render();
        assert_eq!(
            html,
            r#"<video id="v" src="a.webm" muted playsinline preload="metadata" class="mx-auto"></video>"#
        );
    }
}
