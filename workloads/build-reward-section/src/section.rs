//! Section view.

use base_ui::{Button, ButtonVariant, Card, Element, Link, Text, Title, TitleLevel, Video};

use crate::content::{SectionContent, CTA_ICON, VIDEO_CLASS, VIDEO_ID};

/// `data-section` name of this section.
pub const SECTION_NAME: &str = "build-and-reward";

/// Attribute marking the region whose pointer-enter starts the video.
pub const HOVER_REGION_ATTR: &str = "data-hover-play";

/// Two-column layout, stacked on small screens.
pub const LAYOUT_CLASSES: &str = "mb-12 mt-8 flex w-full flex-col items-center gap-4 md:flex-row";

/// Media column and the hover region inside it.
pub const MEDIA_CLASSES: &str = "relative flex w-full flex-row gap-4";

/// Copy column.
pub const COPY_CLASSES: &str = "flex w-full flex-col gap-4 md:pl-20";

/// Extra heading classes.
pub const HEADING_CLASS: &str = "text-[#E3E7E9]";

/// Extra CTA button classes.
pub const CTA_BUTTON_CLASS: &str = "md:ml-auto";

/// Build the video element for `content`.
pub fn video_element(content: &SectionContent) -> Video {
    let asset = &content.video;
    Video::new(asset.src())
        .with_id(VIDEO_ID)
        .muted(asset.muted())
        .plays_inline(asset.plays_inline())
        .autoplay(asset.autoplay())
        .with_class(VIDEO_CLASS)
}

/// Render the media column: the hover region holding the video card.
pub fn render_media(content: &SectionContent) -> String {
    let card = Card::new().child(video_element(content).render()).render();

    let hover_region = Element::new("div")
        .class(MEDIA_CLASSES)
        .attr(HOVER_REGION_ATTR, VIDEO_ID)
        .child(card)
        .render();

    Element::new("div")
        .class(MEDIA_CLASSES)
        .child(hover_region)
        .render()
}

/// Render the copy column: heading, body text and the CTA.
pub fn render_copy(content: &SectionContent) -> String {
    let title = Title::new(TitleLevel::Display2, content.heading.as_str())
        .with_class(HEADING_CLASS)
        .render();

    let text = Text::new(content.body.as_str()).render();

    let button = Button::new(content.cta_label.as_str())
        .with_variant(ButtonVariant::Primary)
        .with_icon(CTA_ICON)
        .with_class(CTA_BUTTON_CLASS)
        .render();
    let cta = Link::external(content.cta_url()).child(button).render();

    Element::new("div")
        .class(COPY_CLASSES)
        .child(title)
        .child(text)
        .child(Element::new("div").child(cta).render())
        .render()
}

/// Render the whole section.
pub fn render_section(content: &SectionContent) -> String {
    let layout = Element::new("div")
        .class(LAYOUT_CLASSES)
        .child(render_media(content))
        .child(render_copy(content))
        .render();

    Element::new("section")
        .attr("data-section", SECTION_NAME)
        .child(layout)
        .render()
}

/// Render skeleton placeholder for the section.
pub fn render_skeleton() -> String {
    format!(
        r#"<section class="skeleton" data-section="{}">
    <div class="{}">
        <div class="skeleton-card w-full"></div>
        <div class="{}">
            <div class="skeleton-text skeleton-headline"></div>
            <div class="skeleton-text"></div>
            <div class="skeleton-button"></div>
        </div>
    </div>
</section>"#,
        SECTION_NAME, LAYOUT_CLASSES, COPY_CLASSES
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{VideoAsset, CTA_URL};

    #[test]
    fn test_heading_and_cta_label() {
        let html = render_section(&SectionContent::default());

        assert!(html.contains(">Build and you will be rewarded</h2>"));
        assert!(html.contains("<span>Get rewarded</span>"));
    }

    #[test]
    fn test_cta_opens_new_isolated_context() {
        let html = render_section(&SectionContent::default());
        let expected = format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#,
            CTA_URL
        );

        assert_eq!(html.matches(&expected).count(), 1);
        assert!(html.contains(r#"href="https://retrofunding.optimism.io/""#));
    }

    #[test]
    fn test_cta_target_survives_content_edits() {
        let content = SectionContent {
            heading: "Other".to_string(),
            cta_label: "Go".to_string(),
            ..SectionContent::default()
        };
        let html = render_section(&content);

        assert!(html.contains(r#"href="https://retrofunding.optimism.io/" target="_blank""#));
    }

    #[test]
    fn test_video_muted_never_autoplays() {
        for base in ["/assets", "https://cdn.example.com/x/"] {
            let content = SectionContent {
                video: VideoAsset::under(base),
                ..SectionContent::default()
            };
            let el = video_element(&content).element();

            assert_eq!(el.get_attr("muted"), Some(""));
            assert_eq!(el.get_attr("playsinline"), Some(""));
            assert_eq!(el.get_attr("autoplay"), None);
        }

        let html = render_section(&SectionContent::default());
        assert!(html.contains(" muted playsinline "));
        assert!(!html.contains("autoplay"));
    }

    #[test]
    fn test_video_sits_inside_hover_region_card() {
        let html = render_media(&SectionContent::default());
        let region = html
            .find(r#"data-hover-play="build-and-reward-video""#)
            .unwrap();
        let video = html.find(r#"<video id="build-and-reward-video""#).unwrap();

        assert!(region < video);
        assert!(html.contains("motion-reduce:hidden"));
        assert!(html.contains(r#"src="/assets/cubes.webm""#));
    }

    #[test]
    fn test_body_copy_is_escaped() {
        let html = render_copy(&SectionContent::default());
        assert!(html.contains("eligible for consideration in Optimism&#39;s retroactive"));
    }

    #[test]
    fn test_section_wrapper() {
        let html = render_section(&SectionContent::default());
        assert!(html.starts_with(r#"<section data-section="build-and-reward">"#));
        assert!(html.ends_with("</section>"));
    }

    #[test]
    fn test_markup_uses_exported_classes() {
        let html = render_section(&SectionContent::default());

        for class in [
            LAYOUT_CLASSES,
            MEDIA_CLASSES,
            COPY_CLASSES,
            base_ui::CARD_CLASSES,
            base_ui::TEXT_CLASSES,
            base_ui::ICON_CLASSES,
        ] {
            assert!(html.contains(&format!(r#"class="{}""#, class)), "{}", class);
        }
        assert!(html.contains(&format!(
            r#"class="{} {}""#,
            TitleLevel::Display2.classes(),
            HEADING_CLASS
        )));
        assert!(html.contains(&format!(
            r#"class="{} {} {}""#,
            base_ui::BUTTON_BASE_CLASSES,
            ButtonVariant::Primary.classes(),
            CTA_BUTTON_CLASS
        )));
        assert!(html.contains(&format!(r#"preload="{}""#, base_ui::VIDEO_PRELOAD)));
    }

    #[test]
    fn test_skeleton_uses_section_name() {
        let html = render_skeleton();
        assert!(html.contains(r#"data-section="build-and-reward""#));
        assert!(html.contains("skeleton-button"));
    }
}
