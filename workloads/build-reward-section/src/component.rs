//! Client-rendered Leptos version of the section.

use base_errors::{LogLevel, PlaybackError, SharedReporter};
use base_ui::{
    ButtonVariant, TitleLevel, BUTTON_BASE_CLASSES, CARD_CLASSES, EXTERNAL_REL, ICON_CLASSES,
    TEXT_CLASSES, VIDEO_PRELOAD,
};
use futures::FutureExt;
use leptos::html::Video;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::config::SectionConfig;
use crate::content::{SectionContent, CTA_ICON, VIDEO_CLASS, VIDEO_ID};
use crate::playback::{MediaElement, PlayRequest, SectionController};
use crate::section::{
    COPY_CLASSES, CTA_BUTTON_CLASS, HEADING_CLASS, LAYOUT_CLASSES, MEDIA_CLASSES, SECTION_NAME,
};
use crate::section_reporter;

/// Reporter for the browser, where stderr and `tracing` have no output.
///
/// Entries go to the devtools console: label first, then the rendered entry.
pub fn console_reporter(config: &SectionConfig) -> SharedReporter {
    section_reporter(config)
        .with_sink(|entry, line| {
            let label = JsValue::from_str(&entry.label);
            let line = JsValue::from_str(line);
            match entry.level {
                LogLevel::Warn => web_sys::console::warn_2(&label, &line),
                LogLevel::Error => web_sys::console::error_2(&label, &line),
            }
        })
        .shared()
}

/// Media element backed by a Leptos node reference.
#[derive(Clone, Copy)]
pub struct VideoNode(NodeRef<Video>);

impl MediaElement for VideoNode {
    fn play(&self) -> PlayRequest {
        let Some(video) = self.0.get_untracked() else {
            let err = PlaybackError::Unavailable("video element not attached".to_string());
            return futures::future::ready(Err(err)).boxed_local();
        };

        match video.play() {
            Ok(promise) => async move {
                JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(playback_error)
            }
            .boxed_local(),
            Err(err) => futures::future::ready(Err(playback_error(err))).boxed_local(),
        }
    }
}

/// Map a rejected `play()` promise to a playback error.
fn playback_error(value: JsValue) -> PlaybackError {
    match value.dyn_ref::<web_sys::DomException>() {
        Some(ex) => PlaybackError::from_dom_name(&ex.name(), ex.message()),
        None => PlaybackError::Other(value.as_string().unwrap_or_else(|| format!("{:?}", value))),
    }
}

/// "Build and you will be rewarded" section.
///
/// `reporter` receives playback failures; pass the page's shared reporter.
#[component]
pub fn BuildAndRewardSection(
    reporter: SharedReporter,
    #[prop(optional, into)] asset_base: Option<String>,
) -> impl IntoView {
    let content = match asset_base {
        Some(base) => SectionContent::with_asset_base(&base),
        None => SectionContent::default(),
    };

    let video_ref = NodeRef::<Video>::new();
    let controller = StoredValue::new_local(SectionController::<VideoNode>::new(reporter));

    video_ref.on_load(move |_| {
        controller.update_value(|c| c.mount(VideoNode(video_ref)));
    });
    on_cleanup(move || {
        controller.try_update_value(|c| {
            c.unmount();
        });
    });

    let play_video = move |_| {
        if let Some(Some(pending)) = controller.try_with_value(|c| c.on_media_enter()) {
            spawn_local(pending);
        }
    };
    let video_paused = move |_| {
        controller.try_with_value(|c| c.on_media_paused());
    };

    let title_class = format!("{} {}", TitleLevel::Display2.classes(), HEADING_CLASS);
    let button_class = format!(
        "{} {} {}",
        BUTTON_BASE_CLASSES,
        ButtonVariant::Primary.classes(),
        CTA_BUTTON_CLASS
    );

    view! {
        <section data-section=SECTION_NAME>
            <div class=LAYOUT_CLASSES>
                <div class=MEDIA_CLASSES>
                    <div class=MEDIA_CLASSES on:mouseenter=play_video>
                        <div class=CARD_CLASSES>
                            <video
                                node_ref=video_ref
                                id=VIDEO_ID
                                src=content.video.src().to_string()
                                muted=content.video.muted()
                                prop:muted=content.video.muted()
                                playsinline=content.video.plays_inline()
                                autoplay=content.video.autoplay()
                                preload=VIDEO_PRELOAD
                                class=VIDEO_CLASS
                                on:pause=video_paused
                            ></video>
                        </div>
                    </div>
                </div>

                <div class=COPY_CLASSES>
                    <h2 class=title_class>{content.heading.clone()}</h2>
                    <p class=TEXT_CLASSES>
                        {content.body.clone()}
                    </p>
                    <div>
                        <a href=content.cta_url() target="_blank" rel=EXTERNAL_REL>
                            <button type="button" class=button_class data-variant="primary">
                                <span>{content.cta_label.clone()}</span>
                                <span class=ICON_CLASSES data-icon=CTA_ICON aria-hidden="true"></span>
                            </button>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
