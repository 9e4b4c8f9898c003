//! "Build and you will be rewarded" landing section.
//!
//! A card with a muted video that plays when the pointer enters it, a
//! heading, body copy and an outbound "Get rewarded" button.
//!
//! This workload provides:
//! - `render_section` - Server-side HTML for the section
//! - `SectionController` - Hover-to-play logic with an injected error reporter
//! - `BuildAndRewardSection` - Client-rendered Leptos component (`csr` feature)
//! - A Spin HTTP component serving the section page (`spin` feature)

mod config;
mod content;
mod error;
mod playback;
mod request;
mod section;
mod shell;

#[cfg(feature = "csr")]
mod component;
#[cfg(feature = "spin")]
mod handler;

pub use config::*;
pub use content::*;
pub use error::*;
pub use playback::*;
pub use request::*;
pub use section::*;
pub use shell::*;

#[cfg(feature = "csr")]
pub use component::*;

use base_errors::{LogReporter, SharedReporter};

/// Structured-logging reporter tagged with this section's name.
pub fn section_reporter(config: &SectionConfig) -> LogReporter {
    LogReporter::new()
        .with_component(SECTION_NAME)
        .with_format(config.log_format)
}

/// Reporter used by the server workload when the host provides none.
pub fn default_reporter(config: &SectionConfig) -> SharedReporter {
    section_reporter(config).shared()
}

/// Render the full page for `config`.
pub fn render_page(config: &SectionConfig) -> String {
    let content = SectionContent::with_asset_base(&config.asset_base);
    let section = render_section(&content);
    create_shell().render(&[section.as_str()])
}

/// Mount the client-rendered section into the document body.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let reporter = console_reporter(&SectionConfig::default());
    leptos::mount::mount_to_body(move || {
        view! { <BuildAndRewardSection reporter=reporter.clone() /> }
    });
}
