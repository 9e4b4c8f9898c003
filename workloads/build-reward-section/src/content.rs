//! Static copy and asset references for the section.

use serde::{Deserialize, Serialize};

/// Section heading.
pub const HEADING: &str = "Build and you will be rewarded";

/// Section body copy.
pub const BODY: &str = "Base supports passionate builders making apps for everyday life with grants, marketing, and as part of the Superchain, Base builders are eligible for consideration in Optimism's retroactive public goods funding.";

/// CTA label.
pub const CTA_LABEL: &str = "Get rewarded";

/// CTA destination, opened in a new browsing context.
pub const CTA_URL: &str = "https://retrofunding.optimism.io/";

/// Icon shown on the CTA button.
pub const CTA_ICON: &str = "baseOrgDiagonalUpArrow";

/// Label attached to every playback failure report.
pub const PLAY_FAILURE_LABEL: &str = "failed to play video";

/// Bundled video file name.
pub const VIDEO_FILE: &str = "cubes.webm";

/// Classes on the video element. Hidden under reduced motion.
pub const VIDEO_CLASS: &str = "mx-auto p-2 motion-reduce:hidden";

/// Element id of the video, used by the page script.
pub const VIDEO_ID: &str = "build-and-reward-video";

/// Reference to the bundled hover video.
///
/// Only the source location depends on deployment; the playback flags are
/// fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoAsset {
    src: String,
}

impl VideoAsset {
    /// Resolve the asset under a base path such as `/assets`.
    pub fn under(base: &str) -> Self {
        Self {
            src: format!("{}/{}", base.trim_end_matches('/'), VIDEO_FILE),
        }
    }

    /// Resolved source URL.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Always muted.
    pub fn muted(&self) -> bool {
        true
    }

    /// Always plays inline.
    pub fn plays_inline(&self) -> bool {
        true
    }

    /// Never autoplays; playback starts on hover.
    pub fn autoplay(&self) -> bool {
        false
    }
}

impl Default for VideoAsset {
    fn default() -> Self {
        Self::under("/assets")
    }
}

/// Everything the section renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionContent {
    pub heading: String,
    pub body: String,
    pub cta_label: String,
    pub video: VideoAsset,
}

impl Default for SectionContent {
    fn default() -> Self {
        Self {
            heading: HEADING.to_string(),
            body: BODY.to_string(),
            cta_label: CTA_LABEL.to_string(),
            video: VideoAsset::default(),
        }
    }
}

impl SectionContent {
    /// Default copy with the video resolved under `asset_base`.
    pub fn with_asset_base(asset_base: &str) -> Self {
        Self {
            video: VideoAsset::under(asset_base),
            ..Self::default()
        }
    }

    /// The CTA destination. Not part of the editable content.
    pub fn cta_url(&self) -> &'static str {
        CTA_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content() {
        let content = SectionContent::default();
        assert_eq!(content.heading, "Build and you will be rewarded");
        assert_eq!(content.cta_label, "Get rewarded");
        assert_eq!(content.cta_url(), "https://retrofunding.optimism.io/");
        assert_eq!(content.video.src(), "/assets/cubes.webm");
    }

    #[test]
    fn test_asset_base_trailing_slash() {
        assert_eq!(
            VideoAsset::under("https://cdn.example.com/static/").src(),
            "https://cdn.example.com/static/cubes.webm"
        );
        assert_eq!(
            SectionContent::with_asset_base("/media").video.src(),
            "/media/cubes.webm"
        );
    }

    #[test]
    fn test_video_flags_fixed() {
        let asset = VideoAsset::under("/anything");
        assert!(asset.muted());
        assert!(asset.plays_inline());
        assert!(!asset.autoplay());
    }
}
