//! Media playback error kinds.

use thiserror::Error;

/// Reasons the host platform can refuse or fail to start playback.
///
/// Browsers reject `HTMLMediaElement.play()` with a `DOMException`; the
/// variants follow the exception names they report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Autoplay policy or missing user gesture.
    #[error("Playback not allowed: {0}")]
    NotAllowed(String),

    /// The media could not be decoded or the format is unsupported.
    #[error("Playback not supported: {0}")]
    NotSupported(String),

    /// A pause or new load interrupted the play request.
    #[error("Playback aborted: {0}")]
    Aborted(String),

    /// The media resource could not be fetched.
    #[error("Media unavailable: {0}")]
    Unavailable(String),

    /// Anything the host did not classify.
    #[error("Playback failed: {0}")]
    Other(String),
}

impl PlaybackError {
    /// Classify a rejection by its `DOMException` name.
    pub fn from_dom_name(name: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match name {
            "NotAllowedError" => Self::NotAllowed(message),
            "NotSupportedError" => Self::NotSupported(message),
            "AbortError" => Self::Aborted(message),
            "NetworkError" | "NotFoundError" => Self::Unavailable(message),
            _ => Self::Other(message),
        }
    }

    /// Short machine-friendly kind name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotAllowed(_) => "not_allowed",
            Self::NotSupported(_) => "not_supported",
            Self::Aborted(_) => "aborted",
            Self::Unavailable(_) => "unavailable",
            Self::Other(_) => "other",
        }
    }

    /// Whether browsers raise this routinely, outside of any fault in the
    /// page: autoplay policy refusals and play requests cut short by a pause.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotAllowed(_) | Self::Aborted(_))
    }
}
