//! Hover-to-play controller for the section video.
//!
//! The controller owns an optional handle to the mounted media element and
//! the injected error reporter. Pointer-enter issues one play request and
//! hands back a [`PendingPlayback`] for the host to drive; the handler never
//! waits on the outcome.
//!
//! Outcomes are matched against a mount generation. A request issued
//! before an unmount (or remount) settles silently.

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use base_errors::{PlaybackError, SharedReporter};
use futures::future::LocalBoxFuture;

use crate::content::PLAY_FAILURE_LABEL;

/// Outcome of a host play request, resolved later.
pub type PlayRequest = LocalBoxFuture<'static, Result<(), PlaybackError>>;

/// A rendered media element that can be asked to play.
pub trait MediaElement {
    /// Request playback. The host may reject the returned request.
    fn play(&self) -> PlayRequest;
}

/// Playback state as seen by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

#[derive(Debug, Default)]
struct Shared {
    generation: Cell<u64>,
    state: Cell<PlaybackState>,
}

/// Controller for one section instance.
pub struct SectionController<M: MediaElement> {
    handle: Option<M>,
    reporter: SharedReporter,
    shared: Rc<Shared>,
}

impl<M: MediaElement> SectionController<M> {
    /// Create an unmounted controller reporting to `reporter`.
    pub fn new(reporter: SharedReporter) -> Self {
        Self {
            handle: None,
            reporter,
            shared: Rc::new(Shared::default()),
        }
    }

    /// Bind the rendered media element. Replaces any earlier binding.
    pub fn mount(&mut self, element: M) {
        self.bump_generation();
        self.shared.state.set(PlaybackState::Paused);
        self.handle = Some(element);
    }

    /// Release the media element. Outstanding requests settle silently.
    pub fn unmount(&mut self) -> Option<M> {
        self.bump_generation();
        self.shared.state.set(PlaybackState::Paused);
        self.handle.take()
    }

    /// Whether a media element is bound.
    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    /// Current playback state.
    pub fn state(&self) -> PlaybackState {
        self.shared.state.get()
    }

    /// Pointer entered the media region.
    ///
    /// Returns `None` without touching anything when no element is bound
    /// or the video is already playing. Otherwise issues exactly one play
    /// request and returns the pending outcome.
    pub fn on_media_enter(&self) -> Option<PendingPlayback> {
        let element = self.handle.as_ref()?;
        if self.state() == PlaybackState::Playing {
            return None;
        }

        Some(PendingPlayback {
            request: element.play(),
            generation: self.shared.generation.get(),
            shared: Rc::clone(&self.shared),
            reporter: self.reporter.clone(),
        })
    }

    /// The host paused the video (user controls, end of media).
    pub fn on_media_paused(&self) {
        self.shared.state.set(PlaybackState::Paused);
    }

    fn bump_generation(&self) {
        self.shared
            .generation
            .set(self.shared.generation.get().wrapping_add(1));
    }
}

impl<M: MediaElement> Drop for SectionController<M> {
    fn drop(&mut self) {
        self.bump_generation();
    }
}

/// A play request in flight. Resolves once the host settles it.
///
/// Rejections are reported under `"failed to play video"` and swallowed;
/// this future never fails.
#[must_use = "the play outcome is only observed when this future is driven"]
pub struct PendingPlayback {
    request: PlayRequest,
    generation: u64,
    shared: Rc<Shared>,
    reporter: SharedReporter,
}

impl PendingPlayback {
    fn settle(&self, outcome: Result<(), PlaybackError>) {
        if self.shared.generation.get() != self.generation {
            tracing::debug!(
                ok = outcome.is_ok(),
                "ignoring play outcome for a released video element"
            );
            return;
        }

        match outcome {
            Ok(()) => self.shared.state.set(PlaybackState::Playing),
            Err(err) => self.reporter.report(&err, PLAY_FAILURE_LABEL),
        }
    }
}

impl Future for PendingPlayback {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();
        match this.request.as_mut().poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(outcome) => {
                this.settle(outcome);
                Poll::Ready(())
            }
        }
    }
}
