//! The error reporting capability shared by landing sections.

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::PlaybackError;
use crate::logging::{LogEntry, LogFormat, LogLevel};

/// Records operational errors for operators. Never user facing.
///
/// One reporter is typically shared by every section on a page, so
/// implementations must tolerate concurrent callers and must not panic.
pub trait ErrorReporter: Send + Sync {
    /// Record `error` under a short context `label`. Fire and forget.
    fn report(&self, error: &(dyn Error + 'static), label: &str);
}

/// Reporter handle passed into components at construction.
pub type SharedReporter = Arc<dyn ErrorReporter>;

/// Destination for finished entries, for hosts without a usable stderr.
///
/// Receives the entry and its rendering in the reporter's format.
pub type EntrySink = Arc<dyn Fn(&LogEntry, &str) + Send + Sync>;

/// Reporter that writes structured log entries.
///
/// Each report becomes a `tracing` event. The entry is then handed to the
/// configured sink, or echoed to stderr (Spin captures this) when no sink
/// is set and echo is enabled.
pub struct LogReporter {
    component: Option<String>,
    format: LogFormat,
    echo: bool,
    sink: Option<EntrySink>,
    seq: AtomicU64,
}

impl LogReporter {
    /// Create a reporter with JSON output and stderr echo enabled.
    pub fn new() -> Self {
        Self {
            component: None,
            format: LogFormat::Json,
            echo: true,
            sink: None,
            seq: AtomicU64::new(0),
        }
    }

    /// Set the component name attached to every entry.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable the stderr echo.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Send entries to `sink` instead of stderr.
    pub fn with_sink(mut self, sink: impl Fn(&LogEntry, &str) + Send + Sync + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Wrap into a shareable handle.
    pub fn shared(self) -> SharedReporter {
        Arc::new(self)
    }

    /// Number of errors reported so far.
    pub fn reported(&self) -> u64 {
        self.seq.load(Ordering::Relaxed)
    }

    /// Build the entry for a report, advancing the sequence number.
    pub fn entry_for(&self, error: &(dyn Error + 'static), label: &str) -> LogEntry {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        let playback = error.downcast_ref::<PlaybackError>();
        let level = match playback {
            Some(err) if err.is_expected() => LogLevel::Warn,
            _ => LogLevel::Error,
        };

        LogEntry {
            level,
            label: label.to_string(),
            message: error.to_string(),
            kind: playback.map(|err| err.kind().to_string()),
            component: self.component.clone(),
            seq,
        }
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogReporter")
            .field("component", &self.component)
            .field("format", &self.format)
            .field("echo", &self.echo)
            .field("sink", &self.sink.is_some())
            .field("seq", &self.seq)
            .finish()
    }
}

impl ErrorReporter for LogReporter {
    fn report(&self, error: &(dyn Error + 'static), label: &str) {
        let entry = self.entry_for(error, label);
        let component = entry.component.as_deref().unwrap_or("-");
        let kind = entry.kind.as_deref().unwrap_or("-");

        match entry.level {
            LogLevel::Warn => tracing::warn!(
                label = %entry.label,
                kind,
                component,
                seq = entry.seq,
                "{}",
                entry.message
            ),
            LogLevel::Error => tracing::error!(
                label = %entry.label,
                kind,
                component,
                seq = entry.seq,
                "{}",
                entry.message
            ),
        }

        let line = entry.render(self.format);
        match &self.sink {
            Some(sink) => sink(&entry, &line),
            None if self.echo => eprintln!("{}", line),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn test_entry_for_uses_label_and_message() {
        let reporter = LogReporter::new().with_component("build-and-reward");
        let err = PlaybackError::NotSupported("decode failed".to_string());

        let entry = reporter.entry_for(&err, "failed to play video");

        assert_eq!(entry.level, LogLevel::Error);
        assert_eq!(entry.label, "failed to play video");
        assert_eq!(entry.message, "Playback not supported: decode failed");
        assert_eq!(entry.kind.as_deref(), Some("not_supported"));
        assert_eq!(entry.component.as_deref(), Some("build-and-reward"));
        assert_eq!(entry.seq, 1);
    }

    #[test]
    fn test_entry_level_follows_playback_kind() {
        let reporter = LogReporter::new();

        let blocked = reporter.entry_for(
            &PlaybackError::NotAllowed("no gesture".to_string()),
            "failed to play video",
        );
        assert_eq!(blocked.level, LogLevel::Warn);
        assert_eq!(blocked.kind.as_deref(), Some("not_allowed"));

        let foreign = std::io::Error::other("disk");
        let entry = reporter.entry_for(&foreign, "other");
        assert_eq!(entry.level, LogLevel::Error);
        assert_eq!(entry.kind, None);
    }

    #[test]
    fn test_report_counts_across_shared_handles() {
        let reporter = Arc::new(LogReporter::new().with_echo(false));
        let a: SharedReporter = reporter.clone();
        let b: SharedReporter = reporter.clone();
        let err = PlaybackError::NotAllowed("no gesture".to_string());

        a.report(&err, "failed to play video");
        b.report(&err, "failed to play video");

        assert_eq!(reporter.reported(), 2);
    }

    #[test]
    fn test_report_writes_to_sink() {
        let lines: Arc<Mutex<Vec<(String, String)>>> = Arc::default();
        let captured = lines.clone();
        let reporter = LogReporter::new()
            .with_format(LogFormat::Human)
            .with_sink(move |entry, line| {
                captured
                    .lock()
                    .unwrap()
                    .push((entry.label.clone(), line.to_string()));
            });

        reporter.report(
            &PlaybackError::NotSupported("decode failed".to_string()),
            "failed to play video",
        );

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, "failed to play video");
        assert_eq!(
            lines[0].1,
            "[ERROR] failed to play video: Playback not supported: decode failed | kind=not_supported"
        );
    }

    #[test]
    fn test_builder_defaults() {
        let reporter = LogReporter::default();
        assert_eq!(reporter.format, LogFormat::Json);
        assert!(reporter.echo);
        assert!(reporter.sink.is_none());
        assert!(reporter.component.is_none());
        assert_eq!(reporter.reported(), 0);

        let human = LogReporter::new().with_format(LogFormat::Human);
        assert_eq!(human.format, LogFormat::Human);
    }
}
