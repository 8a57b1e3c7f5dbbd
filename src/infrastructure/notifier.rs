//! Completion notifications.
//!
//! Fire-and-forget: a notification either reaches the terminal or it is
//! dropped. No retry, no queuing. When notifications are disabled in the
//! config, the app wires up [`NullNotifier`] and the signal goes nowhere.

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

/// Notification capability injected into the command executor.
pub trait Notifier: Send {
    fn notify(&self, summary: &str, body: &str);
}

/// Production notifier: rings the terminal bell and emits an OSC 9
/// desktop-notification escape. Terminals without OSC 9 support ignore
/// the escape and keep the bell.
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }

    fn sequence_for(summary: &str, body: &str) -> String {
        let message = if body.is_empty() {
            summary.to_string()
        } else {
            format!("{summary}: {body}")
        };
        format!("\x07\x1b]9;{message}\x07")
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, summary: &str, body: &str) {
        let mut out = std::io::stdout();
        let sequence = Self::sequence_for(summary, body);
        if let Err(e) = out.write_all(sequence.as_bytes()).and_then(|()| out.flush()) {
            log::warn!("Could not deliver notification: {e}");
        }
    }
}

/// Notifier that drops every signal. Used when notifications are
/// disabled and as a stand-in in tests that don't care about them.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _summary: &str, _body: &str) {}
}

/// Test notifier that records every delivered signal. Clones share the
/// same record.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    delivered: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delivered(&self) -> Vec<(String, String)> {
        self.guard().clone()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<(String, String)>> {
        self.delivered
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, summary: &str, body: &str) {
        self.guard().push((summary.to_string(), body.to_string()));
    }
}
