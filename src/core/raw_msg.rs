use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Raw external events before translation into domain messages.
///
/// These come from the terminal event loop and the host runner; the
/// translator turns them into `Msg` values based on current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    /// Application heartbeat from the TUI event loop.
    Tick,
    /// One wall-clock second elapsed (host-driven, independent of the
    /// heartbeat rate).
    SecondElapsed,
    /// Render request from the TUI event loop.
    Render,
    /// Terminal was resized.
    Resize(u16, u16),
    /// Quit requested by the host.
    Quit,
    /// Suspend requested (SIGTSTP path).
    Suspend,
    /// Resumed after suspension.
    Resume,
    /// A key press.
    Key(KeyEvent),
    /// An error surfaced by the host runner.
    Error(String),
}

impl RawMsg {
    /// Frequent messages are excluded from message-level debug logging.
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render | RawMsg::SecondElapsed)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(RawMsg::SecondElapsed.is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Resize(80, 24).is_frequent());
    }

    #[test]
    fn test_raw_msg_equality() {
        assert_eq!(RawMsg::Quit, RawMsg::Quit);
        assert_eq!(RawMsg::Resize(80, 24), RawMsg::Resize(80, 24));
        assert_ne!(RawMsg::Resize(80, 24), RawMsg::Resize(80, 25));

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(RawMsg::Key(key), RawMsg::Key(key));
    }
}
