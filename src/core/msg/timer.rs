use serde::{Deserialize, Serialize};

use crate::core::state::timer::TimerMode;

/// Messages specific to TimerState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimerMsg {
    /// One second of wall-clock time elapsed. Ignored while stopped.
    Tick,
    /// Toggle between running and stopped.
    StartStop,
    /// Stop and return the visible time to its mode-specific baseline.
    Reset,
    /// Stop, change mode and reset the visible time for the new mode.
    SwitchMode(TimerMode),
    /// Dial in the countdown duration in minutes.
    SetConfiguredMinutes(u64),
}

impl TimerMsg {
    /// Ticks arrive once per second for the lifetime of the app, so
    /// they are excluded from message-level debug logging.
    pub fn is_frequent(&self) -> bool {
        matches!(self, TimerMsg::Tick)
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_timer_msg_frequent_detection() {
        assert!(TimerMsg::Tick.is_frequent());
        assert!(!TimerMsg::StartStop.is_frequent());
        assert!(!TimerMsg::Reset.is_frequent());
    }

    #[test]
    fn test_timer_msg_equality() {
        assert_eq!(TimerMsg::StartStop, TimerMsg::StartStop);
        assert_ne!(
            TimerMsg::SwitchMode(TimerMode::Stopwatch),
            TimerMsg::SwitchMode(TimerMode::Countdown)
        );
        assert_eq!(
            TimerMsg::SetConfiguredMinutes(5),
            TimerMsg::SetConfiguredMinutes(5)
        );
    }

    #[test]
    fn test_timer_msg_serialization() -> Result<()> {
        let msg = TimerMsg::SwitchMode(TimerMode::Countdown);
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: TimerMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
