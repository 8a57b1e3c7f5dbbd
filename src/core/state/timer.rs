use serde::{Deserialize, Serialize};
use strum::Display;

use crate::core::{cmd::Cmd, msg::timer::TimerMsg};

/// Default countdown duration: five minutes.
pub const DEFAULT_COUNTDOWN_SECONDS: u64 = 300;

/// Minute presets offered for dialing in a countdown.
pub const COUNTDOWN_PRESETS_MINUTES: [u64; 5] = [1, 5, 10, 15, 25];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum TimerMode {
    #[default]
    Stopwatch,
    Countdown,
}

impl TimerMode {
    pub fn toggled(self) -> Self {
        match self {
            TimerMode::Stopwatch => TimerMode::Countdown,
            TimerMode::Countdown => TimerMode::Stopwatch,
        }
    }
}

/// Stopwatch/countdown state, advanced by one-second ticks
///
/// The tick source lives in the host loop; this state only decides
/// what a tick means. While stopped, ticks are ignored, which is what
/// guarantees the countdown-finished notification fires exactly once:
/// reaching zero stops the timer, so no further tick can fire again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    /// Seconds elapsed (stopwatch) or remaining (countdown).
    pub elapsed_or_remaining: u64,
    pub mode: TimerMode,
    pub configured_countdown_seconds: u64,
    pub running: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            elapsed_or_remaining: 0,
            mode: TimerMode::Stopwatch,
            configured_countdown_seconds: DEFAULT_COUNTDOWN_SECONDS,
            running: false,
        }
    }
}

impl TimerState {
    /// Timer-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: TimerMsg) -> Vec<Cmd> {
        match msg {
            TimerMsg::Tick => self.tick(),

            TimerMsg::StartStop => {
                // Restarting a finished countdown reloads the dial
                if !self.running
                    && self.mode == TimerMode::Countdown
                    && self.elapsed_or_remaining == 0
                {
                    self.elapsed_or_remaining = self.configured_countdown_seconds;
                }
                self.running = !self.running;
                vec![]
            }

            TimerMsg::Reset => {
                self.running = false;
                self.elapsed_or_remaining = self.baseline();
                vec![]
            }

            TimerMsg::SwitchMode(new_mode) => {
                self.running = false;
                self.mode = new_mode;
                self.elapsed_or_remaining = self.baseline();
                vec![]
            }

            TimerMsg::SetConfiguredMinutes(minutes) => {
                self.set_configured_minutes(minutes);
                vec![]
            }
        }
    }

    fn tick(&mut self) -> Vec<Cmd> {
        if !self.running {
            return vec![];
        }

        match self.mode {
            TimerMode::Stopwatch => {
                self.elapsed_or_remaining += 1;
                vec![]
            }

            TimerMode::Countdown => {
                if self.elapsed_or_remaining <= 1 {
                    self.elapsed_or_remaining = 0;
                    self.running = false;
                    vec![Cmd::Notify {
                        summary: "Timer finished!".to_string(),
                        body: String::new(),
                    }]
                } else {
                    self.elapsed_or_remaining -= 1;
                    vec![]
                }
            }
        }
    }

    /// Dial in a countdown duration. The visible remaining time follows
    /// immediately while the countdown is stopped.
    pub fn set_configured_minutes(&mut self, minutes: u64) {
        self.configured_countdown_seconds = minutes * 60;
        if !self.running && self.mode == TimerMode::Countdown {
            self.elapsed_or_remaining = self.configured_countdown_seconds;
        }
    }

    /// The visible time a reset returns to in the current mode.
    fn baseline(&self) -> u64 {
        match self.mode {
            TimerMode::Stopwatch => 0,
            TimerMode::Countdown => self.configured_countdown_seconds,
        }
    }
}
