pub mod calculator;
pub mod notes;
pub mod system;
pub mod timer;
pub mod ui;

use crate::domain::note::Note;
use crate::infrastructure::config::Config;

pub use calculator::CalculatorState;
pub use notes::NotesState;
pub use system::SystemState;
pub use timer::TimerState;
pub use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub calculator: CalculatorState,
    pub notes: NotesState,
    pub timer: TimerState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize AppState with the specified config
    pub fn new_with_config(config: Config) -> Self {
        let mut state = Self {
            config: ConfigState { config },
            ..Default::default()
        };
        state
            .timer
            .set_configured_minutes(state.config.config.default_countdown_minutes);
        state
    }

    /// Get the selected note
    pub fn selected_note(&self) -> Option<&Note> {
        self.notes.selected_note()
    }

    /// Get the number of stored notes
    pub fn notes_len(&self) -> usize {
        self.notes.len()
    }

    /// Check if the notes list is empty
    pub fn notes_is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ui::Tab;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert_eq!(state.ui.active_tab, Tab::Calculator);
        assert_eq!(state.calculator.display, "0");
        assert!(!state.timer.running);
        assert!(!state.system.should_quit);
        assert!(state.notes_is_empty());
    }

    #[test]
    fn test_app_state_new_with_config() {
        let config = Config {
            default_countdown_minutes: 10,
            ..Default::default()
        };
        let state = AppState::new_with_config(config);

        assert_eq!(state.timer.configured_countdown_seconds, 600);
        assert_eq!(state.config.config.default_countdown_minutes, 10);
    }

    #[test]
    fn test_selected_note() {
        let mut state = AppState::default();

        // Nothing selected initially
        assert!(state.selected_note().is_none());

        // A dangling selection id resolves to None
        state.notes.selected_id = Some(42);
        assert!(state.selected_note().is_none());
    }

    #[test]
    fn test_notes_properties() {
        let state = AppState::default();

        assert_eq!(state.notes_len(), 0);
        assert!(state.notes_is_empty());
    }
}
