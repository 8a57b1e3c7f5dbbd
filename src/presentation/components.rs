//! Component collection and management
//!
//! Components are stateless renderers that receive state as
//! parameters; one is visible at a time under the tab bar.

use ratatui::prelude::*;

use crate::{
    core::state::{ui::Tab, AppState},
    presentation::config::keybindings::Mode,
    presentation::widgets::status_bar::{StatusBarWidget, ViewContext as StatusBarViewContext},
    presentation::widgets::tab_bar::{TabBarWidget, ViewContext as TabBarViewContext},
};

pub mod calculator;
pub mod notes;
pub mod timer;

pub use calculator::CalculatorComponent;
pub use notes::NotesComponent;
pub use timer::TimerComponent;

/// Collection of all components
///
/// This struct holds instances of all components used in the
/// application. Components receive state as parameters during render.
pub struct Components {
    pub calculator: CalculatorComponent,
    pub notes: NotesComponent,
    pub timer: TimerComponent,
}

impl Components {
    /// Create a new component collection
    pub fn new() -> Self {
        Self {
            calculator: CalculatorComponent::new(),
            notes: NotesComponent::new(),
            timer: TimerComponent::new(),
        }
    }

    /// Render all components
    ///
    /// This is the main rendering entry point: tab bar on top, the
    /// active tab's component in the middle, status bar at the bottom.
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let styles = &state.config.config.styles;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(1), // Tab bar
                Constraint::Min(0),    // Active tab body
                Constraint::Length(2), // Status bar (2 rows)
            ])
            .split(area);

        let tab_bar_ctx = TabBarViewContext {
            selected_style: styles.style_for(Mode::Global, "tab_selected"),
            unselected_style: styles.style_for(Mode::Global, "tab_unselected"),
        };
        frame.render_widget(TabBarWidget::new(state.ui.active_tab, tab_bar_ctx), layout[0]);

        match state.ui.active_tab {
            Tab::Calculator => self.calculator.view(state, frame, layout[1]),
            Tab::Notes => self.notes.view(state, frame, layout[1]),
            Tab::Timer => self.timer.view(state, frame, layout[1]),
        }

        let status_bar_ctx = StatusBarViewContext {
            active_tab: state.ui.active_tab,
            editing: state.notes.is_editing(),
            bar_style: styles.style_for(Mode::Global, "status_bar"),
        };
        let status_bar = StatusBarWidget::new(state.system.status_message.clone(), status_bar_ctx);
        frame.render_widget(status_bar, layout[2]);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
