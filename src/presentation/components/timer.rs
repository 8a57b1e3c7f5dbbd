//! Timer tab component
//!
//! Stopwatch and countdown share one face: a mode switcher, the large
//! `MM:SS` readout and, while a countdown is being dialed in, the
//! minute preset row.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::timer::{TimerMode, COUNTDOWN_PRESETS_MINUTES};
use crate::core::state::AppState;
use crate::domain::clock::format_mm_ss;
use crate::presentation::config::keybindings::Mode;

#[derive(Debug, Clone)]
pub struct TimerComponent;

impl TimerComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the timer into the given area.
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Timer").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(1), // Mode switcher
                Constraint::Length(1), // Preset row (blank outside dial-in)
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Readout
                Constraint::Length(1), // Run indicator
                Constraint::Min(0),
            ])
            .split(inner);

        let modes = Paragraph::new(Self::mode_line(state.timer.mode)).alignment(Alignment::Center);
        frame.render_widget(modes, layout[0]);

        if Self::presets_visible(state) {
            let presets =
                Paragraph::new(Self::preset_line(state)).alignment(Alignment::Center);
            frame.render_widget(presets, layout[1]);
        }

        let style_name = if state.timer.running {
            "time_running"
        } else {
            "time_stopped"
        };
        let readout_style = Style::default()
            .bold()
            .patch(state.config.config.styles.style_for(Mode::Timer, style_name));
        let readout = Paragraph::new(format_mm_ss(state.timer.elapsed_or_remaining))
            .style(readout_style)
            .alignment(Alignment::Center);
        frame.render_widget(readout, layout[3]);

        let indicator = if state.timer.running {
            "▶ running"
        } else {
            "■ stopped"
        };
        let indicator = Paragraph::new(Span::styled(indicator, Style::default().dim()))
            .alignment(Alignment::Center);
        frame.render_widget(indicator, layout[4]);
    }

    /// Presets are offered only while a countdown can still be dialed in.
    fn presets_visible(state: &AppState) -> bool {
        state.timer.mode == TimerMode::Countdown && !state.timer.running
    }

    fn mode_line(active: TimerMode) -> Line<'static> {
        let label = |mode: TimerMode, text: &'static str| {
            let cell = format!(" {text} ");
            if mode == active {
                Span::styled(cell, Style::default().reversed())
            } else {
                Span::raw(cell)
            }
        };
        Line::from(vec![
            label(TimerMode::Stopwatch, "Stopwatch"),
            Span::raw(" "),
            label(TimerMode::Countdown, "Countdown"),
        ])
    }

    fn preset_line(state: &AppState) -> Line<'static> {
        let mut spans = vec![Span::styled("Set minutes: ", Style::default().dim())];
        for (i, minutes) in COUNTDOWN_PRESETS_MINUTES.iter().enumerate() {
            let cell = format!("[{}] {minutes}m ", i + 1);
            if state.timer.configured_countdown_seconds == minutes * 60 {
                spans.push(Span::styled(cell, Style::default().bold()));
            } else {
                spans.push(Span::raw(cell));
            }
        }
        Line::from(spans)
    }
}

impl Default for TimerComponent {
    fn default() -> Self {
        Self::new()
    }
}
