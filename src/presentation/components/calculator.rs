//! Calculator tab component
//!
//! Renders the display and the four-function key pad. All input goes
//! through the translator; the pad is a read-only reminder of the keys,
//! with the pending operator highlighted.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;
use crate::presentation::config::keybindings::Mode;

/// Cell labels of the key pad, row by row. Mirrors the physical layout
/// of a pocket calculator: clear and operators on the right edge.
const KEYPAD_ROWS: [&[&str]; 5] = [
    &["C", "÷", "×"],
    &["7", "8", "9", "-"],
    &["4", "5", "6", "+"],
    &["1", "2", "3"],
    &["0", ".", "="],
];

#[derive(Debug, Clone)]
pub struct CalculatorComponent;

impl CalculatorComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the calculator into the given area.
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Calculator").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(1), // Display
                Constraint::Length(1), // Spacer
                Constraint::Length(KEYPAD_ROWS.len() as u16),
                Constraint::Min(0),
            ])
            .split(inner);

        let display_style = Style::default().bold().patch(
            state
                .config
                .config
                .styles
                .style_for(Mode::Calculator, "display"),
        );
        let display = Paragraph::new(state.calculator.display.clone())
            .style(display_style)
            .alignment(Alignment::Right);
        frame.render_widget(display, layout[0]);

        let pending = state.calculator.pending_op.map(|op| op.symbol());
        let pad = Paragraph::new(Self::keypad_lines(pending)).alignment(Alignment::Center);
        frame.render_widget(pad, layout[2]);
    }

    /// The key pad as styled lines, with the pending operator reversed.
    fn keypad_lines(pending: Option<&str>) -> Vec<Line<'static>> {
        KEYPAD_ROWS
            .iter()
            .map(|row| {
                let spans: Vec<Span<'static>> = row
                    .iter()
                    .map(|label| {
                        let cell = format!(" {label:^3} ");
                        if pending == Some(*label) {
                            Span::styled(cell, Style::default().reversed())
                        } else {
                            Span::raw(cell)
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Default for CalculatorComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::core::msg::calculator::CalculatorMsg;
    use crate::domain::calc::CalcOp;

    fn render_to_text(state: &AppState) -> String {
        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).expect("terminal");
        let component = CalculatorComponent::new();
        terminal
            .draw(|frame| component.view(state, frame, frame.area()))
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_keypad_covers_every_token() {
        let labels: Vec<&str> = KEYPAD_ROWS.iter().flat_map(|row| row.iter().copied()).collect();
        for digit in ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "."] {
            assert!(labels.contains(&digit), "missing {digit}");
        }
        for op in ["+", "-", "×", "÷", "=", "C"] {
            assert!(labels.contains(&op), "missing {op}");
        }
    }

    #[test]
    fn test_keypad_highlights_pending_operator() {
        let lines = CalculatorComponent::keypad_lines(Some("+"));
        let styled: Vec<&Span<'_>> = lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .filter(|span| span.style.add_modifier.contains(Modifier::REVERSED))
            .collect();
        assert_eq!(styled.len(), 1);
        assert!(styled[0].content.contains('+'));
    }

    #[test]
    fn test_keypad_unstyled_without_pending() {
        let lines = CalculatorComponent::keypad_lines(None);
        let highlighted = lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .filter(|span| span.style.add_modifier.contains(Modifier::REVERSED))
            .count();
        assert_eq!(highlighted, 0);
    }

    #[test]
    fn test_view_shows_display_value() {
        let mut state = AppState::default();
        for c in ['4', '2'] {
            state.calculator.update(CalculatorMsg::InputToken(c));
        }

        let text = render_to_text(&state);
        assert!(text.contains("42"));
        assert!(text.contains("Calculator"));
    }

    #[test]
    fn test_view_shows_result_after_evaluate() {
        let mut state = AppState::default();
        state.calculator.update(CalculatorMsg::InputToken('7'));
        state
            .calculator
            .update(CalculatorMsg::ChooseOperation(CalcOp::Add));
        state.calculator.update(CalculatorMsg::InputToken('3'));
        state.calculator.update(CalculatorMsg::Evaluate);

        let text = render_to_text(&state);
        assert!(text.contains("10"));
    }

    #[test]
    fn test_view_does_not_panic_on_tiny_area() {
        let state = AppState::default();
        let backend = TestBackend::new(5, 2);
        let mut terminal = Terminal::new(backend).expect("terminal");
        let component = CalculatorComponent::new();
        terminal
            .draw(|frame| component.view(&state, frame, frame.area()))
            .expect("draw");
    }
}
