use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::state::ui::TextAreaState;
use crate::core::textarea_engine::TextAreaEngine;
use crate::domain::ui::{CursorPosition, TextSelection};

/// Production draft engine backed by tui-textarea.
///
/// Each run builds a throwaway `TextArea`, seeds it from the draft
/// snapshot, replays the queued keys and reads the result back out.
/// No editor state survives between runs; the snapshot held in the
/// notes state is the only source of truth.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    /// Build a widget from a draft snapshot. The notes view renders
    /// through this too, so what the editor shows is exactly what the
    /// key replay operates on.
    pub fn hydrate(snapshot: &TextAreaState) -> TextArea<'static> {
        let mut textarea = TextArea::default();
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        Self::jump_to(&mut textarea, snapshot.cursor_position);
        if let Some(selection) = &snapshot.selection {
            Self::jump_to(&mut textarea, selection.start);
            textarea.start_selection();
            Self::jump_to(&mut textarea, selection.end);
        }
        textarea
    }

    fn jump_to(textarea: &mut TextArea<'_>, position: CursorPosition) {
        textarea.move_cursor(CursorMove::Jump(
            position.line as u16,
            position.column as u16,
        ));
    }

    fn snapshot_of(textarea: &TextArea<'_>) -> TextAreaState {
        let content = textarea.lines().join("\n");
        let (line, column) = textarea.cursor();
        let selection = textarea.selection_range().map(|(start, end)| {
            TextSelection::new(
                CursorPosition::new(start.0, start.1),
                CursorPosition::new(end.0, end.1),
            )
        });
        TextAreaState::new(content, CursorPosition::new(line, column), selection)
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = Self::hydrate(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        Self::snapshot_of(&textarea)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    fn chars(text: &str) -> Vec<KeyEvent> {
        text.chars()
            .map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_into_empty_draft() {
        let engine = TuiTextAreaEngine;

        let out = engine.apply_keys(&TextAreaState::empty(), &chars("Groceries"));

        assert_eq!(out.content, "Groceries");
        assert_eq!(out.cursor_position, CursorPosition { line: 0, column: 9 });
        assert_eq!(out.selection, None);
    }

    #[test]
    fn test_inserting_mid_line() {
        let engine = TuiTextAreaEngine;
        let snap = TextAreaState::new(
            "grceries".to_string(),
            CursorPosition { line: 0, column: 2 },
            None,
        );

        let out = engine.apply_keys(&snap, &chars("o"));

        assert_eq!(out.content, "groceries");
        assert_eq!(out.cursor_position, CursorPosition { line: 0, column: 3 });
        // original snapshot untouched
        assert_eq!(snap.content, "grceries");
    }

    #[test]
    fn test_enter_splits_line() {
        let engine = TuiTextAreaEngine;
        let snap = TextAreaState::new(
            "buy milk".to_string(),
            CursorPosition { line: 0, column: 3 },
            None,
        );

        let out = engine.apply_keys(&snap, &[key(KeyCode::Enter)]);

        assert_eq!(out.content, "buy\n milk");
        assert_eq!(out.cursor_position, CursorPosition { line: 1, column: 0 });
    }

    #[test]
    fn test_backspace_joins_lines() {
        let engine = TuiTextAreaEngine;
        let snap = TextAreaState::new(
            "milk\neggs".to_string(),
            CursorPosition { line: 1, column: 0 },
            None,
        );

        let out = engine.apply_keys(&snap, &[key(KeyCode::Backspace)]);

        assert_eq!(out.content, "milkeggs");
        assert_eq!(out.cursor_position, CursorPosition { line: 0, column: 4 });
    }

    #[test]
    fn test_backspace_deletes_selection() {
        let engine = TuiTextAreaEngine;
        let snap = TextAreaState::new(
            "buy milk".to_string(),
            CursorPosition { line: 0, column: 4 },
            Some(TextSelection {
                start: CursorPosition { line: 0, column: 0 },
                end: CursorPosition { line: 0, column: 4 },
            }),
        );

        let out = engine.apply_keys(&snap, &[key(KeyCode::Backspace)]);

        assert_eq!(out.content, "milk");
        assert_eq!(out.cursor_position, CursorPosition { line: 0, column: 0 });
    }

    #[test]
    fn test_no_keys_round_trips_snapshot() {
        let engine = TuiTextAreaEngine;
        let snap = TextAreaState::with_content("milk\neggs");

        let out = engine.apply_keys(&snap, &[]);

        assert_eq!(out, snap);
    }
}
