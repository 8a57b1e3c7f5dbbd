//! Notes tab component
//!
//! Left pane: the note list, newest first. Right pane: the edit buffer,
//! a single-line title field over a multi-line content field. The
//! drafts are rendered through the same engine that replays keystrokes
//! into them, so the view always matches the editing state.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::notes::DraftFocus;
use crate::core::state::AppState;
use crate::infrastructure::tui::textarea_engine::TuiTextAreaEngine;
use crate::presentation::config::keybindings::Mode;

const TITLE_PLACEHOLDER: &str = "Note title...";
const CONTENT_PLACEHOLDER: &str = "Write your note here...";

#[derive(Debug, Clone)]
pub struct NotesComponent;

impl NotesComponent {
    pub fn new() -> Self {
        Self
    }

    /// Render the notes tab into the given area.
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        self.render_list(state, frame, panes[0]);
        self.render_editor(state, frame, panes[1]);
    }

    fn render_list(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!("Notes ({})", state.notes.len()))
            .borders(Borders::ALL);

        if state.notes.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let empty = Paragraph::new("No notes yet")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let items: Vec<ListItem<'_>> = state
            .notes
            .notes
            .iter()
            .map(|note| {
                ListItem::new(Text::from(vec![
                    Line::from(note.title.clone()),
                    Line::from(Span::styled(
                        note.created_at_label(),
                        Style::default().fg(Color::DarkGray),
                    )),
                ]))
            })
            .collect();

        let highlight = Style::default().reversed().patch(
            state
                .config
                .config
                .styles
                .style_for(Mode::Notes, "selected_note"),
        );
        let list = List::new(items).block(block).highlight_style(highlight);

        let mut list_state = ListState::default();
        list_state.select(state.notes.selected_index());
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_editor(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let fields = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        if state.notes.is_editing() {
            self.render_draft_field(state, frame, fields[0], DraftFocus::Title);
            self.render_draft_field(state, frame, fields[1], DraftFocus::Content);
        } else {
            self.render_preview_field(
                frame,
                fields[0],
                "Title",
                &state.notes.title_draft.content,
                TITLE_PLACEHOLDER,
            );
            self.render_preview_field(
                frame,
                fields[1],
                "Content",
                &state.notes.content_draft.content,
                CONTENT_PLACEHOLDER,
            );
        }
    }

    /// One live draft field. Only the focused field shows a cursor.
    fn render_draft_field(&self, state: &AppState, frame: &mut Frame, area: Rect, field: DraftFocus) {
        let (snapshot, title) = match field {
            DraftFocus::Title => (&state.notes.title_draft, "Title"),
            DraftFocus::Content => (&state.notes.content_draft, "Content"),
        };
        let focused = state.notes.focus == field;

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut textarea = TuiTextAreaEngine::hydrate(snapshot);
        textarea.set_block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        textarea.set_cursor_line_style(Style::default());
        if !focused {
            textarea.set_cursor_style(Style::default());
        }
        frame.render_widget(&textarea, area);
    }

    /// Read-only rendition of a draft outside edit mode.
    fn render_preview_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &'static str,
        content: &str,
        placeholder: &'static str,
    ) {
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let text = if content.is_empty() {
            Text::from(Span::styled(
                placeholder,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Text::from(content.to_string())
        };
        frame.render_widget(Paragraph::new(text).block(block), area);
    }
}

impl Default for NotesComponent {
    fn default() -> Self {
        Self::new()
    }
}
