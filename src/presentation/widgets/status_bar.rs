use ratatui::{prelude::*, widgets::Paragraph};

use crate::core::state::ui::Tab;

/// Context the status bar needs to pick its key hints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewContext {
    pub active_tab: Tab,
    pub editing: bool,
    pub bar_style: Style,
}

pub struct StatusBarWidget {
    message: Option<String>,
    ctx: ViewContext,
}

impl StatusBarWidget {
    pub fn new(message: Option<String>, ctx: ViewContext) -> Self {
        Self { message, ctx }
    }

    /// Key hints for the active tab. The note editor takes over the
    /// keyboard, so it gets its own line.
    pub fn hints(&self) -> &'static str {
        if self.ctx.active_tab == Tab::Notes && self.ctx.editing {
            return "Type to edit | Tab: title/content | Ctrl+S: save | Esc: cancel";
        }

        match self.ctx.active_tab {
            Tab::Calculator => "0-9 .: digits | + - * /: operator | Enter: = | c: clear | Tab: next tab | q: quit",
            Tab::Notes => "j/k: select | n: new | e: edit | d: delete | Esc: deselect | Tab: next tab | q: quit",
            Tab::Timer => "Space: start/stop | r: reset | m: mode | 1-5: presets | Tab: next tab | q: quit",
        }
    }
}

impl Widget for StatusBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),    // Main content area (not used by status bar)
                Constraint::Length(1), // Key hint line
                Constraint::Length(1), // Status message line
            ],
        )
        .split(area);

        let hint_span = Span::styled(self.hints(), Style::default().fg(Color::Gray).italic());
        Paragraph::new(hint_span)
            .style(Style::default().bg(Color::Black).patch(self.ctx.bar_style))
            .render(layout[1], buf);

        let message = match &self.message {
            Some(message) => message.clone(),
            None => "".to_string(),
        };
        Paragraph::new(message).render(layout[2], buf);
    }
}
