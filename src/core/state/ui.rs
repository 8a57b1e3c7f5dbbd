use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::core::{cmd::Cmd, msg::ui::UiMsg};
use crate::domain::ui::{CursorPosition, TextSelection};

/// Complete state representation of a TextArea component
/// This struct encapsulates all mutable state that needs to be
/// preserved across TextArea recreation in the stateless approach
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextAreaState {
    /// The complete text content
    pub content: String,
    /// Current cursor position within the text
    pub cursor_position: CursorPosition,
    /// Active text selection range, if any
    pub selection: Option<TextSelection>,
}

impl TextAreaState {
    /// Create new TextAreaState
    pub fn new(
        content: String,
        cursor_position: CursorPosition,
        selection: Option<TextSelection>,
    ) -> Self {
        Self {
            content,
            cursor_position,
            selection,
        }
    }

    /// Create empty TextAreaState
    pub fn empty() -> Self {
        Default::default()
    }

    /// TextAreaState preloaded with content, cursor at the end.
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let line = content.lines().count().saturating_sub(1);
        let column = content.lines().last().map_or(0, |l| l.chars().count());
        Self {
            content,
            cursor_position: CursorPosition::new(line, column),
            selection: None,
        }
    }

    pub fn content_length(&self) -> usize {
        self.content.len()
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// The three widgets, one visible at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter)]
pub enum Tab {
    #[default]
    Calculator,
    Notes,
    Timer,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Calculator => Tab::Notes,
            Tab::Notes => Tab::Timer,
            Tab::Timer => Tab::Calculator,
        }
    }

    /// Position in the tab bar.
    pub fn index(self) -> usize {
        match self {
            Tab::Calculator => 0,
            Tab::Notes => 1,
            Tab::Timer => 2,
        }
    }
}

/// UI-related state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub active_tab: Tab,
}

impl UiState {
    /// UI-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::SelectTab(tab) => {
                self.active_tab = tab;
                vec![]
            }

            UiMsg::NextTab => {
                self.active_tab = self.active_tab.next();
                vec![]
            }
        }
    }
}
