use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::core::state::notes::DraftFocus;
use crate::core::state::ui::TextAreaState;
use crate::domain::note::Note;

/// Messages specific to NotesState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NotesMsg {
    // List navigation
    SelectNext,
    SelectPrevious,
    Select(u64),
    Deselect,

    // Record lifecycle
    NewDraft,
    EditSelected,
    SaveDraft,
    CancelEdit,
    DeleteSelected,
    Delete(u64),

    // Draft editing (stateless text-area round trip)
    ToggleFocus,
    FocusContent,
    ProcessDraftKey(KeyEvent),
    DraftEdited(DraftFocus, TextAreaState),

    // Store round trip
    Load,
    Loaded(Vec<Note>),
}
