use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::core::state::ui::TextAreaState;
use crate::core::{cmd::Cmd, msg::notes::NotesMsg};
use crate::domain::note::Note;

/// Which draft field receives keystrokes while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DraftFocus {
    #[default]
    Title,
    Content,
}

impl DraftFocus {
    pub fn toggled(self) -> Self {
        match self {
            DraftFocus::Title => DraftFocus::Content,
            DraftFocus::Content => DraftFocus::Title,
        }
    }
}

/// Notes list plus the transient edit buffer
///
/// The list is ordered newest first. Every accepted mutation emits a
/// `Cmd::SaveNotes` carrying the whole list; the store overwrites its
/// single record wholesale.
#[derive(Debug, Clone)]
pub struct NotesState {
    pub notes: Vec<Note>,
    pub selected_id: Option<u64>,
    pub title_draft: TextAreaState,
    pub content_draft: TextAreaState,
    pub focus: DraftFocus,
    pub editing: bool,
    /// Queue for stateless TextArea processing
    pub pending_input_keys: Vec<KeyEvent>,
    next_id: u64,
}

impl Default for NotesState {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            selected_id: None,
            title_draft: TextAreaState::empty(),
            content_draft: TextAreaState::empty(),
            focus: DraftFocus::Title,
            editing: false,
            pending_input_keys: Vec::new(),
            next_id: 1,
        }
    }
}

impl NotesState {
    /// Notes-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: NotesMsg) -> Vec<Cmd> {
        match msg {
            // List navigation
            NotesMsg::SelectNext => {
                self.move_selection(1);
                vec![]
            }

            NotesMsg::SelectPrevious => {
                self.move_selection(-1);
                vec![]
            }

            NotesMsg::Select(id) => {
                if let Some(note) = self.notes.iter().find(|n| n.id == id) {
                    let (title, content) = (note.title.clone(), note.content.clone());
                    self.selected_id = Some(id);
                    self.load_drafts(&title, &content);
                }
                vec![]
            }

            NotesMsg::Deselect => {
                self.selected_id = None;
                self.clear_drafts();
                vec![]
            }

            // Record lifecycle
            NotesMsg::NewDraft => {
                self.selected_id = None;
                self.clear_drafts();
                self.editing = true;
                vec![]
            }

            NotesMsg::EditSelected => {
                if self.selected_id.is_some() {
                    self.editing = true;
                    self.focus = DraftFocus::Title;
                }
                vec![]
            }

            NotesMsg::SaveDraft => self.save_draft(),

            NotesMsg::CancelEdit => {
                self.editing = false;
                self.pending_input_keys.clear();
                vec![]
            }

            NotesMsg::DeleteSelected => match self.selected_id {
                Some(id) => self.delete(id),
                None => vec![],
            },

            NotesMsg::Delete(id) => self.delete(id),

            // Draft editing
            NotesMsg::ToggleFocus => {
                if self.editing {
                    self.focus = self.focus.toggled();
                }
                vec![]
            }

            NotesMsg::FocusContent => {
                if self.editing {
                    self.focus = DraftFocus::Content;
                }
                vec![]
            }

            NotesMsg::ProcessDraftKey(key) => {
                if !self.editing {
                    return vec![];
                }
                self.pending_input_keys.push(key);
                vec![Cmd::ApplyDraftKeys {
                    target: self.focus,
                    snapshot: self.focused_draft().clone(),
                    keys: self.pending_input_keys.clone(),
                }]
            }

            NotesMsg::DraftEdited(target, snapshot) => {
                match target {
                    DraftFocus::Title => self.title_draft = snapshot,
                    DraftFocus::Content => self.content_draft = snapshot,
                }
                self.pending_input_keys.clear();
                vec![]
            }

            // Store round trip
            NotesMsg::Load => vec![Cmd::LoadNotes],

            NotesMsg::Loaded(notes) => {
                self.next_id = notes.iter().map(|n| n.id).max().map_or(1, |max| max + 1);
                self.notes = notes;
                vec![]
            }
        }
    }

    /// Create or update depending on whether a note is selected.
    /// Rejected without effect when the title trims to empty.
    fn save_draft(&mut self) -> Vec<Cmd> {
        let title = self.title_draft.content.trim().to_string();
        if title.is_empty() {
            return vec![];
        }

        match self.selected_id {
            Some(id) => {
                let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
                    return vec![];
                };
                note.title = title;
                note.content = self.content_draft.content.clone();
            }
            None => {
                let note = Note::new(self.next_id, title, self.content_draft.content.clone());
                self.next_id += 1;
                self.selected_id = Some(note.id);
                self.title_draft = TextAreaState::with_content(note.title.clone());
                self.notes.insert(0, note);
            }
        }

        vec![self.persist()]
    }

    fn delete(&mut self, id: u64) -> Vec<Cmd> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return vec![];
        }

        if self.selected_id == Some(id) {
            self.selected_id = None;
            self.clear_drafts();
            self.editing = false;
        }

        vec![self.persist()]
    }

    fn persist(&self) -> Cmd {
        Cmd::SaveNotes {
            notes: self.notes.clone(),
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.notes.is_empty() {
            return;
        }

        let index = match self.selected_index() {
            Some(current) => current
                .saturating_add_signed(delta)
                .min(self.notes.len() - 1),
            None => 0,
        };

        let note = &self.notes[index];
        let (id, title, content) = (note.id, note.title.clone(), note.content.clone());
        self.selected_id = Some(id);
        self.load_drafts(&title, &content);
    }

    fn load_drafts(&mut self, title: &str, content: &str) {
        self.title_draft = TextAreaState::with_content(title);
        self.content_draft = TextAreaState::with_content(content);
        self.focus = DraftFocus::Title;
        self.pending_input_keys.clear();
    }

    fn clear_drafts(&mut self) {
        self.title_draft = TextAreaState::empty();
        self.content_draft = TextAreaState::empty();
        self.focus = DraftFocus::Title;
        self.pending_input_keys.clear();
    }

    fn focused_draft(&self) -> &TextAreaState {
        match self.focus {
            DraftFocus::Title => &self.title_draft,
            DraftFocus::Content => &self.content_draft,
        }
    }

    /// Selected note, if the selection still points at a live note.
    pub fn selected_note(&self) -> Option<&Note> {
        self.selected_id
            .and_then(|id| self.notes.iter().find(|n| n.id == id))
    }

    /// Position of the selected note in the newest-first list.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_id
            .and_then(|id| self.notes.iter().position(|n| n.id == id))
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
