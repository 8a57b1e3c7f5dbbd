use crossterm::event::KeyEvent;

use crate::core::state::ui::TextAreaState;

/// Engine interface that applies queued draft keystrokes to a text area
/// snapshot and returns the resulting snapshot. Implementations must be
/// deterministic and free of external side effects: the update path
/// queues keys, the command executor runs the engine, and the edited
/// snapshot travels back as a message.
pub trait TextAreaEngine: Send {
    /// Apply keys to the given snapshot and return the updated snapshot.
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState;
}

/// Engine that swallows keystrokes, leaving drafts untouched. Used in
/// tests and as a stand-in where no editor is wired up.
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, _keys: &[KeyEvent]) -> TextAreaState {
        snapshot.clone()
    }
}
