//! Plain value types and the arithmetic on them: calculator operators
//! and display parsing, clock formatting for the timer face, the note
//! record, and the cursor/selection pair drafts are snapshotted with.
//! Nothing in here knows about messages, commands or the terminal.

pub mod calc;
pub mod clock;
pub mod note;
pub mod ui;
