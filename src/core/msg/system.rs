use serde::{Deserialize, Serialize};

/// App-shell messages: lifecycle, terminal geometry and the status line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}

impl SystemMsg {
    /// System messages are rare one-offs, so none is excluded from
    /// message-level debug logging.
    pub fn is_frequent(&self) -> bool {
        false
    }
}
