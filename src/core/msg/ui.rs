use serde::{Deserialize, Serialize};

use crate::core::state::ui::Tab;

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    /// Jump straight to a tab.
    SelectTab(Tab),
    /// Cycle to the next tab, wrapping around.
    NextTab,
}

impl UiMsg {
    pub fn is_frequent(&self) -> bool {
        false
    }
}
