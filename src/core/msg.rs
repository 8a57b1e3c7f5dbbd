use serde::{Deserialize, Serialize};

pub mod calculator;
pub mod notes;
pub mod system;
pub mod timer;
pub mod ui;

use calculator::CalculatorMsg;
use notes::NotesMsg;
use system::SystemMsg;
use timer::TimerMsg;
use ui::UiMsg;

/// Domain messages representing application intent and business logic
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Calculator operations (delegated to CalculatorState)
    Calculator(CalculatorMsg),

    // Notes operations (delegated to NotesState)
    Notes(NotesMsg),

    // Timer operations (delegated to TimerState)
    Timer(TimerMsg),

    // Tab and view operations (delegated to UiState)
    Ui(UiMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Timer(msg) => msg.is_frequent(),
            Msg::Ui(msg) => msg.is_frequent(),
            Msg::Calculator(_) | Msg::Notes(_) => false,
        }
    }
}
