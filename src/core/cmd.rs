use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::core::msg::Msg;
use crate::core::state::notes::DraftFocus;
use crate::core::state::ui::TextAreaState;
use crate::domain::note::Note;

/// Instructions the executor forwards to the terminal task.
///
/// Redraws are deliberately not expressed here. A render request travels
/// over its own bounded channel and AppRunner coalesces the backlog, so
/// a burst of requests collapses into a single draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// A side effect requested by the update function.
///
/// A command records what should happen (persist these notes, show this
/// notification), never how. The executor resolves each variant against
/// the services injected at startup, which keeps the reducers pure and
/// lets tests substitute in-memory stand-ins for the real store and
/// notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Notes persistence
    SaveNotes {
        notes: Vec<Note>,
    },
    LoadNotes,

    // Desktop notification through the terminal
    Notify {
        summary: String,
        body: String,
    },

    // Draft editing: apply queued keystrokes to a text area snapshot
    ApplyDraftKeys {
        target: DraftFocus,
        snapshot: TextAreaState,
        keys: Vec<KeyEvent>,
    },

    // Terminal plumbing
    Tui(TuiCommand),
    RequestRender,

    // Logging
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Fold a command list into a single command, flattening the trivial
    /// cases instead of wrapping them.
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.into_iter().next().unwrap(),
            _ => Cmd::Batch(commands),
        }
    }

    /// True when execution may block on I/O. Only the store qualifies;
    /// everything else completes inline.
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::SaveNotes { .. } | Cmd::LoadNotes => true,

            Cmd::Batch(cmds) => cmds.iter().any(Cmd::is_async),

            Cmd::Notify { .. }
            | Cmd::ApplyDraftKeys { .. }
            | Cmd::Tui(..)
            | Cmd::RequestRender
            | Cmd::LogError { .. }
            | Cmd::LogInfo { .. }
            | Cmd::None => false,
        }
    }

    /// Scheduling weight, smaller first: terminal plumbing beats
    /// user-visible effects, which beat disk, which beats logging.
    pub fn priority(&self) -> u8 {
        match self {
            Cmd::Tui(..) | Cmd::RequestRender => 0,

            Cmd::ApplyDraftKeys { .. } | Cmd::Notify { .. } => 1,

            Cmd::SaveNotes { .. } | Cmd::LoadNotes => 3,

            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,

            // A batch is as urgent as its most urgent member
            Cmd::Batch(cmds) => cmds.iter().map(Cmd::priority).min().unwrap_or(255),

            Cmd::None => 255,
        }
    }
}

/// Outcome of executing one command.
#[derive(Debug, Clone)]
pub enum CmdResult {
    /// Done; the messages carry anything the state needs to hear about
    Success(Vec<Msg>),
    Error(String),
    /// Handed off to an async task, outcome arrives later
    Pending,
}
