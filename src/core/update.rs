use crate::{
    core::cmd::Cmd,
    core::msg::{notes::NotesMsg, Msg},
    core::state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Calculator messages (delegated to CalculatorState)
        Msg::Calculator(calculator_msg) => {
            let commands = state.calculator.update(calculator_msg);
            (state, commands)
        }

        // Timer messages (delegated to TimerState)
        Msg::Timer(timer_msg) => {
            let commands = state.timer.update(timer_msg);
            (state, commands)
        }

        // UI messages (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let commands = state.ui.update(ui_msg);
            (state, commands)
        }

        // Notes messages: delegated to NotesState, with status line
        // feedback decided here so the reducer stays a pure
        // list-and-drafts state machine
        Msg::Notes(notes_msg) => {
            let verb = match &notes_msg {
                NotesMsg::SaveDraft if state.notes.selected_id.is_some() => Some("Updated"),
                NotesMsg::SaveDraft => Some("Saved"),
                NotesMsg::Delete(..) | NotesMsg::DeleteSelected => Some("Deleted"),
                _ => None,
            };
            // Delete removes the note before we can name it, so capture now
            let deleted_title = match &notes_msg {
                NotesMsg::Delete(id) => state
                    .notes
                    .notes
                    .iter()
                    .find(|n| n.id == *id)
                    .map(|n| n.title.clone()),
                NotesMsg::DeleteSelected => state.selected_note().map(|n| n.title.clone()),
                _ => None,
            };

            let commands = state.notes.update(notes_msg);

            let persisted = commands
                .iter()
                .any(|cmd| matches!(cmd, Cmd::SaveNotes { .. }));
            if persisted {
                if let Some(verb) = verb {
                    let title =
                        deleted_title.or_else(|| state.selected_note().map(|n| n.title.clone()));
                    if let Some(title) = title {
                        state.system.status_message = Some(format!("[{verb}] {title}"));
                    }
                }
            }

            (state, commands)
        }
    }
}
