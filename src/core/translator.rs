use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{
    msg::{
        calculator::CalculatorMsg, notes::NotesMsg, system::SystemMsg, timer::TimerMsg, ui::UiMsg,
        Msg,
    },
    raw_msg::RawMsg,
    state::notes::DraftFocus,
    state::timer::COUNTDOWN_PRESETS_MINUTES,
    state::ui::Tab,
    state::AppState,
};
use crate::domain::calc::CalcOp;
use crate::presentation::config::keybindings::{Action, Mode};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Wall-clock seconds drive the timer, whatever tab is showing
        RawMsg::SecondElapsed => vec![Msg::Timer(TimerMsg::Tick)],

        // System events
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings
    if state.ui.active_tab == Tab::Notes && state.notes.is_editing() {
        translate_edit_mode_keys(key, state)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Key bindings while the note editor is open. These are fixed: the
/// editor needs the whole keyboard for typing.
fn translate_edit_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::Notes(NotesMsg::SaveDraft)],

        KeyEvent {
            code: KeyCode::Esc, ..
        } => vec![Msg::Notes(NotesMsg::CancelEdit)],

        KeyEvent {
            code: KeyCode::Tab, ..
        } => vec![Msg::Notes(NotesMsg::ToggleFocus)],

        // The title is a single line; Enter moves on to the content
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } if state.notes.focus == DraftFocus::Title => vec![Msg::Notes(NotesMsg::FocusContent)],

        // Hybrid approach: delegate all other input to the TextArea engine
        _ => vec![Msg::Notes(NotesMsg::ProcessDraftKey(key))],
    }
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Tab-specific bindings shadow global ones
    let keybindings = &state.config.config.keybindings;
    if let Some(action) = keybindings.action_for(active_mode(state), &key) {
        return translate_action_to_msg(action, state);
    }
    if let Some(action) = keybindings.action_for(Mode::Global, &key) {
        return translate_action_to_msg(action, state);
    }

    // The calculator face takes digits and operators directly
    if state.ui.active_tab == Tab::Calculator {
        return translate_calculator_token(key);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::NextTab => vec![Msg::Ui(UiMsg::NextTab)],

        Action::ClearCalculator => vec![Msg::Calculator(CalculatorMsg::Clear)],
        Action::Evaluate => vec![Msg::Calculator(CalculatorMsg::Evaluate)],

        Action::NewNote => vec![Msg::Notes(NotesMsg::NewDraft)],
        Action::EditNote => vec![Msg::Notes(NotesMsg::EditSelected)],
        Action::DeleteNote => vec![Msg::Notes(NotesMsg::DeleteSelected)],
        Action::NextNote => vec![Msg::Notes(NotesMsg::SelectNext)],
        Action::PreviousNote => vec![Msg::Notes(NotesMsg::SelectPrevious)],
        Action::Deselect => vec![Msg::Notes(NotesMsg::Deselect)],

        Action::StartStop => vec![Msg::Timer(TimerMsg::StartStop)],
        Action::Reset => vec![Msg::Timer(TimerMsg::Reset)],
        Action::SwitchMode => vec![Msg::Timer(TimerMsg::SwitchMode(state.timer.mode.toggled()))],
        Action::Preset1 => preset_msg(0),
        Action::Preset2 => preset_msg(1),
        Action::Preset3 => preset_msg(2),
        Action::Preset4 => preset_msg(3),
        Action::Preset5 => preset_msg(4),
    }
}

fn preset_msg(index: usize) -> Vec<Msg> {
    vec![Msg::Timer(TimerMsg::SetConfiguredMinutes(
        COUNTDOWN_PRESETS_MINUTES[index],
    ))]
}

/// Digits, the decimal point and arithmetic operators feed the
/// calculator directly; everything else is ignored.
fn translate_calculator_token(key: KeyEvent) -> Vec<Msg> {
    // Ctrl/Alt chords are never calculator input
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return vec![];
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
            vec![Msg::Calculator(CalculatorMsg::InputToken(c))]
        }

        KeyCode::Char('=') | KeyCode::Enter => vec![Msg::Calculator(CalculatorMsg::Evaluate)],

        KeyCode::Char(c) => match CalcOp::from_char(c) {
            Some(op) => vec![Msg::Calculator(CalculatorMsg::ChooseOperation(op))],
            None => vec![],
        },

        _ => vec![],
    }
}

/// Tab-specific keybinding context for the active tab
fn active_mode(state: &AppState) -> Mode {
    match state.ui.active_tab {
        Tab::Calculator => Mode::Calculator,
        Tab::Notes => Mode::Notes,
        Tab::Timer => Mode::Timer,
    }
}
