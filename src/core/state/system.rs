use crate::core::cmd::{Cmd, TuiCommand};
use crate::core::msg::system::SystemMsg;

/// App-shell state that no single widget owns: quit/suspend flags and
/// the transient status line shown under the tabs.
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

impl SystemState {
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => self.should_quit = true,
            SystemMsg::Suspend => self.should_suspend = true,
            SystemMsg::Resume => self.should_suspend = false,

            // The terminal itself has to react; everything else is pure state
            SystemMsg::Resize(width, height) => {
                return vec![Cmd::Tui(TuiCommand::Resize { width, height })];
            }

            SystemMsg::UpdateStatusMessage(message) => self.status_message = Some(message),
            SystemMsg::ClearStatusMessage => self.status_message = None,
            SystemMsg::ShowError(error) => self.status_message = Some(format!("Error: {error}")),
        }

        vec![]
    }
}
