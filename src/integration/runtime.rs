use std::collections::VecDeque;
use tokio::sync::mpsc;

use crate::core::{
    cmd::{Cmd, TuiCommand},
    cmd_executor::CmdExecutor,
    msg::Msg,
    raw_msg::RawMsg,
    state::AppState,
    translator::translate_raw_to_domain,
    update::update,
};

const NO_EXECUTOR: &str = "No command executor configured. Call set_executor() first.";

/// Queue fed either in-process or through a cloneable channel sender.
///
/// Items pushed while a pass is running are left for the next one.
struct Inbox<T> {
    queue: VecDeque<T>,
    tx: mpsc::UnboundedSender<T>,
    rx: mpsc::UnboundedReceiver<T>,
}

impl<T> Inbox<T> {
    fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            queue: VecDeque::new(),
            tx,
            rx,
        }
    }

    fn push(&mut self, item: T) {
        self.queue.push_back(item);
    }

    fn sender(&self) -> mpsc::UnboundedSender<T> {
        self.tx.clone()
    }

    /// Take everything queued in-process, then everything sitting in the
    /// channel, in that order.
    fn drain(&mut self) -> Vec<T> {
        let mut items: Vec<T> = self.queue.drain(..).collect();
        while let Ok(item) = self.rx.try_recv() {
            items.push(item);
        }
        items
    }

    fn queued(&self) -> usize {
        self.queue.len()
    }
}

/// The Elm update loop: queues, state and the command executor.
///
/// Raw host events are translated into domain messages, messages run
/// through the pure update function, and the commands that come out are
/// executed against the injected services. Follow-up messages produced
/// by execution (loaded notes, edited drafts, surfaced errors) are fed
/// back into the queue, so one call to [`Runtime::run_update_cycle`]
/// settles the whole round trip.
pub struct Runtime {
    state: AppState,
    msgs: Inbox<Msg>,
    raw_msgs: Inbox<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// A runtime without an executor only cycles state; commands queue up
    /// but [`Runtime::run_update_cycle`] refuses to run them.
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            msgs: Inbox::new(),
            raw_msgs: Inbox::new(),
            cmd_queue: VecDeque::new(),
            cmd_executor: None,
        }
    }

    pub fn new_with_executor(initial_state: AppState, executor: CmdExecutor) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(executor);
        runtime
    }

    pub fn set_executor(&mut self, executor: CmdExecutor) {
        self.cmd_executor = Some(executor);
    }

    /// Cloneable sender for feeding domain messages from another task.
    pub fn msg_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msgs.sender()
    }

    /// Cloneable sender for feeding raw host events from another task.
    pub fn raw_msg_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msgs.sender()
    }

    /// Wire the executor's [`TuiCommand`] channel so `Cmd::Tui` reaches
    /// the terminal task.
    pub fn add_tui_sender(
        &mut self,
        tui_sender: mpsc::UnboundedSender<TuiCommand>,
    ) -> Result<(), String> {
        let Some(executor) = &mut self.cmd_executor else {
            return Err(NO_EXECUTOR.to_string());
        };
        executor.set_tui_sender(tui_sender);
        Ok(())
    }

    /// Wire the channel `Cmd::RequestRender` signals the draw loop on.
    pub fn add_render_request_sender(
        &mut self,
        render_sender: mpsc::Sender<()>,
    ) -> Result<(), String> {
        let Some(executor) = &mut self.cmd_executor else {
            return Err(NO_EXECUTOR.to_string());
        };
        executor.set_render_request_sender(render_sender);
        Ok(())
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Queue a domain message for the next pass.
    pub fn send_msg(&mut self, msg: Msg) {
        self.msgs.push(msg);
    }

    /// Queue a raw host event for the next pass.
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msgs.push(raw_msg);
    }

    /// Take every queued command, leaving the queue empty.
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Drain the command queue through the executor. Follow-up messages
    /// re-enter the message queue; per-command outcomes come back as a
    /// log, with failures folded into it rather than aborting the batch.
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let Some(executor) = &self.cmd_executor else {
            return Err(NO_EXECUTOR.to_string());
        };

        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        if commands.is_empty() {
            return Ok(vec![]);
        }

        let (follow_ups, execution_log) = executor.execute_commands(&commands);
        for msg in follow_ups {
            self.msgs.push(msg);
        }

        Ok(execution_log)
    }

    /// Run one message through the pure update function and queue whatever
    /// commands it produced.
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (next_state, commands) = update(msg, self.state.clone());
        self.state = next_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate pending raw events into domain messages, then run every
    /// pending message through the update function. Returns the commands
    /// produced by this pass.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        for raw_msg in self.raw_msgs.drain() {
            for msg in translate_raw_to_domain(raw_msg, &self.state) {
                self.msgs.push(msg);
            }
        }

        let mut produced = Vec::new();
        for msg in self.msgs.drain() {
            produced.extend(self.process_message(msg));
        }
        produced
    }

    /// Process all messages and execute commands until the cycle settles.
    /// Execution follow-ups re-enter the queue, so a single call covers
    /// e.g. Load -> LoadNotes -> Loaded.
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        let mut full_log = Vec::new();

        loop {
            self.process_all_messages();
            full_log.extend(self.execute_pending_commands()?);

            if self.msgs.queued() == 0 {
                return Ok(full_log);
            }
        }
    }

    /// Queue depths and wiring flags, mostly for tests and debug logging.
    pub fn get_stats(&self) -> RuntimeStats {
        let executor_stats = self.cmd_executor.as_ref().map(CmdExecutor::get_stats);

        RuntimeStats {
            queued_messages: self.msgs.queued(),
            queued_commands: self.cmd_queue.len(),
            notes_count: self.state.notes.len(),
            is_editing: self.state.notes.is_editing(),
            has_executor: executor_stats.is_some(),
            has_tui_support: executor_stats.is_some_and(|stats| stats.has_tui_sender),
        }
    }
}

/// Snapshot of the runtime's queues and wiring.
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub notes_count: usize,
    pub is_editing: bool,
    pub has_executor: bool,
    pub has_tui_support: bool,
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::{eyre, Result};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::msg::calculator::CalculatorMsg;
    use crate::core::msg::notes::NotesMsg;
    use crate::core::msg::system::SystemMsg;
    use crate::core::msg::timer::TimerMsg;
    use crate::core::state::notes::DraftFocus;
    use crate::core::state::timer::TimerMode;
    use crate::core::state::ui::TextAreaState;
    use crate::core::textarea_engine::NoopTextAreaEngine;
    use crate::domain::note::Note;
    use crate::infrastructure::notifier::{NullNotifier, RecordingNotifier};
    use crate::infrastructure::store::{InMemoryStore, NoteStore};
    use crate::infrastructure::tui::textarea_engine::TuiTextAreaEngine;

    struct BrokenStore;

    impl NoteStore for BrokenStore {
        fn load(&self) -> Vec<Note> {
            vec![]
        }

        fn save(&self, _notes: &[Note]) -> Result<()> {
            Err(eyre!("disk full"))
        }
    }

    fn create_test_runtime() -> Runtime {
        Runtime::new(AppState::new())
    }

    fn executor_over(store: InMemoryStore) -> CmdExecutor {
        CmdExecutor::new(
            Box::new(store),
            Box::new(NullNotifier),
            Box::new(TuiTextAreaEngine),
        )
    }

    #[test]
    fn test_fresh_runtime_has_empty_queues() {
        let runtime = create_test_runtime();
        let stats = runtime.get_stats();

        assert_eq!(stats.queued_messages, 0);
        assert_eq!(stats.queued_commands, 0);
        assert_eq!(stats.notes_count, 0);
        assert!(!stats.is_editing);
        assert!(!stats.has_executor);
    }

    #[test]
    fn test_messages_wait_until_processed() {
        let mut runtime = create_test_runtime();

        runtime.send_msg(Msg::Notes(NotesMsg::NewDraft));
        assert_eq!(runtime.get_stats().queued_messages, 1);
        assert!(!runtime.state().notes.is_editing());

        let commands = runtime.process_all_messages();

        assert_eq!(runtime.get_stats().queued_messages, 0);
        assert!(runtime.state().notes.is_editing());
        assert!(commands.is_empty());
    }

    #[test]
    fn test_quit_flag_travels_through_update() {
        let mut runtime = create_test_runtime();

        let commands = runtime.process_message(Msg::System(SystemMsg::Quit));

        assert!(commands.is_empty());
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_process_calculator_messages() {
        let mut runtime = create_test_runtime();

        for c in ['7', '3'] {
            runtime.process_message(Msg::Calculator(CalculatorMsg::InputToken(c)));
        }

        assert_eq!(runtime.state().calculator.display, "73");
    }

    #[test]
    fn test_process_timer_tick_only_while_running() {
        let mut runtime = create_test_runtime();

        // Stopped stopwatch ignores ticks
        runtime.process_message(Msg::Timer(TimerMsg::Tick));
        assert_eq!(runtime.state().timer.elapsed_or_remaining, 0);

        runtime.process_message(Msg::Timer(TimerMsg::StartStop));
        runtime.process_message(Msg::Timer(TimerMsg::Tick));
        assert_eq!(runtime.state().timer.elapsed_or_remaining, 1);
    }

    #[test]
    fn test_save_draft_workflow() {
        let mut runtime = create_test_runtime();

        runtime.process_message(Msg::Notes(NotesMsg::NewDraft));
        runtime.process_message(Msg::Notes(NotesMsg::DraftEdited(
            DraftFocus::Title,
            TextAreaState::with_content("Plan"),
        )));

        let commands = runtime.process_message(Msg::Notes(NotesMsg::SaveDraft));

        assert_eq!(commands.len(), 1);
        match &commands[0] {
            Cmd::SaveNotes { notes } => {
                assert_eq!(notes.len(), 1);
                assert_eq!(notes[0].title, "Plan");
            }
            other => panic!("Expected SaveNotes command, got {other:?}"),
        }
        assert_eq!(
            runtime.state().system.status_message,
            Some("[Saved] Plan".to_string())
        );
    }

    #[test]
    fn test_channel_senders_feed_the_next_pass() {
        let mut runtime = create_test_runtime();
        runtime.process_message(Msg::Timer(TimerMsg::StartStop));

        runtime
            .msg_sender()
            .send(Msg::Notes(NotesMsg::NewDraft))
            .unwrap();
        runtime
            .raw_msg_sender()
            .send(RawMsg::SecondElapsed)
            .unwrap();
        assert!(!runtime.state().notes.is_editing());
        assert_eq!(runtime.state().timer.elapsed_or_remaining, 0);

        runtime.process_all_messages();

        assert!(runtime.state().notes.is_editing());
        assert_eq!(runtime.state().timer.elapsed_or_remaining, 1);
    }

    #[test]
    fn test_pending_commands_drain_the_queue() {
        let mut runtime = create_test_runtime();

        runtime.process_message(Msg::Notes(NotesMsg::NewDraft));
        runtime.process_message(Msg::Notes(NotesMsg::DraftEdited(
            DraftFocus::Title,
            TextAreaState::with_content("One"),
        )));
        runtime.process_message(Msg::Notes(NotesMsg::SaveDraft));

        assert_eq!(runtime.pending_commands().len(), 1);
        assert!(runtime.pending_commands().is_empty());
    }

    #[test]
    fn test_run_update_cycle_loads_notes_back() {
        let store = InMemoryStore::with_notes(vec![
            Note::new(2, "Second", ""),
            Note::new(1, "First", "body"),
        ]);
        let mut runtime = Runtime::new_with_executor(AppState::new(), executor_over(store));

        runtime.send_msg(Msg::Notes(NotesMsg::Load));
        let log = runtime.run_update_cycle().unwrap();

        assert!(log.iter().any(|line| line.contains("✓ Executed: LoadNotes")));
        assert_eq!(runtime.state().notes.len(), 2);
        assert_eq!(runtime.state().notes.notes[0].title, "Second");
    }

    #[test]
    fn test_run_update_cycle_persists_saved_note() {
        let store = InMemoryStore::new();
        let mut runtime = Runtime::new_with_executor(AppState::new(), executor_over(store.clone()));

        runtime.send_msg(Msg::Notes(NotesMsg::NewDraft));
        runtime.send_msg(Msg::Notes(NotesMsg::DraftEdited(
            DraftFocus::Title,
            TextAreaState::with_content("Groceries"),
        )));
        runtime.send_msg(Msg::Notes(NotesMsg::SaveDraft));

        let log = runtime.run_update_cycle().unwrap();

        assert!(log
            .iter()
            .any(|line| line.contains("✓ Executed: SaveNotes(1)")));
        assert_eq!(store.saved().len(), 1);
        assert_eq!(store.saved()[0].title, "Groceries");
    }

    #[test]
    fn test_run_update_cycle_applies_draft_keys() {
        let mut runtime =
            Runtime::new_with_executor(AppState::new(), executor_over(InMemoryStore::new()));

        runtime.send_msg(Msg::Notes(NotesMsg::NewDraft));
        runtime.send_msg(Msg::Notes(NotesMsg::ProcessDraftKey(KeyEvent::new(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
        ))));

        runtime.run_update_cycle().unwrap();

        // The engine ran and the edited snapshot travelled back
        assert_eq!(runtime.state().notes.title_draft.content, "a");
        assert!(runtime.state().notes.pending_input_keys.is_empty());
    }

    #[test]
    fn test_run_update_cycle_surfaces_store_failure() {
        let executor = CmdExecutor::new(
            Box::new(BrokenStore),
            Box::new(NullNotifier),
            Box::new(NoopTextAreaEngine),
        );
        let mut runtime = Runtime::new_with_executor(AppState::new(), executor);

        runtime.send_msg(Msg::Notes(NotesMsg::NewDraft));
        runtime.send_msg(Msg::Notes(NotesMsg::DraftEdited(
            DraftFocus::Title,
            TextAreaState::with_content("Doomed"),
        )));
        runtime.send_msg(Msg::Notes(NotesMsg::SaveDraft));

        let log = runtime.run_update_cycle().unwrap();

        assert!(log.iter().any(|line| line.contains("✗ Failed")));
        // The failure lands in the status line instead of crashing
        let status = runtime.state().system.status_message.clone();
        assert!(status.is_some_and(|s| s.contains("disk full")));
    }

    #[test]
    fn test_timer_completion_notifies_through_executor() {
        let notifier = RecordingNotifier::new();
        let executor = CmdExecutor::new(
            Box::new(InMemoryStore::new()),
            Box::new(notifier.clone()),
            Box::new(NoopTextAreaEngine),
        );
        let mut runtime = Runtime::new_with_executor(AppState::new(), executor);

        runtime.send_msg(Msg::Timer(TimerMsg::SwitchMode(TimerMode::Countdown)));
        runtime.send_msg(Msg::Timer(TimerMsg::SetConfiguredMinutes(1)));
        runtime.send_msg(Msg::Timer(TimerMsg::StartStop));
        runtime.run_update_cycle().unwrap();

        for _ in 0..60 {
            runtime.send_msg(Msg::Timer(TimerMsg::Tick));
        }
        runtime.run_update_cycle().unwrap();

        assert_eq!(notifier.delivered().len(), 1);
        assert_eq!(notifier.delivered()[0].0, "Timer finished!");
        assert!(!runtime.state().timer.running);
        assert_eq!(runtime.state().timer.elapsed_or_remaining, 0);
    }

    #[test]
    fn test_cycle_without_executor_is_refused() {
        let mut runtime = create_test_runtime();
        runtime.send_msg(Msg::Notes(NotesMsg::Load));

        let result = runtime.run_update_cycle();

        assert!(result
            .unwrap_err()
            .contains("No command executor configured"));
    }

    #[test]
    fn test_tui_sender_requires_an_executor() {
        let mut runtime = create_test_runtime();
        let (tui_tx, _tui_rx) = mpsc::unbounded_channel::<TuiCommand>();

        let result = runtime.add_tui_sender(tui_tx);

        assert!(result
            .unwrap_err()
            .contains("No command executor configured"));
    }

    #[test]
    fn test_set_executor_enables_command_execution() {
        let mut runtime = create_test_runtime();
        assert!(!runtime.get_stats().has_executor);

        runtime.set_executor(executor_over(InMemoryStore::new()));
        assert!(runtime.get_stats().has_executor);

        runtime.send_msg(Msg::Notes(NotesMsg::Load));
        let log = runtime.run_update_cycle().unwrap();
        assert!(log.iter().any(|line| line.contains("LoadNotes")));
    }

    #[test]
    fn test_tui_support_reported_in_stats() {
        let mut runtime =
            Runtime::new_with_executor(AppState::new(), executor_over(InMemoryStore::new()));
        assert!(!runtime.get_stats().has_tui_support);

        let (tui_tx, _tui_rx) = mpsc::unbounded_channel::<TuiCommand>();
        runtime.add_tui_sender(tui_tx).unwrap();
        assert!(runtime.get_stats().has_tui_support);
    }

    #[test]
    fn test_empty_command_queue_yields_empty_log() {
        let mut runtime =
            Runtime::new_with_executor(AppState::new(), executor_over(InMemoryStore::new()));

        let log = runtime.execute_pending_commands().unwrap();
        assert!(log.is_empty());
    }
}
