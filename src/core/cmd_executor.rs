use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, CmdResult, TuiCommand},
        msg::{notes::NotesMsg, system::SystemMsg, Msg},
        textarea_engine::TextAreaEngine,
    },
    infrastructure::{notifier::Notifier, store::NoteStore},
};

/// Command executor that runs Elm commands against injected services.
///
/// The executor owns the side-effectful collaborators (note store,
/// notifier, text-area engine) and hands their outcomes back to the
/// update loop as follow-up messages, so the reducers stay pure.
pub struct CmdExecutor {
    store: Box<dyn NoteStore>,
    notifier: Box<dyn Notifier>,
    engine: Box<dyn TextAreaEngine>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::Sender<()>>,
}

impl CmdExecutor {
    /// Create a new command executor over the given services
    pub fn new(
        store: Box<dyn NoteStore>,
        notifier: Box<dyn Notifier>,
        engine: Box<dyn TextAreaEngine>,
    ) -> Self {
        Self {
            store,
            notifier,
            engine,
            tui_sender: None,
            render_req_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::Sender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command against the injected services
    pub fn execute_command(&self, cmd: &Cmd) -> CmdResult {
        match cmd {
            Cmd::None => {
                // No-op command, nothing to execute
                CmdResult::Success(vec![])
            }

            Cmd::SaveNotes { notes } => match self.store.save(notes) {
                Ok(()) => CmdResult::Success(vec![]),
                Err(e) => CmdResult::Error(format!("Could not save notes: {e}")),
            },

            Cmd::LoadNotes => {
                let notes = self.store.load();
                CmdResult::Success(vec![Msg::Notes(NotesMsg::Loaded(notes))])
            }

            Cmd::Notify { summary, body } => {
                self.notifier.notify(summary, body);
                CmdResult::Success(vec![])
            }

            Cmd::ApplyDraftKeys {
                target,
                snapshot,
                keys,
            } => {
                let edited = self.engine.apply_keys(snapshot, keys);
                CmdResult::Success(vec![Msg::Notes(NotesMsg::DraftEdited(*target, edited))])
            }

            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        let _ = tx.send(TuiCommand::Resize {
                            width: *width,
                            height: *height,
                        });
                        // The TUI task finishes the resize on its own time
                        CmdResult::Pending
                    } else {
                        log::warn!(
                            "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                        );
                        CmdResult::Success(vec![])
                    }
                }
            },

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    // Bounded channel: a full buffer means a render is
                    // already queued, so the request coalesces away.
                    match rtx.try_send(()) {
                        Ok(()) | Err(mpsc::error::TrySendError::Full(())) => CmdResult::Pending,
                        Err(mpsc::error::TrySendError::Closed(())) => {
                            CmdResult::Error("render channel closed".to_string())
                        }
                    }
                } else {
                    log::warn!("CmdExecutor: render sender not configured; dropping render request");
                    CmdResult::Success(vec![])
                }
            }

            Cmd::LogError { message } => {
                log::error!("Elm command error: {message}");
                CmdResult::Success(vec![])
            }

            Cmd::LogInfo { message } => {
                log::info!("Elm command info: {message}");
                CmdResult::Success(vec![])
            }

            Cmd::Batch(commands) => {
                let mut msgs = Vec::new();
                for cmd in commands {
                    match self.execute_command(cmd) {
                        CmdResult::Success(more) => msgs.extend(more),
                        CmdResult::Pending => {}
                        CmdResult::Error(e) => return CmdResult::Error(e),
                    }
                }
                CmdResult::Success(msgs)
            }
        }
    }

    /// Execute multiple commands, collecting follow-up messages and a
    /// human-readable execution log. Failures are reported back to the
    /// update loop as error messages instead of aborting the cycle.
    pub fn execute_commands(&self, commands: &[Cmd]) -> (Vec<Msg>, Vec<String>) {
        let mut follow_ups = Vec::new();
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                CmdResult::Success(msgs) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                    follow_ups.extend(msgs);
                }
                CmdResult::Pending => {
                    execution_log.push(format!("✓ Queued: {}", cmd.name()));
                }
                CmdResult::Error(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                    follow_ups.push(Msg::System(SystemMsg::ShowError(e)));
                }
            }
        }

        (follow_ups, execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_tui_sender: self.tui_sender.is_some(),
            has_render_request_sender: self.render_req_sender.is_some(),
            is_tui_sender_closed: self.tui_sender.as_ref().map(|sender| sender.is_closed()),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub has_tui_sender: bool,
    pub has_render_request_sender: bool,
    pub is_tui_sender_closed: Option<bool>,
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::None => "None".to_string(),
            Cmd::SaveNotes { notes } => format!("SaveNotes({})", notes.len()),
            Cmd::LoadNotes => "LoadNotes".to_string(),
            Cmd::Notify { .. } => "Notify".to_string(),
            Cmd::ApplyDraftKeys { keys, .. } => format!("ApplyDraftKeys({})", keys.len()),
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
            Cmd::Tui(tc) => match tc {
                TuiCommand::Resize { .. } => "Tui(Resize)".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::{eyre, Result};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    use super::*;
    use crate::core::state::notes::DraftFocus;
    use crate::core::state::ui::TextAreaState;
    use crate::core::textarea_engine::NoopTextAreaEngine;
    use crate::domain::note::Note;
    use crate::infrastructure::notifier::{NullNotifier, RecordingNotifier};
    use crate::infrastructure::store::InMemoryStore;

    /// Store whose writes always fail, for exercising the error path.
    struct BrokenStore;

    impl NoteStore for BrokenStore {
        fn load(&self) -> Vec<Note> {
            vec![]
        }

        fn save(&self, _notes: &[Note]) -> Result<()> {
            Err(eyre!("disk full"))
        }
    }

    fn create_test_executor() -> (CmdExecutor, InMemoryStore, RecordingNotifier) {
        let store = InMemoryStore::new();
        let notifier = RecordingNotifier::new();
        let executor = CmdExecutor::new(
            Box::new(store.clone()),
            Box::new(notifier.clone()),
            Box::new(NoopTextAreaEngine),
        );
        (executor, store, notifier)
    }

    #[test]
    fn test_execute_save_notes() {
        let (executor, store, _) = create_test_executor();
        let cmd = Cmd::SaveNotes {
            notes: vec![Note::new(1, "Groceries", "milk")],
        };

        let result = executor.execute_command(&cmd);

        assert!(matches!(result, CmdResult::Success(msgs) if msgs.is_empty()));
        assert_eq!(store.saved().len(), 1);
        assert_eq!(store.saved()[0].title, "Groceries");
    }

    #[test]
    fn test_execute_save_notes_failure() {
        let executor = CmdExecutor::new(
            Box::new(BrokenStore),
            Box::new(NullNotifier),
            Box::new(NoopTextAreaEngine),
        );
        let cmd = Cmd::SaveNotes { notes: vec![] };

        let result = executor.execute_command(&cmd);

        match result {
            CmdResult::Error(e) => assert!(e.contains("disk full")),
            other => panic!("Expected Error, got {other:?}"),
        }
    }

    #[test]
    fn test_execute_load_notes_produces_loaded_msg() {
        let store = InMemoryStore::with_notes(vec![Note::new(3, "Seeded", "")]);
        let executor = CmdExecutor::new(
            Box::new(store),
            Box::new(NullNotifier),
            Box::new(NoopTextAreaEngine),
        );

        let result = executor.execute_command(&Cmd::LoadNotes);

        match result {
            CmdResult::Success(msgs) => {
                assert_eq!(msgs.len(), 1);
                match &msgs[0] {
                    Msg::Notes(NotesMsg::Loaded(notes)) => {
                        assert_eq!(notes.len(), 1);
                        assert_eq!(notes[0].id, 3);
                    }
                    other => panic!("Expected Loaded, got {other:?}"),
                }
            }
            other => panic!("Expected Success, got {other:?}"),
        }
    }

    #[test]
    fn test_execute_notify() {
        let (executor, _, notifier) = create_test_executor();
        let cmd = Cmd::Notify {
            summary: "Timer finished!".to_string(),
            body: String::new(),
        };

        executor.execute_command(&cmd);

        assert_eq!(
            notifier.delivered(),
            vec![("Timer finished!".to_string(), String::new())]
        );
    }

    #[test]
    fn test_execute_apply_draft_keys_produces_draft_edited() {
        let (executor, _, _) = create_test_executor();
        let snapshot = TextAreaState::with_content("hello");
        let cmd = Cmd::ApplyDraftKeys {
            target: DraftFocus::Content,
            snapshot: snapshot.clone(),
            keys: vec![KeyEvent::new(KeyCode::Char('!'), KeyModifiers::NONE)],
        };

        let result = executor.execute_command(&cmd);

        match result {
            CmdResult::Success(msgs) => {
                // The no-op engine hands the snapshot back untouched
                assert_eq!(
                    msgs,
                    vec![Msg::Notes(NotesMsg::DraftEdited(
                        DraftFocus::Content,
                        snapshot
                    ))]
                );
            }
            other => panic!("Expected Success, got {other:?}"),
        }
    }

    #[test]
    fn test_execute_resize_routes_to_tui_sender() {
        let (mut executor, _, _) = create_test_executor();
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel::<TuiCommand>();
        executor.set_tui_sender(tui_tx);

        let cmd = Cmd::Tui(TuiCommand::Resize {
            width: 80,
            height: 24,
        });

        let result = executor.execute_command(&cmd);
        assert!(matches!(result, CmdResult::Pending));

        let tui_cmd = tui_rx.try_recv().unwrap();
        assert_eq!(
            tui_cmd,
            TuiCommand::Resize {
                width: 80,
                height: 24
            }
        );
    }

    #[test]
    fn test_execute_resize_without_sender_is_dropped() {
        let (executor, _, _) = create_test_executor();
        let cmd = Cmd::Tui(TuiCommand::Resize {
            width: 80,
            height: 24,
        });

        let result = executor.execute_command(&cmd);

        assert!(matches!(result, CmdResult::Success(msgs) if msgs.is_empty()));
    }

    #[test]
    fn test_execute_request_render_signals_channel() {
        let (mut executor, _, _) = create_test_executor();
        let (render_tx, mut render_rx) = mpsc::channel::<()>(1);
        executor.set_render_request_sender(render_tx);

        let result = executor.execute_command(&Cmd::RequestRender);
        assert!(matches!(result, CmdResult::Pending));

        render_rx.try_recv().unwrap();
    }

    #[test]
    fn test_execute_request_render_coalesces_when_full() {
        let (mut executor, _, _) = create_test_executor();
        let (render_tx, mut render_rx) = mpsc::channel::<()>(1);
        executor.set_render_request_sender(render_tx);

        // Second request lands on a full buffer and coalesces
        executor.execute_command(&Cmd::RequestRender);
        let result = executor.execute_command(&Cmd::RequestRender);
        assert!(matches!(result, CmdResult::Pending));

        render_rx.try_recv().unwrap();
        assert!(render_rx.try_recv().is_err());
    }

    #[test]
    fn test_execute_batch_concatenates_follow_ups() {
        let store = InMemoryStore::with_notes(vec![Note::new(1, "One", "")]);
        let notifier = RecordingNotifier::new();
        let executor = CmdExecutor::new(
            Box::new(store),
            Box::new(notifier.clone()),
            Box::new(NoopTextAreaEngine),
        );

        let batch = Cmd::Batch(vec![
            Cmd::Notify {
                summary: "Done".to_string(),
                body: String::new(),
            },
            Cmd::LoadNotes,
        ]);

        let result = executor.execute_command(&batch);

        match result {
            CmdResult::Success(msgs) => {
                assert_eq!(msgs.len(), 1);
                assert!(matches!(&msgs[0], Msg::Notes(NotesMsg::Loaded(notes)) if notes.len() == 1));
            }
            other => panic!("Expected Success, got {other:?}"),
        }
        assert_eq!(notifier.delivered().len(), 1);
    }

    #[test]
    fn test_execute_commands_logs_and_surfaces_errors() {
        let executor = CmdExecutor::new(
            Box::new(BrokenStore),
            Box::new(NullNotifier),
            Box::new(NoopTextAreaEngine),
        );

        let commands = vec![
            Cmd::LogInfo {
                message: "test".to_string(),
            },
            Cmd::SaveNotes { notes: vec![] },
        ];

        let (follow_ups, log) = executor.execute_commands(&commands);

        assert_eq!(log.len(), 2);
        assert!(log[0].contains("✓ Executed: LogInfo"));
        assert!(log[1].contains("✗ Failed to execute SaveNotes(0)"));

        // The failure travels back into the update loop as an error message
        assert_eq!(follow_ups.len(), 1);
        assert!(matches!(
            &follow_ups[0],
            Msg::System(SystemMsg::ShowError(e)) if e.contains("disk full")
        ));
    }

    #[test]
    fn test_execute_none() {
        let (executor, store, notifier) = create_test_executor();

        let result = executor.execute_command(&Cmd::None);

        assert!(matches!(result, CmdResult::Success(msgs) if msgs.is_empty()));
        assert!(store.saved().is_empty());
        assert!(notifier.delivered().is_empty());
    }

    #[test]
    fn test_cmd_name_trait() {
        assert_eq!(Cmd::LoadNotes.name(), "LoadNotes");
        assert_eq!(Cmd::SaveNotes { notes: vec![] }.name(), "SaveNotes(0)");

        let batch_cmd = Cmd::Batch(vec![Cmd::RequestRender, Cmd::None]);
        assert_eq!(batch_cmd.name(), "Batch(2)");
    }

    #[test]
    fn test_executor_stats() {
        let (mut executor, _, _) = create_test_executor();

        let stats = executor.get_stats();
        assert!(!stats.has_tui_sender);
        assert!(!stats.has_render_request_sender);
        assert!(stats.is_tui_sender_closed.is_none());

        let (tui_tx, _tui_rx) = mpsc::unbounded_channel::<TuiCommand>();
        executor.set_tui_sender(tui_tx);

        let stats = executor.get_stats();
        assert!(stats.has_tui_sender);
        assert_eq!(stats.is_tui_sender_closed, Some(false));
    }
}
