use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::TuiCommand,
        cmd_executor::CmdExecutor,
        msg::{notes::NotesMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        config::Config,
        notifier::{Notifier, NullNotifier, TerminalNotifier},
        store::JsonFileStore,
        tui::{self, event_source::EventSource, textarea_engine::TuiTextAreaEngine, SharedTui},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
    presentation::config::keybindings::key_event_to_string,
};

/// Drives the whole application: pulls terminal events, feeds the
/// runtime, reacts to host-side commands (resize, render requests) and
/// draws. The terminal and the event source are injected, so tests run
/// the same loop against a scripted queue and a memory backend.
pub struct AppRunner {
    runtime: Runtime,
    tui: SharedTui,
    events: EventSource,
    renderer: Renderer,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::Receiver<()>,
    next_second: tokio::time::Instant,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Create a runner with its full service stack wired up.
    ///
    /// The store, notifier and draft engine are the production ones;
    /// the terminal and event source come from the caller.
    pub async fn new_with_config(
        config: Config,
        tui: SharedTui,
        events: EventSource,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config.clone());

        let notifier: Box<dyn Notifier> = if config.notifications {
            Box::new(TerminalNotifier::new())
        } else {
            Box::new(NullNotifier)
        };
        let executor = CmdExecutor::new(
            Box::new(JsonFileStore::new()),
            notifier,
            Box::new(TuiTextAreaEngine),
        );
        let mut runtime = Runtime::new_with_executor(initial_state, executor);

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel::<TuiCommand>();
        runtime.add_tui_sender(tui_cmd_tx).map_err(|e| eyre!(e))?;

        // Capacity 1: a queued request already means "draw next loop"
        let (render_req_tx, render_req_rx) = mpsc::channel::<()>(1);
        runtime
            .add_render_request_sender(render_req_tx)
            .map_err(|e| eyre!(e))?;

        // One-time store read seeding the note list
        runtime.send_msg(Msg::Notes(NotesMsg::Load));

        Ok(Self {
            runtime,
            tui,
            events,
            renderer: Renderer::new(),
            tui_cmd_rx,
            render_req_rx,
            next_second: tokio::time::Instant::now() + Duration::from_secs(1),
        })
    }

    /// Convenience constructor for main: the injected terminal is also
    /// the event source.
    pub async fn new_with_real(config: Config, tui: SharedTui) -> Result<Self> {
        let events = EventSource::real(Arc::clone(&tui));
        Self::new_with_config(config, tui, events).await
    }

    /// Run the main loop until the state says quit.
    pub async fn run(&mut self) -> Result<()> {
        {
            let mut guard = self.tui.lock().await;
            guard.enter()?;
        }
        self.next_second = tokio::time::Instant::now() + Duration::from_secs(1);

        loop {
            let mut saw_tui_render = false;

            match self.events.next().await {
                Some(event) => match event {
                    tui::Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
                    tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
                    tui::Event::Render => saw_tui_render = true,
                    tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
                    tui::Event::Key(key) => {
                        log::debug!("Received key event: {}", key_event_to_string(&key));
                        self.runtime.send_raw_msg(RawMsg::Key(key));
                    }
                    tui::Event::Error => {
                        log::warn!("Terminal event stream reported an error");
                    }
                    tui::Event::Init
                    | tui::Event::Closed
                    | tui::Event::FocusGained
                    | tui::Event::FocusLost
                    | tui::Event::Paste(_)
                    | tui::Event::Mouse(_) => {}
                },
                None => {
                    // Source exhausted or closed; avoid a busy loop but
                    // keep processing queued messages (a Quit may be
                    // waiting)
                    tokio::time::sleep(Duration::from_millis(1)).await;
                }
            }

            // Wall-clock seconds for the timer, independent of the
            // tick rate; catches up if the loop stalls
            let now = tokio::time::Instant::now();
            while now >= self.next_second {
                self.runtime.send_raw_msg(RawMsg::SecondElapsed);
                self.next_second += Duration::from_secs(1);
            }

            match self.runtime.run_update_cycle() {
                Ok(log_lines) => {
                    for line in &log_lines {
                        log::debug!("{line}");
                    }
                }
                Err(e) => {
                    log::error!("Runtime error: {e}");
                    self.runtime
                        .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
                }
            }

            // Host-side commands emitted by the executor
            let mut resizes: Vec<(u16, u16)> = Vec::new();
            while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
                match cmd {
                    TuiCommand::Resize { width, height } => resizes.push((width, height)),
                }
            }
            let mut resized = false;
            if let Some((w, h)) = Coalescer::final_geometry(&resizes) {
                let mut guard = self.tui.lock().await;
                guard.resize(ratatui::prelude::Rect::new(0, 0, w, h))?;
                resized = true;
            }

            let mut render_reqs = 0;
            while self.render_req_rx.try_recv().is_ok() {
                render_reqs += 1;
            }

            if Coalescer::should_draw(render_reqs, saw_tui_render, resized) {
                self.renderer.render(&self.tui, self.runtime.state()).await?;
            }

            if self.runtime.state().system.should_suspend {
                self.suspend_and_resume().await?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }
        }

        {
            let mut guard = self.tui.lock().await;
            guard.exit()?;
        }
        Ok(())
    }

    /// Leave the terminal, stop the process, and restore everything
    /// once the shell sends it back to the foreground.
    async fn suspend_and_resume(&mut self) -> Result<()> {
        {
            let mut guard = self.tui.lock().await;
            guard.exit()?;
        }

        #[cfg(not(windows))]
        signal_hook::low_level::raise(signal_hook::consts::signal::SIGTSTP)?;

        // Execution continues here after SIGCONT
        self.runtime.send_raw_msg(RawMsg::Resume);
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error during resume: {e}");
        }

        {
            let mut guard = self.tui.lock().await;
            guard.enter()?;
        }
        self.renderer.render(&self.tui, self.runtime.state()).await?;

        // Seconds spent suspended should not count as timer time
        self.next_second = tokio::time::Instant::now() + Duration::from_secs(1);
        Ok(())
    }
}
