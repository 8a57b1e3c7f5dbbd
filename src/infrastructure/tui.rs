//! Terminal plumbing: the [`TuiLike`] seam, the crossterm-backed
//! implementation behind it, and the in-process double used by tests.

pub mod event_source;
pub mod real;
pub mod textarea_engine;

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

pub type IO = std::io::Stdout;
pub fn io() -> IO {
    std::io::stdout()
}
pub type Frame<'a> = ratatui::Frame<'a>;

/// Handle shared between the runner, the renderer and the event source.
pub type SharedTui = std::sync::Arc<tokio::sync::Mutex<dyn TuiLike + Send>>;

/// Events produced by the terminal task.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Event {
    /// Emitted once when the event loop starts
    Init,
    Quit,
    Error,
    Closed,
    /// Update heartbeat, at the configured tick rate
    Tick,
    /// Draw heartbeat, at the configured frame rate
    Render,
    FocusGained,
    FocusLost,
    Paste(String),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Seam between the runner and the terminal. The production
/// implementation drives a real crossterm terminal; tests swap in a
/// buffer-backed one.
pub trait TuiLike: Send {
    /// Claim the terminal: raw mode, alternate screen, event loop.
    fn enter(&mut self) -> Result<()>;
    /// Hand the terminal back to the shell.
    fn exit(&mut self) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: ratatui::prelude::Rect) -> Result<()>;
    /// Next event, `None` when the source is exhausted.
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;
}
