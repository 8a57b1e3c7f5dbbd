//! The process's edges: terminal handling, CLI flags, config files,
//! the note store and completion notifications. Each service hides
//! behind a trait so the core never touches I/O directly.

pub mod cli;
pub mod config;
pub mod notifier;
pub mod store;
pub mod tui;
