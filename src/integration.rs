//! Host integration
//!
//! Glue between the pure core and the outside world: the runtime that
//! drives the update cycle, the runner that owns the event loop, and
//! the renderer that draws state through the TUI seam.

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
