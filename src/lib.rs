//! # Desktui - desk accessories for the terminal
//!
//! A calculator, a note pad and a timer behind one tab bar, built with
//! Rust and Ratatui. The library implements an Elm-like architecture
//! for predictable state management.
//!
//! ## Architecture
//!
//! State lives in one value and only changes through messages:
//!
//! - **Model** (`core::state`): the whole application state
//! - **Message** (`core::msg`): everything that can happen
//! - **Update** (`core::update`): pure state transitions
//! - **Command** (`core::cmd`): requested side effects (store writes,
//!   notifications, draft-key replay)
//! - **View** (`presentation::components`): rendering from state alone
//!
//! Raw terminal events never reach the reducers directly; the
//! translator turns them into domain messages first, and the command
//! executor feeds effect outcomes back in as messages.
//!
//! ## Example
//!
//! ```rust
//! use desktui::core::msg::calculator::CalculatorMsg;
//! use desktui::core::msg::Msg;
//! use desktui::core::state::AppState;
//! use desktui::core::update::update;
//!
//! let state = AppState::default();
//! let (state, _cmds) = update(Msg::Calculator(CalculatorMsg::InputToken('7')), state);
//!
//! assert_eq!(state.calculator.display, "7");
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Messages, state, the pure update cycle and command types
//! - [`domain`] - Calculator arithmetic, notes, clock formatting
//! - [`infrastructure`] - Terminal, persistence, notifications, CLI, config
//! - [`integration`] - Runtime and event loop gluing core to infrastructure
//! - [`presentation`] - Components, widgets, keybindings and styles

#![deny(warnings)]
#![allow(dead_code)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::AppState;
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
