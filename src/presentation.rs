//! Everything that puts pixels on the terminal: one component per tab,
//! the chrome widgets around them, and the user-facing configuration
//! for keys and styles. Rendering is a pure function of state.

pub mod components;
pub mod config;
pub mod widgets;
