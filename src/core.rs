//! The Elm loop: messages in, state out, commands on the side.
//!
//! Everything here is synchronous and deterministic. Raw events enter
//! through [`translator`], reducers in [`state`] fold messages into the
//! model, and [`cmd_executor`] runs the requested effects against
//! injected services. The [`textarea_engine`] seam keeps draft editing
//! stateless from the reducers' point of view.

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod textarea_engine;
pub mod translator;
pub mod update;
