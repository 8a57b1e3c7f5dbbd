//! User-rebindable keys and user-stylable colors, as they appear in
//! the config file.

pub mod keybindings;
pub mod styles;

pub use keybindings::KeyBindings;
pub use styles::Styles;
