use color_eyre::eyre::Result;

use crate::{
    core::state::AppState,
    infrastructure::tui::SharedTui,
    presentation::components::Components,
};

/// Draws the full screen from a state value through a `TuiLike`.
#[derive(Default)]
pub struct Renderer {
    components: Components,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            components: Components::new(),
        }
    }

    pub async fn render(&mut self, tui: &SharedTui, state: &AppState) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut ratatui::Frame<'_>| {
            self.components.render(f, state);
        };
        guard.draw(&mut draw)?;
        Ok(())
    }
}
