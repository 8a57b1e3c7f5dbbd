use ratatui::prelude::*;
use ratatui::widgets::Widget;
use strum::IntoEnumIterator;

use crate::core::state::ui::Tab;

/// Styles resolved by the caller from the style config.
///
/// Empty styles are fine; they are patched over the built-in look, so
/// an unconfigured setup still renders a visible selection.
#[derive(Clone, Copy, Default)]
pub struct ViewContext {
    pub selected_style: Style,
    pub unselected_style: Style,
}

#[derive(Clone)]
pub struct TabBarWidget {
    active: Tab,
    ctx: ViewContext,
}

impl TabBarWidget {
    pub fn new(active: Tab, ctx: ViewContext) -> Self {
        Self { active, ctx }
    }

    pub fn titles() -> Vec<String> {
        Tab::iter().map(|tab| tab.to_string()).collect()
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let tabs = ratatui::widgets::Tabs::new(Self::titles())
            .select(self.active.index())
            .style(
                Style::default()
                    .bg(Color::Black)
                    .patch(self.ctx.unselected_style),
            )
            .highlight_style(Style::default().reversed().patch(self.ctx.selected_style));

        tabs.render(area, buf);
    }
}
