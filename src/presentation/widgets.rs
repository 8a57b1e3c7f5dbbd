//! Chrome shared by every tab: the tab bar on top and the status bar
//! with key hints at the bottom.

pub mod status_bar;
pub mod tab_bar;
