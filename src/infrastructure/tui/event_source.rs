use std::collections::VecDeque;

use crate::infrastructure::tui::{Event, SharedTui};

/// Where the runner's events come from: the live terminal task, or a
/// pre-scripted queue for tests. A `Test` source yields `None` once the
/// queue is drained; the runner treats that as an idle pass, so queued
/// messages (a pending quit, say) still get processed.
pub enum EventSource {
    Real(SharedTui),
    Test(VecDeque<Event>),
}

impl EventSource {
    pub fn real(tui: SharedTui) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    pub async fn next(&mut self) -> Option<Event> {
        match self {
            EventSource::Real(tui) => tui.lock().await.next().await,
            EventSource::Test(queue) => queue.pop_front(),
        }
    }
}
