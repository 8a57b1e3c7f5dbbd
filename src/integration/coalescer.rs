/// Coalescing decisions for the event loop.
///
/// Render requests and resizes can pile up within one loop iteration;
/// these pure functions collapse them so each pass draws at most once
/// and resizes to the final geometry only.
pub struct Coalescer;

impl Coalescer {
    /// Whether this pass should draw: any queued render request, a
    /// Render event from the terminal task, or a completed resize
    /// (which leaves the last frame stale) means yes.
    #[inline]
    pub fn should_draw(queued_requests: usize, saw_render_event: bool, resized: bool) -> bool {
        queued_requests > 0 || saw_render_event || resized
    }

    /// A burst of resize events collapses to the final geometry; the
    /// intermediate sizes were never worth drawing.
    #[inline]
    pub fn final_geometry(events: &[(u16, u16)]) -> Option<(u16, u16)> {
        events.last().copied()
    }
}
