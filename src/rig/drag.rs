/// Drag gesture state, generic over the anchor representation (a
/// world-space point for movement, a viewport-space point for rotation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DragState<A> {
    /// No gesture in progress.
    Idle,
    /// Bound button held with a captured anchor.
    Dragging {
        /// Reference point captured at gesture start.
        anchor: A,
    },
}

impl<A> DragState<A> {
    /// Whether a gesture is in progress.
    pub(crate) fn active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Reset to idle.
    pub(crate) fn release(&mut self) {
        *self = Self::Idle;
    }
}
