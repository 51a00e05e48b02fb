/// Tracks the id of a host-scheduled repeating callback (animation frame,
/// `setInterval`). Whoever disarms it owns cancelling the returned id, so no
/// orphaned timer keeps mutating state after its feature is switched off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepeatHandle {
    id: Option<i32>,
}

impl RepeatHandle {
    pub fn is_armed(&self) -> bool {
        self.id.is_some()
    }

    /// Record a new id. Returns the previous id, which must be cancelled.
    pub fn arm(&mut self, id: i32) -> Option<i32> {
        self.id.replace(id)
    }

    pub fn disarm(&mut self) -> Option<i32> {
        self.id.take()
    }
}
