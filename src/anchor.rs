//! Grab-offset tracking for thumb drags.
//!
//! When a drag starts anywhere on a thumb, mapping the raw pointer position
//! straight to a value would snap the thumb's center under the pointer. The
//! anchor removes that jump: on the first update of a gesture it records the
//! offset between the pointer and the thumb's current rendered position, and
//! every update (including the first) subtracts that offset before the
//! position is mapped to a value. The offset lives for exactly one gesture.

/// The captured offset between pointer grab point and a thumb's rendered
/// position. One anchor exists per thumb; `None` outside a drag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragAnchor {
    offset: Option<f32>,
}

impl DragAnchor {
    /// A cleared anchor.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while a gesture holds a captured offset.
    pub fn is_active(&self) -> bool {
        self.offset.is_some()
    }

    /// The captured offset, if a gesture is active.
    pub fn offset(&self) -> Option<f32> {
        self.offset
    }

    /// Returns the position the mapping should use for this update.
    ///
    /// On the first call of a gesture the offset is captured as
    /// `pointer - rendered`, which makes the first effective position equal
    /// the thumb's pre-drag position exactly. Subsequent calls reuse the
    /// captured offset and ignore `rendered`.
    pub fn effective_position(&mut self, pointer: f32, rendered: f32) -> f32 {
        let offset = *self.offset.get_or_insert(pointer - rendered);
        pointer - offset
    }

    /// Ends the gesture, discarding the captured offset.
    pub fn clear(&mut self) {
        self.offset = None;
    }
}
