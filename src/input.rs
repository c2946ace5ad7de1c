//! Pointer tracking for the host surface.
//!
//! The field only cares about the last known cursor position. While the
//! cursor is away from the surface the position holds a sentinel far outside
//! any plausible viewport, which keeps every particle out of influence range
//! without a separate "absent" state threaded through the update pass.

use glam::Vec2;

/// Sentinel position for an absent pointer.
pub const AWAY: Vec2 = Vec2::new(-1000.0, -1000.0);

/// Last known pointer position, with leave handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    position: Vec2,
}

impl Pointer {
    /// Create a pointer in the absent state.
    pub fn new() -> Self {
        Self { position: AWAY }
    }

    /// Record a move to `position` in surface pixels.
    pub fn moved_to(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Record that the pointer left the surface.
    pub fn left(&mut self) {
        self.position = AWAY;
    }

    /// Current position, or [`AWAY`] when absent.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether a real position has been recorded since the last leave.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.position != AWAY
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::new()
    }
}
