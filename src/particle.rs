//! The particle entity and anchor placement.

use glam::Vec2;

use crate::config::FieldConfig;
use crate::spawn::SpawnContext;

/// Fractional viewport positions for the first five anchor nodes.
pub(crate) const ANCHOR_FRACTIONS: [(f32, f32); 5] = [
    (0.2, 0.2),
    (0.8, 0.2),
    (0.5, 0.3),
    (0.3, 0.8),
    (0.7, 0.7),
];

/// A single point entity of the field.
///
/// Anchors never move; drifters carry a velocity and receive boundary,
/// pointer, jitter, and damping updates every tick. Both kinds pulse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Surface-space position in pixels.
    pub position: Vec2,
    /// Velocity in pixels per frame. Zero and permanently zero for anchors.
    pub velocity: Vec2,
    /// Base radius in pixels, before pulsing.
    pub size: f32,
    /// True for the fixed structural nodes placed first in the collection.
    pub is_anchor: bool,
    /// Current phase of the size oscillation.
    pub pulse_phase: f32,
    /// Phase advance per frame.
    pub pulse_speed: f32,
}

impl Particle {
    /// Spawn a non-moving anchor at a precomputed position.
    pub(crate) fn anchor(position: Vec2, config: &FieldConfig, ctx: &mut SpawnContext) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            size: config.particle_size * 1.5,
            is_anchor: true,
            pulse_phase: ctx.random_phase(),
            pulse_speed: ctx.random_range(0.03, 0.05),
        }
    }

    /// Spawn a drifting particle at a uniform-random position.
    pub(crate) fn drifter(
        width: f32,
        height: f32,
        config: &FieldConfig,
        ctx: &mut SpawnContext,
    ) -> Self {
        Self {
            position: ctx.random_in_rect(width, height),
            velocity: ctx.random_velocity(config.base_speed),
            size: config.particle_size * ctx.random_range(0.6, 1.4),
            is_anchor: false,
            pulse_phase: ctx.random_phase(),
            pulse_speed: ctx.random_range(0.05, 0.10),
        }
    }

    /// Sinusoidal size scale, bounded to `[0.8, 1.2]`.
    #[inline]
    pub fn pulse_factor(&self) -> f32 {
        1.0 + 0.2 * self.pulse_phase.sin()
    }

    /// Rendered radius for the current pulse phase.
    #[inline]
    pub fn pulsed_size(&self) -> f32 {
        self.size * self.pulse_factor()
    }

    /// Current speed in pixels per frame.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Deterministic anchor position for `index` of `total` anchors on a
/// `width` by `height` surface.
///
/// The first five come from the fraction table; any anchors beyond that are
/// spaced evenly along the horizontal midline.
pub(crate) fn anchor_position(index: usize, total: usize, width: f32, height: f32) -> Vec2 {
    if let Some(&(fx, fy)) = ANCHOR_FRACTIONS.get(index) {
        return Vec2::new(width * fx, height * fy);
    }
    let extra = total - ANCHOR_FRACTIONS.len();
    let step = (index - ANCHOR_FRACTIONS.len() + 1) as f32 / (extra + 1) as f32;
    Vec2::new(width * step, height * 0.5)
}
