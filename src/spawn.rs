//! Spawn context for particle initialization.
//!
//! Provides helper methods to reduce boilerplate when seeding a field.
//! Each particle gets its own context, so spawning stays order-independent.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Per-particle randomness for spawn-time attributes.
///
/// ```ignore
/// let mut ctx = SpawnContext::new(7, 120);
/// let position = ctx.random_in_rect(800.0, 600.0);
/// let velocity = ctx.random_velocity(1.2);
/// ```
pub struct SpawnContext {
    /// Index of the particle being spawned (0 to count-1).
    pub index: usize,
    /// Total number of particles being spawned.
    pub count: usize,
    /// Internal RNG - use helper methods instead of accessing directly.
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a new spawn context for a particle.
    pub fn new(index: usize, count: usize) -> Self {
        // Seed RNG based on index for independence within a run,
        // but different each program execution
        let seed = index as u64
            ^ (std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42));

        Self {
            index,
            count,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range. Returns `min` for an empty range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Random point inside a `width` by `height` rectangle anchored at the
    /// origin. Degenerate dimensions collapse to the corresponding axis.
    pub fn random_in_rect(&mut self, width: f32, height: f32) -> Vec2 {
        Vec2::new(
            self.random_range(0.0, width.max(0.0)),
            self.random_range(0.0, height.max(0.0)),
        )
    }

    /// Random velocity with both components in `[-speed/2, speed/2)`.
    pub fn random_velocity(&mut self, speed: f32) -> Vec2 {
        Vec2::new(
            (self.random() - 0.5) * speed,
            (self.random() - 0.5) * speed,
        )
    }

    /// Random oscillation phase in `[0, 2π)`.
    pub fn random_phase(&mut self) -> f32 {
        self.random_range(0.0, TAU)
    }
}
