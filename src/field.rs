//! The particle field: owned collection, per-tick kinematics, host wiring.
//!
//! [`ParticleField`] is the long-lived simulation instance. The host resets
//! it with the surface dimensions on mount and on every resize, forwards
//! pointer and theme notifications as plain data, and calls [`tick`] once per
//! display frame. Ticking is pure state mutation with no drawing surface
//! involved, so the whole update pass runs headless in tests; painting lives
//! in [`crate::render`].
//!
//! [`tick`]: ParticleField::tick

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{Boundary, FieldConfig};
use crate::input::Pointer;
use crate::particle::{anchor_position, Particle};
use crate::spawn::SpawnContext;
use crate::visuals::{Palette, Theme};

/// A fixed population of particles plus the state the host feeds in.
pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    pointer: Pointer,
    theme: Theme,
    palette: Palette,
    rng: SmallRng,
    halted: bool,
}

impl ParticleField {
    /// Create an empty field. Call [`reset`](Self::reset) with the surface
    /// dimensions before the first tick.
    pub fn new(config: FieldConfig) -> Self {
        let theme = Theme::default();
        Self {
            config,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            pointer: Pointer::new(),
            theme,
            palette: Palette::for_theme(theme),
            rng: SmallRng::from_entropy(),
            halted: false,
        }
    }

    /// Discard and rebuild the whole collection for a surface of
    /// `width` by `height` pixels, and select the palette for `theme`.
    ///
    /// Anchors land on their deterministic fractional positions; drifters get
    /// uniform-random positions, symmetric random velocities, and random
    /// pulse state. Zero-area dimensions produce a valid collection that
    /// simply has nowhere to go.
    pub fn reset(&mut self, width: f32, height: f32, theme: Theme) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.set_theme(theme);

        let count = self.config.particle_count;
        let anchors = self.config.static_nodes.min(count);

        let mut particles = Vec::with_capacity(count);
        for index in 0..count {
            let mut ctx = SpawnContext::new(index, count);
            let particle = if index < anchors {
                let position = anchor_position(index, anchors, self.width, self.height);
                Particle::anchor(position, &self.config, &mut ctx)
            } else {
                Particle::drifter(self.width, self.height, &self.config, &mut ctx)
            };
            particles.push(particle);
        }
        self.particles = particles;
    }

    /// Full reset with the new dimensions, keeping the current theme.
    ///
    /// No particle survives a resize; anchor positions are recomputed from
    /// the new dimensions and drifters are reseeded.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.reset(width, height, self.theme);
    }

    /// Swap the palette in place. Particle state is untouched.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.palette = Palette::for_theme(theme);
    }

    /// Record a pointer move in surface pixels.
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer.moved_to(position);
    }

    /// Record that the pointer left the surface, disabling influence.
    pub fn pointer_left(&mut self) {
        self.pointer.left();
    }

    /// Stop the field: subsequent ticks become no-ops. Idempotent.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// Whether [`halt`](Self::halt) has been called.
    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Current theme.
    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Colors for the current theme.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Surface dimensions the collection was built for.
    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// The particle collection, anchors first.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to the collection, for hosts that perturb nodes.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Advance the simulation by one frame.
    ///
    /// For every drifter: integrate position, apply the boundary policy,
    /// apply pointer attraction with the post-force speed clamp, add jitter,
    /// then damp. Every particle, anchors included, advances its pulse phase.
    pub fn tick(&mut self) {
        if self.halted {
            return;
        }

        let width = self.width;
        let height = self.height;
        let pointer = self.pointer.position();
        let pointer_present = self.pointer.is_present();

        for p in &mut self.particles {
            if !p.is_anchor {
                p.position += p.velocity;

                match self.config.boundary {
                    Boundary::Bounce => {
                        if p.position.x <= 0.0 || p.position.x >= width {
                            p.velocity.x = -p.velocity.x;
                        }
                        if p.position.y <= 0.0 || p.position.y >= height {
                            p.velocity.y = -p.velocity.y;
                        }
                    }
                    Boundary::Wrap => {
                        if p.position.x < 0.0 {
                            p.position.x = width;
                        } else if p.position.x > width {
                            p.position.x = 0.0;
                        }
                        if p.position.y < 0.0 {
                            p.position.y = height;
                        } else if p.position.y > height {
                            p.position.y = 0.0;
                        }
                    }
                }

                if pointer_present {
                    let to_pointer = pointer - p.position;
                    let dist = to_pointer.length();
                    // Zero distance means no direction to pull along.
                    if dist < self.config.influence_radius && dist > f32::EPSILON {
                        let force = (self.config.influence_radius - dist)
                            / self.config.influence_radius
                            * self.config.pointer_force;
                        p.velocity += to_pointer / dist * force;

                        let speed = p.velocity.length();
                        if speed > self.config.max_speed {
                            p.velocity *= self.config.max_speed / speed;
                        }
                    }
                }

                p.velocity += Vec2::new(
                    (self.rng.gen::<f32>() - 0.5) * self.config.jitter,
                    (self.rng.gen::<f32>() - 0.5) * self.config.jitter,
                );
                p.velocity *= self.config.damping;
            }

            p.pulse_phase += p.pulse_speed;
        }
    }
}
