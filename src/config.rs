//! Field configuration.
//!
//! All tunables live in [`FieldConfig`], a chainable builder whose defaults
//! are the shipped constants. Construct one, override what you need, and hand
//! it to [`ParticleField::new`](crate::ParticleField::new):
//!
//! ```ignore
//! let config = FieldConfig::new()
//!     .with_particle_count(160)
//!     .with_boundary(Boundary::Wrap);
//! ```

/// Edge policy for drifting particles.
///
/// Exactly one policy is active per field, chosen at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Invert the velocity component whose axis left the surface.
    #[default]
    Bounce,
    /// Teleport the out-of-range coordinate to the opposite edge.
    Wrap,
}

/// Configuration for a [`ParticleField`](crate::ParticleField).
///
/// Use method chaining to adjust individual knobs; unset knobs keep their
/// defaults.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Total particle population, anchors included.
    pub particle_count: usize,
    /// Number of non-moving anchor nodes, placed first in the collection.
    pub static_nodes: usize,
    /// Base node radius in pixels before per-particle variation and pulse.
    pub particle_size: f32,
    /// Maximum inter-particle distance at which a connecting line is drawn.
    pub attract_distance: f32,
    /// Maximum pointer-to-particle distance at which attraction applies.
    pub influence_radius: f32,
    /// Strength of the pointer attraction at zero distance.
    pub pointer_force: f32,
    /// Scale for the random initial velocity of drifting particles.
    pub base_speed: f32,
    /// Speed ceiling applied after pointer forces, in pixels per frame.
    pub max_speed: f32,
    /// Full width of the symmetric per-frame velocity jitter.
    pub jitter: f32,
    /// Multiplicative per-frame velocity damping.
    pub damping: f32,
    /// Opacity ramp factor for connection lines; values above 1 saturate.
    pub connection_opacity: f32,
    /// Edge policy for drifting particles.
    pub boundary: Boundary,
}

impl FieldConfig {
    /// Create a configuration with the default constants.
    pub fn new() -> Self {
        Self {
            particle_count: 120,
            static_nodes: 5,
            particle_size: 1.5,
            attract_distance: 170.0,
            influence_radius: 120.0,
            pointer_force: 0.05,
            base_speed: 1.2,
            max_speed: 2.5,
            jitter: 0.05,
            damping: 0.98,
            connection_opacity: 4.0,
            boundary: Boundary::Bounce,
        }
    }

    /// Set the total particle population.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the number of anchor nodes. Clamped to the population at reset.
    pub fn with_static_nodes(mut self, count: usize) -> Self {
        self.static_nodes = count;
        self
    }

    /// Set the base node radius in pixels.
    pub fn with_particle_size(mut self, size: f32) -> Self {
        self.particle_size = size;
        self
    }

    /// Set the connection cutoff distance in pixels.
    pub fn with_attract_distance(mut self, distance: f32) -> Self {
        self.attract_distance = distance;
        self
    }

    /// Set the pointer influence radius in pixels.
    pub fn with_influence_radius(mut self, radius: f32) -> Self {
        self.influence_radius = radius;
        self
    }

    /// Set the pointer attraction strength.
    pub fn with_pointer_force(mut self, force: f32) -> Self {
        self.pointer_force = force;
        self
    }

    /// Set the initial-velocity scale for drifting particles.
    pub fn with_base_speed(mut self, speed: f32) -> Self {
        self.base_speed = speed;
        self
    }

    /// Set the post-force speed ceiling in pixels per frame.
    pub fn with_max_speed(mut self, speed: f32) -> Self {
        self.max_speed = speed;
        self
    }

    /// Set the per-frame velocity jitter width. Zero disables jitter.
    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter;
        self
    }

    /// Set the per-frame velocity damping factor.
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Set the connection opacity ramp factor.
    pub fn with_connection_opacity(mut self, factor: f32) -> Self {
        self.connection_opacity = factor;
        self
    }

    /// Set the edge policy.
    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = FieldConfig::new();
        assert_eq!(config.particle_count, 120);
        assert_eq!(config.static_nodes, 5);
        assert_eq!(config.attract_distance, 170.0);
        assert_eq!(config.influence_radius, 120.0);
        assert_eq!(config.max_speed, 2.5);
        assert_eq!(config.damping, 0.98);
        assert_eq!(config.boundary, Boundary::Bounce);
    }

    #[test]
    fn test_builder_overrides() {
        let config = FieldConfig::new()
            .with_particle_count(40)
            .with_static_nodes(3)
            .with_boundary(Boundary::Wrap)
            .with_jitter(0.0);

        assert_eq!(config.particle_count, 40);
        assert_eq!(config.static_nodes, 3);
        assert_eq!(config.boundary, Boundary::Wrap);
        assert_eq!(config.jitter, 0.0);
        // Untouched knobs keep their defaults.
        assert_eq!(config.attract_distance, 170.0);
    }
}
