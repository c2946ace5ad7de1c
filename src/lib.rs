//! # Plexus
//!
//! Pointer-reactive particle constellations for animated backdrops.
//!
//! A fixed population of softly pulsing nodes drifts across a 2D surface.
//! Nodes within reach of each other are joined by distance-faded lines, the
//! field leans gently toward the pointer, and a handful of anchor nodes stay
//! put to give the constellation structure. Everything renders on the CPU
//! into an RGBA8 frame, presented to a window or written to a PNG.
//!
//! ## Quick Start
//!
//! ```ignore
//! use plexus::prelude::*;
//! use plexus::window;
//!
//! fn main() -> Result<(), HostError> {
//!     window::run(
//!         FieldConfig::new()
//!             .with_particle_count(160)
//!             .with_boundary(Boundary::Wrap),
//!     )
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The field
//!
//! [`ParticleField`] owns the particle collection and the per-frame update.
//! The host resets it with the surface dimensions on mount and on every
//! resize (a resize rebuilds the whole collection), forwards pointer and
//! theme notifications, and calls [`ParticleField::tick`] once per frame.
//! Ticking never touches a drawing surface, so simulations run headless:
//!
//! ```ignore
//! let mut field = ParticleField::new(FieldConfig::new());
//! field.reset(800.0, 600.0, Theme::Dark);
//! field.tick();
//!
//! let mut frame = vec![0u8; 800 * 600 * 4];
//! plexus::render::draw_field(&field, &mut frame, 800, 600);
//! ```
//!
//! ### Anchors
//!
//! The first [`FieldConfig::static_nodes`] particles are anchors: placed at
//! fixed fractional viewport positions, never moving, pulsing like everything
//! else. Their positions are a deterministic function of the surface size.
//!
//! ### Boundaries
//!
//! Drifting particles either [`Boundary::Bounce`] off the edges (default) or
//! [`Boundary::Wrap`] around to the opposite side.
//!
//! ### Themes
//!
//! The palette is keyed by [`Theme`] and has exactly two states. Theme
//! changes swap colors in place without disturbing particle state.

pub mod capture;
pub mod config;
pub mod error;
pub mod field;
pub mod input;
mod particle;
pub mod render;
mod spawn;
pub mod time;
pub mod visuals;
pub mod window;

pub use config::{Boundary, FieldConfig};
pub use field::ParticleField;
pub use glam::Vec2;
pub use particle::Particle;
pub use spawn::SpawnContext;
pub use visuals::{Palette, Rgba, Theme};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use plexus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{Boundary, FieldConfig};
    pub use crate::error::{CaptureError, HostError};
    pub use crate::field::ParticleField;
    pub use crate::input::Pointer;
    pub use crate::particle::Particle;
    pub use crate::time::Time;
    pub use crate::visuals::{Palette, Rgba, Theme};
    pub use crate::Vec2;
}
