//! Wrap-boundary variant: particles drift off one edge and re-enter from the
//! opposite side instead of bouncing.
//!
//! Run with: `cargo run --example wrap_drift`

use plexus::prelude::*;
use plexus::window;

fn main() -> Result<(), HostError> {
    window::run(
        FieldConfig::new()
            .with_particle_count(160)
            .with_boundary(Boundary::Wrap)
            .with_base_speed(1.8),
    )
}
