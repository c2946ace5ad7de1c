//! Renders a field without a window and writes a PNG snapshot.
//!
//! Run with: `cargo run --example headless_capture -- out.png`

use plexus::prelude::*;
use plexus::{capture, render};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const WARMUP_FRAMES: u32 = 240;

fn main() -> Result<(), CaptureError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "field.png".to_string());

    let mut field = ParticleField::new(FieldConfig::new());
    field.reset(WIDTH as f32, HEIGHT as f32, Theme::Dark);

    // Let the constellation spread out before the snapshot.
    for _ in 0..WARMUP_FRAMES {
        field.tick();
    }

    let mut frame = vec![0u8; (WIDTH * HEIGHT * 4) as usize];
    render::draw_field(&field, &mut frame, WIDTH, HEIGHT);
    capture::save_png(&frame, WIDTH, HEIGHT, &path)?;

    println!("Wrote {} ({}x{})", path, WIDTH, HEIGHT);
    Ok(())
}
