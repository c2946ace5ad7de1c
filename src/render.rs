//! Software rasterizer for the particle field.
//!
//! Paints into a plain RGBA8 frame, either the `pixels` surface buffer or any
//! `Vec<u8>` of the right size for headless runs. Drawing is alpha-composited
//! over an opaque clear, so the output frame is always fully opaque.
//!
//! Paint order per frame: clear, connection lines (underneath the nodes),
//! then a soft radial glow and a solid core disc per particle.

use glam::Vec2;

use crate::field::ParticleField;
use crate::visuals::Rgba;

/// Mutable view over an RGBA8 frame with blending primitives.
pub struct Raster<'a> {
    texels: &'a mut [[u8; 4]],
    width: u32,
    height: u32,
}

impl<'a> Raster<'a> {
    /// Wrap a raw RGBA8 frame of `width` by `height` pixels.
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        Self {
            texels: bytemuck::cast_slice_mut(frame),
            width,
            height,
        }
    }

    /// Fill the whole frame with an opaque color.
    pub fn clear(&mut self, color: Rgba) {
        for texel in self.texels.iter_mut() {
            *texel = [color.r, color.g, color.b, 0xff];
        }
    }

    /// Source-over blend of `color` at pixel `(x, y)` with coverage `alpha`.
    /// Out-of-bounds coordinates are discarded.
    fn blend(&mut self, x: i32, y: i32, color: Rgba, alpha: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let index = (y as u32 * self.width + x as u32) as usize;
        let Some(texel) = self.texels.get_mut(index) else {
            return;
        };
        texel[0] = mix(texel[0], color.r, alpha);
        texel[1] = mix(texel[1], color.g, alpha);
        texel[2] = mix(texel[2], color.b, alpha);
        texel[3] = 0xff;
    }

    /// Stroke a line from `a` to `b`, `width` pixels thick.
    ///
    /// Widths below one pixel thin out via coverage instead of vanishing.
    /// A zero-length segment draws nothing.
    pub fn stroke_line(&mut self, a: Vec2, b: Vec2, width: f32, color: Rgba) {
        let delta = b - a;
        let steps = delta.x.abs().max(delta.y.abs()).ceil() as i32;
        if steps == 0 || width <= 0.0 {
            return;
        }

        let core = color.a * width.min(1.0);
        let fringe = color.a * ((width - 1.0) * 0.5).clamp(0.0, 1.0);
        let along_x = delta.x.abs() >= delta.y.abs();
        let step = delta / steps as f32;

        let mut pos = a;
        for _ in 0..=steps {
            let x = pos.x.round() as i32;
            let y = pos.y.round() as i32;
            self.blend(x, y, color, core);
            if fringe > 0.0 {
                // Thicken across the minor axis.
                if along_x {
                    self.blend(x, y - 1, color, fringe);
                    self.blend(x, y + 1, color, fringe);
                } else {
                    self.blend(x - 1, y, color, fringe);
                    self.blend(x + 1, y, color, fringe);
                }
            }
            pos += step;
        }
    }

    /// Radial glow: `color.a` at the center fading linearly to zero at
    /// `radius`.
    pub fn glow_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let min_x = (center.x - radius).floor() as i32;
        let max_x = (center.x + radius).ceil() as i32;
        let min_y = (center.y - radius).floor() as i32;
        let max_y = (center.y + radius).ceil() as i32;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dist = Vec2::new(x as f32, y as f32).distance(center);
                if dist < radius {
                    self.blend(x, y, color, color.a * (1.0 - dist / radius));
                }
            }
        }
    }

    /// Solid disc of `radius` pixels with an antialiased rim.
    pub fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let min_x = (center.x - radius - 1.0).floor() as i32;
        let max_x = (center.x + radius + 1.0).ceil() as i32;
        let min_y = (center.y - radius - 1.0).floor() as i32;
        let max_y = (center.y + radius + 1.0).ceil() as i32;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dist = Vec2::new(x as f32, y as f32).distance(center);
                let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
                self.blend(x, y, color, color.a * coverage);
            }
        }
    }
}

/// Linear blend of one 8-bit channel.
#[inline]
fn mix(dst: u8, src: u8, alpha: f32) -> u8 {
    (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8
}

/// Paint one frame of `field` into `frame`.
///
/// Connections go first so the nodes sit on top. A pair of particles closer
/// than the attract distance gets a line whose opacity and width both grow as
/// the pair closes in; coincident particles produce no line and no NaN.
pub fn draw_field(field: &ParticleField, frame: &mut [u8], width: u32, height: u32) {
    let mut raster = Raster::new(frame, width, height);
    let palette = field.palette();
    raster.clear(palette.background);

    let particles = field.particles();
    let attract = field.config().attract_distance;
    let opacity_factor = field.config().connection_opacity;

    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let p1 = &particles[i];
            let p2 = &particles[j];
            let dist = p1.position.distance(p2.position);
            if dist < attract {
                let closeness = 1.0 - dist / attract;
                let alpha = (closeness * opacity_factor).min(1.0) * palette.line.a;
                let line_width = p1.size.min(p2.size) * 0.4 * closeness;
                raster.stroke_line(
                    p1.position,
                    p2.position,
                    line_width,
                    palette.line.with_alpha(alpha),
                );
            }
        }
    }

    for p in particles {
        let size = p.pulsed_size();
        raster.glow_disc(p.position, size * 3.0, palette.glow);
        raster.fill_disc(p.position, size, palette.particle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visuals::{Palette, Theme};

    const W: u32 = 64;
    const H: u32 = 48;

    fn blank_frame() -> Vec<u8> {
        vec![0u8; (W * H * 4) as usize]
    }

    fn texel(frame: &[u8], x: u32, y: u32) -> [u8; 4] {
        let index = ((y * W + x) * 4) as usize;
        [
            frame[index],
            frame[index + 1],
            frame[index + 2],
            frame[index + 3],
        ]
    }

    #[test]
    fn test_clear_fills_background() {
        let mut frame = blank_frame();
        let background = Palette::for_theme(Theme::Dark).background;
        Raster::new(&mut frame, W, H).clear(background);
        assert_eq!(texel(&frame, 0, 0), [8, 10, 18, 0xff]);
        assert_eq!(texel(&frame, W - 1, H - 1), [8, 10, 18, 0xff]);
    }

    #[test]
    fn test_fill_disc_paints_center() {
        let mut frame = blank_frame();
        let mut raster = Raster::new(&mut frame, W, H);
        raster.clear(Rgba::new(0, 0, 0, 1.0));
        raster.fill_disc(Vec2::new(32.0, 24.0), 3.0, Rgba::new(255, 255, 255, 1.0));
        assert_eq!(texel(&frame, 32, 24), [255, 255, 255, 0xff]);
        // Well outside the disc stays background.
        assert_eq!(texel(&frame, 10, 10), [0, 0, 0, 0xff]);
    }

    #[test]
    fn test_out_of_bounds_drawing_is_discarded() {
        let mut frame = blank_frame();
        let mut raster = Raster::new(&mut frame, W, H);
        raster.fill_disc(Vec2::new(-20.0, -20.0), 5.0, Rgba::new(255, 0, 0, 1.0));
        raster.glow_disc(Vec2::new(1000.0, 1000.0), 8.0, Rgba::new(255, 0, 0, 1.0));
        raster.stroke_line(
            Vec2::new(-50.0, 10.0),
            Vec2::new(-10.0, 10.0),
            1.0,
            Rgba::new(255, 0, 0, 1.0),
        );
        assert!(frame.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_length_stroke_is_noop() {
        let mut frame = blank_frame();
        let mut raster = Raster::new(&mut frame, W, H);
        let p = Vec2::new(30.0, 20.0);
        raster.stroke_line(p, p, 2.0, Rgba::new(255, 255, 255, 1.0));
        assert!(frame.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_stroke_line_touches_both_endpoints() {
        let mut frame = blank_frame();
        let mut raster = Raster::new(&mut frame, W, H);
        raster.clear(Rgba::new(0, 0, 0, 1.0));
        raster.stroke_line(
            Vec2::new(5.0, 5.0),
            Vec2::new(40.0, 30.0),
            1.0,
            Rgba::new(255, 255, 255, 1.0),
        );
        assert_ne!(texel(&frame, 5, 5), [0, 0, 0, 0xff]);
        assert_ne!(texel(&frame, 40, 30), [0, 0, 0, 0xff]);
    }

    #[test]
    fn test_glow_fades_with_distance() {
        let mut frame = blank_frame();
        let mut raster = Raster::new(&mut frame, W, H);
        raster.clear(Rgba::new(0, 0, 0, 1.0));
        raster.glow_disc(Vec2::new(32.0, 24.0), 10.0, Rgba::new(200, 200, 200, 0.8));
        let near = texel(&frame, 32, 24)[0];
        let mid = texel(&frame, 37, 24)[0];
        let edge = texel(&frame, 41, 24)[0];
        assert!(near > mid);
        assert!(mid > edge);
        // Outside the radius: untouched.
        assert_eq!(texel(&frame, 32 + 12, 24), [0, 0, 0, 0xff]);
    }
}
