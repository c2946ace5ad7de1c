//! Theme-keyed colors for field rendering.
//!
//! The palette has exactly two states, one per [`Theme`], and no loading or
//! intermediate state. Theme changes swap the palette in place and touch
//! nothing else.

/// Color-scheme flag provided by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Whether this is the dark scheme.
    #[inline]
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The other scheme.
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// An 8-bit RGB color with a separate floating-point coverage alpha.
///
/// Alpha is kept as f32 because it multiplies with distance falloffs and
/// line-width coverage before any pixel is touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a replacement alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// The four colors a frame is painted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Opaque clear color behind everything.
    pub background: Rgba,
    /// Solid core disc of each node.
    pub particle: Rgba,
    /// Connection lines, before the distance-based opacity ramp.
    pub line: Rgba,
    /// Center color of the radial glow; alpha fades linearly to zero.
    pub glow: Rgba,
}

impl Palette {
    /// Palette for the given theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Rgba::new(8, 10, 18, 1.0),
                particle: Rgba::new(0, 200, 255, 0.9),
                line: Rgba::new(0, 200, 255, 0.15),
                glow: Rgba::new(150, 150, 255, 0.8),
            },
            Theme::Light => Self {
                background: Rgba::new(245, 246, 250, 1.0),
                particle: Rgba::new(0, 150, 255, 0.7),
                line: Rgba::new(0, 150, 255, 0.1),
                glow: Rgba::new(70, 70, 140, 0.6),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }

    #[test]
    fn test_palettes_differ_by_theme() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.particle, dark.particle);
        assert_ne!(light.background, dark.background);
        // Lines are always fainter than cores.
        assert!(light.line.a < light.particle.a);
        assert!(dark.line.a < dark.particle.a);
    }

    #[test]
    fn test_with_alpha_keeps_channels() {
        let color = Rgba::new(0, 200, 255, 0.15).with_alpha(0.6);
        assert_eq!((color.r, color.g, color.b), (0, 200, 255));
        assert_eq!(color.a, 0.6);
    }
}
