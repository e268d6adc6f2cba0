//! Colors for the two layers: the level palette with its fade blend and the
//! tick driven trace gradient.

use num::clamp;

/// A straight-alpha rgba color with float channels in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel, 0 is fully transparent.
    pub a: f32,
}

impl Rgba {
    /// Constructs an opaque color from 8 bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Rgba {
        Rgba {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Replaces the alpha channel.
    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba { a, ..self }
    }
}

/// The hues cycled through by the construction line hierarchy, one per level.
pub static PALETTE: [Rgba; 9] = [
    Rgba::rgb8(255, 31, 31),
    Rgba::rgb8(255, 143, 31),
    Rgba::rgb8(255, 255, 31),
    Rgba::rgb8(143, 255, 31),
    Rgba::rgb8(31, 255, 31),
    Rgba::rgb8(31, 255, 143),
    Rgba::rgb8(31, 255, 255),
    Rgba::rgb8(31, 143, 255),
    Rgba::rgb8(31, 31, 255),
];

/// Maps the fade state of the construction lines to an alpha value.
///
/// The quotient `o² / (o² + (1 - o)²)` keeps the lines near full visibility
/// for most of the fade and drops them quickly around `opacity = 0.5`.
pub fn fade_alpha(opacity: f64) -> f64 {
    let kept = opacity * opacity;
    let gone = (1.0 - opacity) * (1.0 - opacity);
    kept / (kept + gone)
}

/// Color for one level of the construction hierarchy.
pub fn level_color(level: usize, opacity: f64) -> Rgba {
    PALETTE[level % PALETTE.len()].with_alpha(fade_alpha(opacity) as f32)
}

/// Color of the traced curve segment at animation progress `tick`.
///
/// Sweeps from red over green to blue while the alpha peaks at the curve's
/// middle and vanishes towards both ends.
pub fn trace_color(tick: f64) -> Rgba {
    let t = tick as f32;
    Rgba {
        r: clamp((1.0 - t) * 4.0 - 2.0, 0.0, 1.0),
        g: clamp(1.0 - (t * 2.0 - 1.0).powi(2), 0.0, 1.0),
        b: clamp(t * 4.0 - 2.0, 0.0, 1.0),
        a: clamp((1.0 - (t * 2.0 - 1.0).powi(4)) * 2.0, 0.0, 1.0),
    }
}
