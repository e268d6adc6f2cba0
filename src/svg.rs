//! Small svg backend for the [`Surface`] trait.
//!
//! Only used by the demo binary and the tests; real frontends are expected
//! to bring their own surface.

use crate::color::Rgba;
use crate::surface::{Layer, Surface, SurfaceError, SurfaceProvider};
use nalgebra::Vector2;
use std::fmt::{Display, Formatter, Write};

/// A drawing surface recording `<line>` elements in device coordinates.
pub struct SvgSurface {
    layer: Layer,
    width: u32,
    height: u32,
    elements: Vec<Line>,
}

struct Line {
    from: Vector2<f64>,
    to: Vector2<f64>,
    width: f64,
    color: Rgba,
}

impl Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"",
            self.from[0], self.from[1], self.to[0], self.to[1]
        )?;
        write!(
            f,
            " stroke=\"rgb({},{},{})\" stroke-opacity=\"{}\" stroke-width=\"{}\"",
            (self.color.r * 255.0).round() as u8,
            (self.color.g * 255.0).round() as u8,
            (self.color.b * 255.0).round() as u8,
            self.color.a,
            self.width
        )?;
        writeln!(f, "/>")?;
        return Ok(());
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn line(&mut self, from: Vector2<f64>, to: Vector2<f64>, color: Rgba) {
        let (w, h) = (self.width as f64, self.height as f64);
        self.elements.push(Line {
            from: Vector2::new(from[0] * w, from[1] * h),
            to: Vector2::new(to[0] * w, to[1] * h),
            width: match self.layer {
                Layer::Construction => 1.0,
                Layer::Trace => 2.0,
            },
            color,
        });
    }
}

/// Allocates [`SvgSurface`]s. Never fails.
pub struct SvgProvider;

impl SurfaceProvider for SvgProvider {
    type Surface = SvgSurface;

    fn create(
        &mut self,
        layer: Layer,
        width: u32,
        height: u32,
    ) -> Result<SvgSurface, SurfaceError> {
        Ok(SvgSurface {
            layer,
            width,
            height,
            elements: Vec::new(),
        })
    }
}

/// Writes both layers into one svg document: a black background, the
/// construction lines, the traced curve on top.
pub fn composite(construction: &SvgSurface, trace: &SvgSurface) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg viewBox=\"0 0 {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
        construction.width, construction.height
    );
    let _ = writeln!(out, "<rect width=\"100%\" height=\"100%\" fill=\"black\"/>");
    for line in construction.elements.iter().chain(trace.elements.iter()) {
        let _ = write!(out, "{}", line);
    }
    let _ = writeln!(out, "</svg>");
    out
}
