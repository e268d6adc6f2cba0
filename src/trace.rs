//! The persistent layer accumulating the traced curve across frames.

use crate::color::trace_color;
use crate::surface::Surface;
use nalgebra::Vector2;

/// Connects each frame's traced point to the previous one on the persistent
/// layer, colored by the animation progress at which it was traced.
#[derive(Clone, Debug, Default)]
pub struct Tracer {
    last: Option<Vector2<f64>>,
}

impl Tracer {
    /// A tracer with no previous point.
    pub fn new() -> Tracer {
        Tracer { last: None }
    }

    /// The previous frame's traced point, if any since the last reset.
    pub fn last(&self) -> Option<Vector2<f64>> {
        self.last
    }

    /// Extends the trace to `point`.
    ///
    /// The first point after a reset only seeds the trace; every following
    /// one draws a segment from its predecessor in [`trace_color`].
    pub fn extend<S: Surface>(&mut self, point: Vector2<f64>, tick: f64, surface: &mut S) {
        if let Some(last) = self.last {
            surface.line(last, point, trace_color(tick));
        }
        self.last = Some(point);
    }

    /// Forgets the previous point so the next one seeds a fresh trace.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
