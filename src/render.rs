//! Walks the subdivision hierarchy level by level, drawing as it goes.

use crate::color::level_color;
use crate::curve::BezierCurve;
use crate::surface::Surface;
use nalgebra::Vector2;

/// Draws every level of the subdivision hierarchy onto `surface` and returns
/// the fully reduced point, i.e. the curve point at `t`.
///
/// Level `k` holds `len - k` points; its consecutive pairs are connected in
/// the `k`-th palette color with the fade state applied, then the level is
/// subdivided at `t` and the walk repeats until one point is left. The caller
/// clears the surface beforehand and guarantees at least two control points.
pub fn render_levels<S: Surface>(
    curve: &BezierCurve<f64>,
    t: f64,
    opacity: f64,
    surface: &mut S,
) -> Vector2<f64> {
    debug_assert!(curve.len() > 1, "a curve needs at least two control points");

    let mut old_points = curve.0.clone();
    let mut new_points = curve.0.clone();
    let mut points = (&mut old_points, &mut new_points);
    let mut level = 0;
    while points.0.len() > 1 {
        let color = level_color(level, opacity);
        for (p, q) in points.0.iter().zip(points.0.iter().skip(1)) {
            surface.line(*p, *q, color);
        }
        BezierCurve::castlejau_step(points.0, points.1, t);
        points = (points.1, points.0);
        level += 1;
    }
    points.0[0]
}
