use beztrace::BezierCurve;
use nalgebra::Vector2;
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Vector2::new({random():.5f}, {random():.5f}),")
/// ```
pub static POINTS: Lazy<[Vector2<f64>; 10]> = Lazy::new(|| {
    [
        Vector2::new(0.05122, 0.57132),
        Vector2::new(0.81728, 0.09196),
        Vector2::new(0.29803, 0.77337),
        Vector2::new(0.63219, 0.34119),
        Vector2::new(0.14018, 0.19320),
        Vector2::new(0.93042, 0.68775),
        Vector2::new(0.41586, 0.90214),
        Vector2::new(0.74587, 0.45031),
        Vector2::new(0.21902, 0.62188),
        Vector2::new(0.58743, 0.12705),
    ]
});

pub static CURVES: Lazy<Curves> = Lazy::new(Curves::new);
#[allow(non_snake_case)]
pub struct Curves {
    pub CUBIC: BezierCurve<f64>,
    pub MEDIUM: BezierCurve<f64>,
    pub LARGE: BezierCurve<f64>,
}
impl Curves {
    pub fn new() -> Curves {
        Curves {
            CUBIC: BezierCurve([0, 3, 6, 9].into_iter().map(|i| POINTS[i]).collect()),
            MEDIUM: BezierCurve((0..16).map(|i| POINTS[i % 10]).collect()),
            LARGE: BezierCurve((0..64).map(|i| POINTS[i % 10]).collect()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &BezierCurve<f64>> {
        [&self.CUBIC, &self.MEDIUM, &self.LARGE].into_iter()
    }
}
