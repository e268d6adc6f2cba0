//! Ordered control point sequences and the De Casteljau subdivision step.

use nalgebra::{Field, Scalar, Vector2};
use smallvec::SmallVec;
use std::ops::{Deref, DerefMut};

/// An ordered sequence of 2d control points interpreted as a bezier curve.
///
/// Points are normalized to `[0, 1]` relative to the canvas they were placed
/// on. Cubic curves and lower are stored without heap allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierCurve<T: Scalar>(pub CurveInternal<T>);
type CurveInternal<T> = SmallVec<[Vector2<T>; 4]>;

impl<T: Scalar> Deref for BezierCurve<T> {
    type Target = CurveInternal<T>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl<T: Scalar> DerefMut for BezierCurve<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Scalar> BezierCurve<T> {
    /// Returns a curve's degree which is one lower then its number of control points
    pub fn degree(&self) -> usize {
        self.len() - 1
    }
}

/* De castlejau 's algorithm */
impl<T: Field + Scalar> BezierCurve<T> {
    /// Performs a single step of de castlejau's algorithm
    ///
    /// i.e. combines `n` points into `n - 1` points by computing
    /// `(1 - t) * A + t * B` on consecutive points `A` and `B`.
    ///
    /// Sequences shorter than two points have no consecutive pairs and
    /// produce an empty sequence.
    pub fn subdivide(&self, t: T) -> BezierCurve<T> {
        let mut output = SmallVec::with_capacity(self.len().saturating_sub(1));
        BezierCurve::castlejau_step(&self.0, &mut output, t);
        BezierCurve(output)
    }

    /// Get the point on the curve at position `t`.
    ///
    /// This method applies de castlejau's algorithm until a single point
    /// remains, reusing two buffers for the intermediate levels.
    pub fn castlejau_eval(&self, t: T) -> Vector2<T> {
        let inv_t = T::one() - t.clone();
        match &self[..] {
            [] => panic!(),
            [a1] => a1.clone(),
            [a2, b2] => a2 * inv_t + b2 * t,
            [a3, b3, c3] => {
                let a2 = a3 * inv_t.clone() + b3 * t.clone();
                let b2 = b3 * inv_t.clone() + c3 * t.clone();
                a2 * inv_t + b2 * t
            }
            [a4, b4, c4, d4] => {
                let a3 = a4 * inv_t.clone() + b4 * t.clone();
                let b3 = b4 * inv_t.clone() + c4 * t.clone();
                let c3 = c4 * inv_t.clone() + d4 * t.clone();
                let a2 = &a3 * inv_t.clone() + &b3 * t.clone();
                let b2 = &b3 * inv_t.clone() + &c3 * t.clone();
                a2 * inv_t + b2 * t
            }
            _ => {
                let mut old_points = self.0.clone();
                let mut new_points = self.0.clone();
                let mut points = (&mut old_points, &mut new_points);
                while points.0.len() > 1 {
                    BezierCurve::castlejau_step(points.0, points.1, t.clone());
                    points = (points.1, points.0);
                }
                return points.0[0].clone();
            }
        }
    }

    /// In-place variant of [`subdivide`](BezierCurve::subdivide) shared with
    /// the level renderer, which walks the whole hierarchy every frame and
    /// reuses its buffers instead of allocating per level.
    pub(crate) fn castlejau_step(input: &CurveInternal<T>, output: &mut CurveInternal<T>, t: T) {
        output.clear();
        let t_inv = T::one() - t.clone();
        for (p, q) in input.iter().zip(input.iter().skip(1)) {
            output.push(p * t_inv.clone() + q * t.clone());
        }
    }
}
