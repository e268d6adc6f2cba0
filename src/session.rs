//! The animation session tying control points, animation state and surfaces
//! into a single render loop.

use crate::anim::Animation;
use crate::curve::BezierCurve;
use crate::render::render_levels;
use crate::surface::{Layers, Surface, SurfaceError, SurfaceProvider};
use crate::trace::Tracer;
use nalgebra::Vector2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use std::time::Instant;

/// Upper bound on the wall clock delta fed into the animation per frame, so
/// a stalled or unreliable clock cannot skip most of the animation.
const MAX_FRAME_SECONDS: f64 = 1.0;

/// Input events delivered by the hosting frontend.
///
/// Mouse handling stays with the frontend; the session only sees its outcome.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Append a control point.
    AddPoint {
        /// Horizontal position relative to the canvas width, in `[0, 1]`.
        x: f64,
        /// Vertical position relative to the canvas height, in `[0, 1]`.
        y: f64,
    },
    /// Drop all control points.
    ClearPoints,
    /// Replace all control points with 16 to 64 random ones.
    RandomizePoints,
    /// The canvas changed to a new device size.
    CanvasResized {
        /// New device width in pixels.
        width: u32,
        /// New device height in pixels.
        height: u32,
    },
}

/// A running curve animation over one canvas.
///
/// All state lives on the caller's thread; input events and frames are plain
/// method calls and frame `N + 1` always observes the state frame `N` left.
pub struct Session<P: SurfaceProvider> {
    points: BezierCurve<f64>,
    animation: Animation,
    tracer: Tracer,
    layers: Layers<P>,
    rng: SmallRng,
    last_frame: Option<Instant>,
}

impl<P: SurfaceProvider> Session<P> {
    /// Creates a session with both layers allocated at the given size.
    pub fn new(provider: P, width: u32, height: u32) -> Result<Session<P>, SurfaceError> {
        Ok(Session {
            points: BezierCurve(SmallVec::new()),
            animation: Animation::new(),
            tracer: Tracer::new(),
            layers: Layers::new(provider, width, height)?,
            rng: SmallRng::from_os_rng(),
            last_frame: None,
        })
    }

    /// The current control points.
    pub fn points(&self) -> &BezierCurve<f64> {
        &self.points
    }

    /// The current animation state.
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// The per frame construction surface.
    pub fn construction(&self) -> &P::Surface {
        self.layers.construction()
    }

    /// The persistent trace surface, composited over the construction layer.
    pub fn trace(&self) -> &P::Surface {
        self.layers.trace()
    }

    /// Applies an input event to the session.
    ///
    /// Every event restarts the animation, except a resize to the size the
    /// surfaces already have. Only a resize can fail.
    pub fn handle(&mut self, event: InputEvent) -> Result<(), SurfaceError> {
        match event {
            InputEvent::AddPoint { x, y } => {
                self.points.push(Vector2::new(x, y));
                log::debug!(
                    "added control point ({x:.3}, {y:.3}), {} total",
                    self.points.len()
                );
                self.reset();
            }
            InputEvent::ClearPoints => {
                self.points.clear();
                log::debug!("cleared control points");
                self.reset();
            }
            InputEvent::RandomizePoints => {
                let count = self.rng.random_range(16..=64);
                let mut points = SmallVec::with_capacity(count);
                for _ in 0..count {
                    points.push(Vector2::new(self.rng.random(), self.rng.random()));
                }
                self.points = BezierCurve(points);
                log::debug!("randomized {count} control points");
                self.reset();
            }
            InputEvent::CanvasResized { width, height } => {
                if self.layers.ensure_size(width, height)? {
                    self.reset();
                }
            }
        }
        Ok(())
    }

    /// Restarts the animation from `tick = 0`, dropping the traced path.
    fn reset(&mut self) {
        self.animation.reset();
        self.tracer.reset();
        self.layers.trace_mut().clear();
        self.last_frame = None;
    }

    /// Renders one frame using the wall clock.
    ///
    /// The elapsed time since the previous frame is clamped to
    /// [`MAX_FRAME_SECONDS`]. Returns whether the caller should schedule
    /// another frame.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let elapsed = match self.last_frame {
            Some(last) => now
                .saturating_duration_since(last)
                .as_secs_f64()
                .min(MAX_FRAME_SECONDS),
            None => 0.0,
        };
        self.last_frame = Some(now);
        self.step(elapsed)
    }

    /// Renders one frame, advancing the animation by `elapsed` seconds.
    ///
    /// The construction surface is redrawn from scratch. With fewer than two
    /// control points there is no curve: the frame is otherwise a no-op, the
    /// animation holds its state and no further frame is requested.
    pub fn step(&mut self, elapsed: f64) -> bool {
        self.layers.construction_mut().clear();
        if self.points.len() < 2 {
            return false;
        }
        let tick = self.animation.tick();
        let traced = render_levels(
            &self.points,
            tick,
            self.animation.opacity(),
            self.layers.construction_mut(),
        );
        self.tracer.extend(traced, tick, self.layers.trace_mut());
        self.animation.advance(elapsed)
    }
}
