//! The two phase state machine driving the animation.

/// Seconds the trace takes to run from `t = 0` to `t = 1`.
pub const GROW_DURATION: f64 = 3.0;

/// The phase an [`Animation`] is in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The curve is still being traced, i.e. `tick < 1`.
    Grow,
    /// The trace is complete and the construction lines fade out.
    Fade,
    /// Nothing left to animate; frames only happen on explicit triggers.
    Idle,
}

/// Animation progress and construction line visibility.
///
/// `tick` runs from 0 to 1 over [`GROW_DURATION`] seconds, then `opacity`
/// runs from 1 to 0 over one second. At most one of the two advances per
/// frame.
#[derive(Clone, Debug)]
pub struct Animation {
    tick: f64,
    opacity: f64,
}

impl Animation {
    /// A fresh animation at `tick = 0` with fully visible construction lines.
    pub fn new() -> Animation {
        Animation {
            tick: 0.0,
            opacity: 1.0,
        }
    }

    /// Progress of the curve trace in `[0, 1]`.
    pub fn tick(&self) -> f64 {
        self.tick
    }

    /// Visibility of the construction lines in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// The phase the animation is currently in.
    pub fn phase(&self) -> Phase {
        if self.tick < 1.0 {
            Phase::Grow
        } else if self.opacity > 0.0 {
            Phase::Fade
        } else {
            Phase::Idle
        }
    }

    /// Whether another frame should be scheduled.
    pub fn is_animating(&self) -> bool {
        self.tick < 1.0 || self.opacity > 0.0
    }

    /// Advances the current phase by `elapsed` seconds and reports
    /// [`is_animating`](Animation::is_animating).
    ///
    /// Negative elapsed times are treated as zero. The elapsed time is
    /// otherwise trusted; wall clock callers clamp their deltas before
    /// getting here (see `Session::frame`).
    pub fn advance(&mut self, elapsed: f64) -> bool {
        let elapsed = elapsed.max(0.0);
        match self.phase() {
            Phase::Grow => self.tick = (self.tick + elapsed / GROW_DURATION).min(1.0),
            Phase::Fade => self.opacity = (self.opacity - elapsed).max(0.0),
            Phase::Idle => {}
        }
        self.is_animating()
    }

    /// Restarts at `tick = 0` with fully visible construction lines.
    pub fn reset(&mut self) {
        *self = Animation::new();
    }
}

impl Default for Animation {
    fn default() -> Self {
        Animation::new()
    }
}
