//! A single continuously animated value.
//!
//! At most one motion drives the value at a time. Starting a new motion
//! replaces whatever was running, and the replacement picks up from the
//! current value (and, for springs, the current velocity).

use super::easing::Easing;
use super::spring::{Spring, SpringConfig};
use super::timing::Timing;

/// The motion currently driving an [`AnimatedValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    Timing(Timing),
    Spring(Spring),
}

impl Motion {
    /// Target the motion is heading toward.
    pub fn target(&self) -> f64 {
        match self {
            Self::Timing(t) => t.to,
            Self::Spring(s) => s.to,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedValue {
    value: f64,
    /// Units per second, measured over the last step.
    velocity: f64,
    motion: Option<Motion>,
    bounds: Option<(f64, f64)>,
}

impl AnimatedValue {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            motion: None,
            bounds: None,
        }
    }

    /// Clamp every produced value into `[min, max]`.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some((min, max));
        self.value = self.value.clamp(min, max);
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn motion(&self) -> Option<&Motion> {
        self.motion.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Start a timed tween from the current value, superseding any motion.
    pub fn animate_timing(&mut self, to: f64, duration_ms: u64, easing: Easing) {
        if duration_ms == 0 {
            self.snap(to);
            return;
        }
        self.motion = Some(Motion::Timing(Timing::new(
            self.value,
            to,
            duration_ms,
            easing,
        )));
    }

    /// Start a spring from the current value and velocity, superseding any
    /// motion.
    pub fn animate_spring(&mut self, to: f64, config: SpringConfig) {
        self.motion = Some(Motion::Spring(Spring::new(
            self.value,
            to,
            self.velocity,
            config,
        )));
    }

    /// Jump straight to `value`, cancelling any running motion.
    pub fn snap(&mut self, value: f64) {
        self.motion = None;
        self.velocity = 0.0;
        self.value = self.clamp(value);
    }

    /// Advance the active motion by `dt_ms`. Returns the new value.
    pub fn step(&mut self, dt_ms: f64) -> f64 {
        let Some(motion) = self.motion.as_mut() else {
            self.velocity = 0.0;
            return self.value;
        };

        let previous = self.value;
        let (next, finished) = match motion {
            Motion::Timing(timing) => {
                let next = timing.advance(dt_ms);
                (next, timing.is_finished())
            }
            Motion::Spring(spring) => {
                let (next, _) = spring.advance(dt_ms);
                (next, spring.is_finished())
            }
        };

        self.value = self.clamp(next);
        self.velocity = if dt_ms > 0.0 {
            (self.value - previous) * 1000.0 / dt_ms
        } else {
            0.0
        };
        if finished {
            self.motion = None;
        }
        self.value
    }

    fn clamp(&self, value: f64) -> f64 {
        match self.bounds {
            Some((min, max)) => value.clamp(min, max),
            None => value,
        }
    }
}
