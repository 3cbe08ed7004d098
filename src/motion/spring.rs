//! Damped spring motion.
//!
//! Solves the damped harmonic oscillator analytically rather than
//! integrating it, so the sampled position does not depend on frame timing.
//! Time is tracked in seconds internally; velocities are units per second.

use crate::constants::{
    SPRING_DAMPING, SPRING_MASS, SPRING_REST_DISPLACEMENT, SPRING_REST_SPEED, SPRING_STIFFNESS,
};
use serde::{Deserialize, Serialize};

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: SPRING_DAMPING,
            stiffness: SPRING_STIFFNESS,
            mass: SPRING_MASS,
        }
    }
}

impl SpringConfig {
    /// Undamped angular frequency (rad/s).
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio. Below 1 the spring overshoots its target.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// A running spring from a start value toward a target.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    pub to: f64,
    pub config: SpringConfig,
    /// Initial displacement from the target (`from - to`).
    start_offset: f64,
    /// Initial velocity in units per second.
    start_velocity: f64,
    elapsed_s: f64,
    settled: bool,
}

impl Spring {
    pub fn new(from: f64, to: f64, initial_velocity: f64, config: SpringConfig) -> Self {
        Self {
            to,
            config,
            start_offset: from - to,
            start_velocity: initial_velocity,
            elapsed_s: 0.0,
            settled: false,
        }
    }

    /// Position and velocity `t` seconds after the spring started.
    pub fn sample(&self, t: f64) -> (f64, f64) {
        let (offset, velocity) = self.displacement(t);
        (self.to + offset, velocity)
    }

    fn displacement(&self, t: f64) -> (f64, f64) {
        let w0 = self.config.natural_frequency();
        let zeta = self.config.damping_ratio();
        let d0 = self.start_offset;
        let u0 = self.start_velocity;

        if (zeta - 1.0).abs() < 1e-6 {
            // Critically damped
            let envelope = (-w0 * t).exp();
            let b = u0 + w0 * d0;
            let d = envelope * (d0 + b * t);
            let v = -w0 * d + envelope * b;
            (d, v)
        } else if zeta < 1.0 {
            let a = zeta * w0;
            let w1 = w0 * (1.0 - zeta * zeta).sqrt();
            let b = (u0 + a * d0) / w1;
            let envelope = (-a * t).exp();
            let (sin, cos) = (w1 * t).sin_cos();
            let d = envelope * (d0 * cos + b * sin);
            let v = -a * d + envelope * w1 * (b * cos - d0 * sin);
            (d, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            let c2 = (u0 - r1 * d0) / (r2 - r1);
            let c1 = d0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        }
    }

    /// Advance by `dt_ms`, returning the new position and velocity. Snaps
    /// onto the target once both rest thresholds are met.
    pub fn advance(&mut self, dt_ms: f64) -> (f64, f64) {
        if self.settled {
            return (self.to, 0.0);
        }
        self.elapsed_s += dt_ms / 1000.0;
        let (position, velocity) = self.sample(self.elapsed_s);
        if (position - self.to).abs() < SPRING_REST_DISPLACEMENT
            && velocity.abs() < SPRING_REST_SPEED
        {
            self.settled = true;
            return (self.to, 0.0);
        }
        (position, velocity)
    }

    pub fn is_finished(&self) -> bool {
        self.settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_settled(spring: &mut Spring) -> (Vec<f64>, u32) {
        let mut samples = Vec::new();
        let mut steps = 0;
        while !spring.is_finished() && steps < 10_000 {
            samples.push(spring.advance(16.0).0);
            steps += 1;
        }
        (samples, steps)
    }

    #[test]
    fn test_default_config_is_underdamped() {
        let config = SpringConfig::default();
        assert!(config.damping_ratio() < 1.0);
        assert!(config.damping_ratio() > 0.0);
    }

    #[test]
    fn test_underdamped_overshoots_then_settles() {
        let mut spring = Spring::new(600.0, 8.0, 0.0, SpringConfig::default());
        let (samples, steps) = run_until_settled(&mut spring);
        assert!(steps < 10_000, "spring never settled");
        let lowest = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        assert!(lowest < 8.0, "expected overshoot past the target");
        assert_eq!(*samples.last().unwrap(), 8.0);
    }

    #[test]
    fn test_critically_damped_never_overshoots() {
        let config = SpringConfig {
            damping: 2.0 * 80f64.sqrt(),
            stiffness: 80.0,
            mass: 1.0,
        };
        let mut spring = Spring::new(600.0, 8.0, 0.0, config);
        let (samples, _) = run_until_settled(&mut spring);
        assert!(samples.iter().all(|&p| p >= 8.0 - SPRING_REST_DISPLACEMENT));
    }

    #[test]
    fn test_overdamped_approaches_monotonically() {
        let config = SpringConfig {
            damping: 60.0,
            stiffness: 80.0,
            mass: 1.0,
        };
        let mut spring = Spring::new(100.0, 0.0, 0.0, config);
        let (samples, steps) = run_until_settled(&mut spring);
        assert!(steps < 10_000);
        for pair in samples.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-9);
        }
    }

    #[test]
    fn test_sample_at_zero_matches_start() {
        let spring = Spring::new(250.0, 8.0, -40.0, SpringConfig::default());
        let (position, velocity) = spring.sample(0.0);
        assert!((position - 250.0).abs() < 1e-9);
        assert!((velocity - (-40.0)).abs() < 1e-9);
    }

    #[test]
    fn test_initial_velocity_carries_over() {
        let still = Spring::new(300.0, 8.0, 0.0, SpringConfig::default());
        let falling = Spring::new(300.0, 8.0, 500.0, SpringConfig::default());
        // Still heading down shortly after the spring takes over
        assert!(falling.sample(0.016).0 > still.sample(0.016).0);
        assert!(falling.sample(0.016).0 > 300.0);
    }
}
