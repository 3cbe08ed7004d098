//! Fixed-duration tween between two values.

use super::easing::Easing;

#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u64,
    pub easing: Easing,
    /// Time spent in this tween so far.
    pub elapsed_ms: f64,
}

impl Timing {
    pub fn new(from: f64, to: f64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
            elapsed_ms: 0.0,
        }
    }

    /// Value at `elapsed_ms` into the tween. Lands exactly on `to` once the
    /// duration has passed; a zero duration is instantaneous.
    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms as f64 {
            return self.to;
        }
        let progress = self.easing.apply(elapsed_ms / self.duration_ms as f64);
        self.from + (self.to - self.from) * progress
    }

    /// Advance by `dt_ms` and return the new value.
    pub fn advance(&mut self, dt_ms: f64) -> f64 {
        self.elapsed_ms += dt_ms;
        self.sample(self.elapsed_ms)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_midpoint() {
        let t = Timing::new(0.0, 100.0, 1000, Easing::Linear);
        assert!((t.sample(500.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_lands_exactly_on_target() {
        let mut t = Timing::new(-100.0, 700.0, 12_000, Easing::ExpOut);
        let mut value = 0.0;
        for _ in 0..800 {
            value = t.advance(16.0);
        }
        assert!(t.is_finished());
        assert_eq!(value, 700.0);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let mut t = Timing::new(500.0, -100.0, 0, Easing::QuadInOut);
        assert_eq!(t.sample(0.0), -100.0);
        assert_eq!(t.advance(0.0), -100.0);
        assert!(t.is_finished());
    }

    #[test]
    fn test_works_in_both_directions() {
        let down = Timing::new(0.0, 10.0, 100, Easing::Linear);
        let up = Timing::new(10.0, 0.0, 100, Easing::Linear);
        assert!(down.sample(25.0) > 0.0);
        assert!(up.sample(25.0) < 10.0);
    }
}
