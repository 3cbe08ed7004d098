//! Easing curves for timed tweens.
//!
//! Every curve maps normalized progress `t` in `[0, 1]` to eased progress,
//! with `apply(0) == 0` and `apply(1) == 1`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Quadratic ease-in-out. Default curve for timed tweens.
    #[default]
    QuadInOut,
    /// Exponential ease-out: starts fast and decelerates (`1 - 2^(-10t)`).
    ExpOut,
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = 1.0 - t;
                    1.0 - 2.0 * u * u
                }
            }
            Self::ExpOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
        }
    }
}
