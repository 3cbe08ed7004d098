//! Motion primitives: easing curves, timed tweens, springs, and the
//! animated value cell that ties them together.

pub mod animated;
pub mod easing;
pub mod spring;
pub mod timing;

pub use animated::{AnimatedValue, Motion};
pub use easing::Easing;
pub use spring::{Spring, SpringConfig};
pub use timing::Timing;
