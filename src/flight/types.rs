//! Flight controller state.
//!
//! The rocket moves along a single vertical axis. Position is measured
//! downward from the top of the viewport, so larger values are closer to the
//! ramp.

use crate::config::FlightConfig;
use crate::motion::AnimatedValue;

/// Whether the player has started the current flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchState {
    NotLaunched,
    Launched,
}

/// Where the flight is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    /// Waiting on the launch pad.
    Idle,
    /// Automatic descent right after launch.
    Descending,
    /// Control held, springing toward the hover height.
    Thrusting,
    /// Control released, dropping toward the bottom.
    Falling,
    /// Hit the ramp. Terminal until reset.
    Crashed,
}

impl FlightPhase {
    pub fn in_flight(&self) -> bool {
        matches!(self, Self::Descending | Self::Thrusting | Self::Falling)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "On the pad",
            Self::Descending => "Descending",
            Self::Thrusting => "Thrusting",
            Self::Falling => "Falling",
            Self::Crashed => "Crashed",
        }
    }
}

/// Notable things that happened during an operation or tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightEvent {
    Launched,
    ThrustStarted,
    ThrustEnded,
    /// The ramp was hit at `position` after `flight_time_ms` of flight.
    Crashed { position: f64, flight_time_ms: u64 },
    Reset,
}

#[derive(Debug, Clone)]
pub struct FlightController {
    pub config: FlightConfig,
    pub launch_state: LaunchState,
    pub game_over: bool,
    pub phase: FlightPhase,

    // Animated values
    /// Vertical position, bounded to `[-rocket_size, viewport_height]`.
    pub(crate) position: AnimatedValue,
    /// Thrust intensity in `[0, 1]`.
    pub(crate) thrust: AnimatedValue,

    // Timing
    /// Sub-tick time accumulator (milliseconds).
    pub accumulated_time_ms: u64,
    /// Total physics ticks elapsed this flight.
    pub tick_count: u64,
    /// Time spent in flight before the crash.
    pub flight_time_ms: u64,

    /// Thrust presses this flight.
    pub burns: u32,
}

impl FlightController {
    pub fn new(config: FlightConfig) -> Self {
        let start_y = config.start_y();
        let position =
            AnimatedValue::new(start_y).with_bounds(start_y, config.viewport_height);
        Self {
            config,
            launch_state: LaunchState::NotLaunched,
            game_over: false,
            phase: FlightPhase::Idle,

            position,
            thrust: AnimatedValue::new(0.0).with_bounds(0.0, 1.0),

            accumulated_time_ms: 0,
            tick_count: 0,
            flight_time_ms: 0,

            burns: 0,
        }
    }

    pub fn position(&self) -> f64 {
        self.position.value()
    }

    pub fn thrust_intensity(&self) -> f64 {
        self.thrust.value()
    }

    pub fn is_launched(&self) -> bool {
        self.launch_state == LaunchState::Launched
    }

    /// Distance left before the rocket reaches the ramp.
    pub fn clearance(&self) -> f64 {
        (self.config.collision_threshold() - self.position()).max(0.0)
    }
}

impl Default for FlightController {
    fn default() -> Self {
        Self::new(FlightConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_controller_defaults() {
        let flight = FlightController::default();
        assert_eq!(flight.launch_state, LaunchState::NotLaunched);
        assert_eq!(flight.phase, FlightPhase::Idle);
        assert!(!flight.game_over);
        assert_eq!(flight.position(), -100.0);
        assert_eq!(flight.thrust_intensity(), 0.0);
        assert_eq!(flight.tick_count, 0);
        assert_eq!(flight.burns, 0);
    }

    #[test]
    fn test_clearance() {
        let flight = FlightController::default();
        // Default ramp threshold is 360, rocket starts at -100
        assert!((flight.clearance() - 460.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_in_flight_phases() {
        assert!(!FlightPhase::Idle.in_flight());
        assert!(FlightPhase::Descending.in_flight());
        assert!(FlightPhase::Thrusting.in_flight());
        assert!(FlightPhase::Falling.in_flight());
        assert!(!FlightPhase::Crashed.in_flight());
    }
}
