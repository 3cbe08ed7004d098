//! Simulation configuration.

use crate::config::{FlightConfig, RampLevel};

/// How the simulated player works the thrust control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pilot {
    /// Never touches the control.
    HandsOff,
    /// Waits `off_ms`, holds for `on_ms`, and repeats.
    Pulse { on_ms: u64, off_ms: u64 },
}

impl Pilot {
    /// Whether the control is held `elapsed_ms` into the flight.
    pub fn wants_thrust(&self, elapsed_ms: u64) -> bool {
        match *self {
            Self::HandsOff => false,
            Self::Pulse { on_ms, off_ms } => {
                let cycle = on_ms + off_ms;
                cycle > 0 && on_ms > 0 && elapsed_ms % cycle >= off_ms
            }
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Ramp levels to fly, one run each
    pub levels: Vec<RampLevel>,

    /// Geometry and timing shared by every run (ramp offset is overridden)
    pub base: FlightConfig,

    pub pilot: Pilot,

    /// Give up on a run after this much simulated time
    pub max_time_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            levels: RampLevel::ALL.to_vec(),
            base: FlightConfig::default(),
            pilot: Pilot::HandsOff,
            max_time_ms: 60_000,
        }
    }
}

impl SimConfig {
    /// Flight config for one ramp level.
    pub fn flight_config(&self, level: RampLevel) -> FlightConfig {
        FlightConfig {
            ramp_offset: level.offset(),
            ..self.base.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hands_off_never_thrusts() {
        assert!(!Pilot::HandsOff.wants_thrust(0));
        assert!(!Pilot::HandsOff.wants_thrust(123_456));
    }

    #[test]
    fn test_pulse_cycle() {
        let pilot = Pilot::Pulse {
            on_ms: 300,
            off_ms: 700,
        };
        assert!(!pilot.wants_thrust(0));
        assert!(!pilot.wants_thrust(699));
        assert!(pilot.wants_thrust(700));
        assert!(pilot.wants_thrust(999));
        assert!(!pilot.wants_thrust(1000));
    }

    #[test]
    fn test_degenerate_pulse_never_thrusts() {
        let pilot = Pilot::Pulse { on_ms: 0, off_ms: 0 };
        assert!(!pilot.wants_thrust(50));
    }

    #[test]
    fn test_flight_config_overrides_ramp_only() {
        let config = SimConfig::default();
        let high = config.flight_config(RampLevel::High);
        assert_eq!(high.ramp_offset, 450.0);
        assert_eq!(high.viewport_height, config.base.viewport_height);
    }
}
