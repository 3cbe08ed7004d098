//! Headless flight runs.
//!
//! Drives the real `FlightController` one physics step at a time, with the
//! pilot pressing and releasing the control on its schedule.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::config::RampLevel;
use crate::constants::PHYSICS_TICK_MS;
use crate::flight::{FlightController, FlightEvent};

/// Fly every configured ramp level once and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let runs = config
        .levels
        .iter()
        .map(|&level| simulate_single_run(config, level))
        .collect();
    SimReport::from_runs(runs)
}

/// Fly one flight until it crashes or runs out of time.
pub fn simulate_single_run(config: &SimConfig, level: RampLevel) -> RunStats {
    let mut flight = FlightController::new(config.flight_config(level));
    flight.launch();

    let mut stats = RunStats {
        level,
        threshold: flight.config.collision_threshold(),
        crashed: false,
        crash_time_ms: None,
        crash_position: None,
        burns: 0,
        highest_point: flight.position(),
        simulated_ms: 0,
    };

    let mut thrusting = false;
    let mut elapsed_ms = 0;
    while elapsed_ms < config.max_time_ms && !flight.game_over {
        let wants_thrust = config.pilot.wants_thrust(elapsed_ms);
        if wants_thrust != thrusting {
            if wants_thrust {
                flight.begin_thrust();
            } else {
                flight.end_thrust();
            }
            thrusting = wants_thrust;
        }

        for event in flight.tick(PHYSICS_TICK_MS) {
            if let FlightEvent::Crashed {
                position,
                flight_time_ms,
            } = event
            {
                stats.crashed = true;
                stats.crash_time_ms = Some(flight_time_ms);
                stats.crash_position = Some(position);
            }
        }
        elapsed_ms += PHYSICS_TICK_MS;
        stats.highest_point = stats.highest_point.min(flight.position());
    }

    stats.burns = flight.burns;
    stats.simulated_ms = elapsed_ms;
    stats
}

#[cfg(test)]
mod tests {
    use super::super::config::Pilot;
    use super::*;

    #[test]
    fn test_hands_off_always_crashes() {
        let report = run_simulation(&SimConfig::default());
        assert_eq!(report.runs.len(), 3);
        for run in &report.runs {
            assert!(run.crashed, "{:?} should crash", run.level);
            assert!(run.crash_position.unwrap() >= run.threshold);
            assert_eq!(run.burns, 0);
        }
    }

    #[test]
    fn test_higher_ramp_crashes_sooner() {
        let report = run_simulation(&SimConfig::default());
        let time = |level| {
            report
                .runs
                .iter()
                .find(|r| r.level == level)
                .and_then(|r| r.crash_time_ms)
                .unwrap()
        };
        assert!(time(RampLevel::High) < time(RampLevel::Standard));
        assert!(time(RampLevel::Standard) < time(RampLevel::Low));
    }

    #[test]
    fn test_steady_pulsing_stays_aloft() {
        let config = SimConfig {
            levels: vec![RampLevel::Low],
            pilot: Pilot::Pulse {
                on_ms: 400,
                off_ms: 400,
            },
            max_time_ms: 20_000,
            ..Default::default()
        };
        let run = simulate_single_run(&config, RampLevel::Low);
        assert!(!run.crashed);
        assert!(run.burns > 10);
        assert_eq!(run.simulated_ms, 20_000);
    }
}
