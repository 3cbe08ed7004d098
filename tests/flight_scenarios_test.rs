//! End-to-end flight scenarios driven through the public API.
//!
//! Covers the full launch → thrust → fall → crash → reset cycle, and
//! replays seeded random press/release sequences to check that game over
//! fires exactly when the rocket reaches the ramp.
//!
//! Uses seeded ChaCha8Rng for deterministic behavior.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rocket_drop::constants::PHYSICS_TICK_MS;
use rocket_drop::flight::process_input;
use rocket_drop::{
    FlightConfig, FlightController, FlightEvent, FlightInput, FlightPhase, LaunchState, RampLevel,
};

/// Tick one physics step at a time for `ms`, collecting events.
fn run_for(flight: &mut FlightController, ms: u64) -> Vec<FlightEvent> {
    let mut events = Vec::new();
    for _ in 0..ms / PHYSICS_TICK_MS {
        events.extend(flight.tick(PHYSICS_TICK_MS));
    }
    events
}

fn crashes(events: &[FlightEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, FlightEvent::Crashed { .. }))
        .count()
}

#[test]
fn test_hands_off_descent_hits_every_ramp() {
    for level in RampLevel::ALL {
        let mut flight = FlightController::new(FlightConfig::for_ramp(level));
        assert_eq!(
            process_input(&mut flight, FlightInput::Launch),
            Some(FlightEvent::Launched)
        );

        let events = run_for(&mut flight, 12_000);
        assert_eq!(crashes(&events), 1, "{:?}", level);
        assert!(flight.game_over);
        assert_eq!(flight.phase, FlightPhase::Crashed);
        assert!(flight.position() >= flight.config.collision_threshold());
    }
}

#[test]
fn test_holding_thrust_keeps_rocket_aloft() {
    let mut flight = FlightController::new(FlightConfig::for_ramp(RampLevel::High));
    process_input(&mut flight, FlightInput::ThrustOn);
    assert_eq!(flight.launch_state, LaunchState::Launched);

    run_for(&mut flight, 304);
    process_input(&mut flight, FlightInput::ThrustOn);
    let events = run_for(&mut flight, 20_000);

    assert_eq!(crashes(&events), 0);
    assert!(!flight.game_over);
    assert_eq!(flight.phase, FlightPhase::Thrusting);
    let hover = flight.config.hover_y();
    assert!((flight.position() - hover).abs() < 1.0);
}

#[test]
fn test_release_then_crash_then_reset_then_relaunch() {
    let mut flight = FlightController::new(FlightConfig::for_ramp(RampLevel::Standard));
    flight.launch();
    run_for(&mut flight, 400);
    flight.begin_thrust();
    run_for(&mut flight, 1_600);
    assert!(!flight.game_over);

    flight.end_thrust();
    let events = run_for(&mut flight, 6_000);
    assert_eq!(crashes(&events), 1);
    assert!(flight.game_over);

    // Input is ignored once crashed
    assert_eq!(process_input(&mut flight, FlightInput::ThrustOn), None);
    assert_eq!(process_input(&mut flight, FlightInput::ThrustOff), None);
    assert!(flight.game_over);

    assert_eq!(
        process_input(&mut flight, FlightInput::Reset),
        Some(FlightEvent::Reset)
    );
    assert_eq!(flight.launch_state, LaunchState::NotLaunched);
    assert_eq!(flight.position(), flight.config.start_y());
    assert!(!flight.game_over);

    // The pad is still: nothing moves until the next launch
    assert!(run_for(&mut flight, 1_000).is_empty());
    assert_eq!(flight.position(), flight.config.start_y());

    flight.launch();
    let events = run_for(&mut flight, 12_000);
    assert_eq!(crashes(&events), 1);
}

#[test]
fn test_variable_frame_times_match_fixed_steps() {
    let config = FlightConfig::for_ramp(RampLevel::Low);
    let mut steady = FlightController::new(config.clone());
    let mut jittery = FlightController::new(config);
    steady.launch();
    jittery.launch();

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut jitter_total = 0;
    while jitter_total < 2_000 {
        let dt = rng.gen_range(1..=40);
        jittery.tick(dt);
        jitter_total += dt;
    }
    // Catch the steady twin up to the same number of physics steps
    while steady.tick_count < jittery.tick_count {
        steady.tick(PHYSICS_TICK_MS);
    }

    assert_eq!(steady.tick_count, jittery.tick_count);
    assert_eq!(steady.position(), jittery.position());
}

/// Random press/release/reset sequences. Game over must be set exactly
/// when some in-flight sample reached the collision threshold.
#[test]
fn test_random_sequences_latch_exactly_on_contact() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for round in 0..40 {
        let level = RampLevel::ALL[round % RampLevel::ALL.len()];
        let mut flight = FlightController::new(FlightConfig::for_ramp(level));
        let threshold = flight.config.collision_threshold();
        let mut deepest = f64::NEG_INFINITY;
        let mut crash_events = 0;

        for _ in 0..60 {
            let input = match rng.gen_range(0..20) {
                0 => FlightInput::Reset,
                1..=2 => FlightInput::Launch,
                3..=11 => FlightInput::ThrustOn,
                _ => FlightInput::ThrustOff,
            };
            if let Some(FlightEvent::Reset) = process_input(&mut flight, input) {
                deepest = f64::NEG_INFINITY;
                crash_events = 0;
            }

            let hold_ms = rng.gen_range(1..=50) * PHYSICS_TICK_MS;
            for _ in 0..hold_ms / PHYSICS_TICK_MS {
                let sampled = flight.phase.in_flight();
                let events = flight.tick(PHYSICS_TICK_MS);
                crash_events += crashes(&events);
                if sampled {
                    deepest = deepest.max(flight.position());
                }

                assert_eq!(
                    flight.game_over,
                    deepest >= threshold,
                    "round {} deepest {:.2} threshold {:.2}",
                    round,
                    deepest,
                    threshold
                );
                assert!(crash_events <= 1, "game over fired twice");
                assert!(flight.position() >= flight.config.start_y());
                assert!(flight.position() <= flight.config.viewport_height);
            }
        }
    }
}
