//! Flight controller logic: launch, thrust, release, ramp collision, reset,
//! and the fixed-step physics loop that drives them.

use super::types::*;
use crate::constants::{MAX_FRAME_DT_MS, PHYSICS_TICK_MS};
use crate::motion::Easing;

/// UI-agnostic input actions for the flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightInput {
    /// Start the flight from the pad.
    Launch,
    /// Control surface pressed.
    ThrustOn,
    /// Control surface released.
    ThrustOff,
    /// Back to the pad.
    Reset,
}

/// Route a player input to the matching controller operation.
///
/// On the pad, pressing thrust launches instead.
pub fn process_input(flight: &mut FlightController, input: FlightInput) -> Option<FlightEvent> {
    match input {
        FlightInput::Launch => flight.launch(),
        FlightInput::ThrustOn if !flight.is_launched() => flight.launch(),
        FlightInput::ThrustOn => flight.begin_thrust(),
        FlightInput::ThrustOff => flight.end_thrust(),
        FlightInput::Reset => Some(flight.reset()),
    }
}

impl FlightController {
    /// Leave the pad and start the automatic descent. No effect once
    /// launched.
    pub fn launch(&mut self) -> Option<FlightEvent> {
        if self.launch_state == LaunchState::Launched {
            return None;
        }
        self.launch_state = LaunchState::Launched;
        self.phase = FlightPhase::Descending;
        self.position.animate_timing(
            self.config.bottom_y(),
            self.config.descent_duration_ms,
            Easing::ExpOut,
        );
        log::info!(
            "Launched: ramp threshold at {:.1}",
            self.config.collision_threshold()
        );
        Some(FlightEvent::Launched)
    }

    /// Control pressed: ramp thrust up and spring toward the hover height.
    /// A repeated press restarts both animations.
    pub fn begin_thrust(&mut self) -> Option<FlightEvent> {
        if !self.phase.in_flight() {
            return None;
        }
        self.phase = FlightPhase::Thrusting;
        self.burns += 1;
        self.thrust
            .animate_timing(1.0, self.config.thrust_rise_ms, Easing::QuadInOut);
        self.position
            .animate_spring(self.config.hover_y(), self.config.spring);
        log::debug!("Thrust on at {:.1}", self.position());
        Some(FlightEvent::ThrustStarted)
    }

    /// Control released: let thrust die down and drop toward the bottom.
    pub fn end_thrust(&mut self) -> Option<FlightEvent> {
        if !self.phase.in_flight() {
            return None;
        }
        self.phase = FlightPhase::Falling;
        self.thrust
            .animate_timing(0.0, self.config.thrust_decay_ms, Easing::QuadInOut);
        self.position.animate_timing(
            self.config.bottom_y(),
            self.config.fall_duration_ms,
            Easing::QuadInOut,
        );
        log::debug!("Thrust off at {:.1}", self.position());
        Some(FlightEvent::ThrustEnded)
    }

    /// Ramp collision check, run on every position update. Latches game
    /// over the first time `position` reaches the ramp; later calls are
    /// no-ops until reset.
    pub fn evaluate(&mut self, position: f64) -> Option<FlightEvent> {
        if self.game_over || !self.phase.in_flight() {
            return None;
        }
        if position < self.config.collision_threshold() {
            return None;
        }
        self.game_over = true;
        self.phase = FlightPhase::Crashed;
        log::info!(
            "Crashed into the ramp at {:.1} after {}ms ({} burns)",
            position,
            self.flight_time_ms,
            self.burns
        );
        Some(FlightEvent::Crashed {
            position,
            flight_time_ms: self.flight_time_ms,
        })
    }

    /// Back to the pad: position snaps to the start, no animation.
    pub fn reset(&mut self) -> FlightEvent {
        self.launch_state = LaunchState::NotLaunched;
        self.game_over = false;
        self.phase = FlightPhase::Idle;
        self.position.snap(self.config.start_y());
        self.thrust.snap(0.0);
        self.accumulated_time_ms = 0;
        self.tick_count = 0;
        self.flight_time_ms = 0;
        self.burns = 0;
        log::info!("Reset to the pad");
        FlightEvent::Reset
    }

    /// Advance the flight. Called from the main loop with the milliseconds
    /// since the last call.
    ///
    /// Steps physics in fixed `PHYSICS_TICK_MS` increments and checks for
    /// the ramp after every step, so no intermediate position is skipped.
    /// Nothing moves on the pad.
    pub fn tick(&mut self, dt_ms: u64) -> Vec<FlightEvent> {
        let mut events = Vec::new();
        if !self.is_launched() {
            return events;
        }

        // Clamp dt to prevent a huge catch-up after pause/lag
        self.accumulated_time_ms += dt_ms.min(MAX_FRAME_DT_MS);

        while self.accumulated_time_ms >= PHYSICS_TICK_MS {
            self.accumulated_time_ms -= PHYSICS_TICK_MS;
            if let Some(event) = self.step_physics() {
                events.push(event);
            }
        }
        events
    }

    /// Single physics step (16ms tick).
    fn step_physics(&mut self) -> Option<FlightEvent> {
        self.tick_count += 1;
        let dt = PHYSICS_TICK_MS as f64;

        // Motion keeps running after a crash so the rocket settles visibly
        let position = self.position.step(dt);
        self.thrust.step(dt);

        if self.phase.in_flight() {
            self.flight_time_ms += PHYSICS_TICK_MS;
        }
        self.evaluate(position)
    }
}
