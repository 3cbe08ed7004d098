//! Rocket flight: the thrust/fall/collision state machine.
//!
//! The player holds a control to spring the rocket up toward a hover height
//! and releases it to let the rocket fall. Reaching the ramp ends the
//! flight until it is reset.

pub mod logic;
pub mod types;

pub use logic::{process_input, FlightInput};
pub use types::{FlightController, FlightEvent, FlightPhase, LaunchState};
