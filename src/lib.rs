//! Rocket Drop - hold to thrust, release to fall, don't hit the ramp.
//!
//! This module exposes the flight logic for testing and the bundled
//! binaries.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod flight;
pub mod input;
pub mod motion;
pub mod simulator;
pub mod ui;
pub mod utils;

pub use config::{ConfigError, FlightConfig, RampLevel};
pub use flight::{FlightController, FlightEvent, FlightInput, FlightPhase, LaunchState};
