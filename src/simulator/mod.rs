//! Headless flight simulator.
//!
//! Flies the real flight controller without a terminal to compare ramp
//! levels and pilot timing.

mod config;
mod report;
mod runner;

pub use config::{Pilot, SimConfig};
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
