//! Headless descent simulator CLI.
//!
//! Flies each ramp level without a terminal and reports when (or whether)
//! the rocket hits the ramp.
//!
//! Usage:
//!   cargo run --bin descent-sim -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin descent-sim                       # Hands off, every ramp
//!   cargo run --bin descent-sim -- --ramp low         # One ramp level
//!   cargo run --bin descent-sim -- --pulse 400 400    # Hold 400ms, wait 400ms
//!   cargo run --bin descent-sim -- --json             # Machine-readable output

use rocket_drop::simulator::{run_simulation, Pilot, SimConfig};
use rocket_drop::{FlightConfig, RampLevel};
use std::env;
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, json) = parse_args(&args);

    if json {
        println!("{}", run_simulation(&config).to_json());
        return;
    }

    println!("Rocket Drop descent simulator");
    println!();
    println!("Configuration:");
    println!("  Viewport:  {}", config.base.viewport_height);
    println!("  Rocket:    {}", config.base.rocket_size);
    println!(
        "  Ramps:     {}",
        config
            .levels
            .iter()
            .map(|l| l.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    match config.pilot {
        Pilot::HandsOff => println!("  Pilot:     hands off"),
        Pilot::Pulse { on_ms, off_ms } => {
            println!("  Pilot:     hold {}ms, wait {}ms", on_ms, off_ms)
        }
    }
    println!("  Max time:  {}ms", config.max_time_ms);
    println!();

    println!("{}", run_simulation(&config).to_text());
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-r" | "--ramp" => {
                if i + 1 < args.len() {
                    match RampLevel::from_name(&args[i + 1]) {
                        Some(level) => config.levels = vec![level],
                        None => exit_with(&format!("Unknown ramp level: {}", args[i + 1])),
                    }
                    i += 1;
                }
            }
            "-p" | "--pulse" => {
                if i + 2 < args.len() {
                    let on_ms = args[i + 1].parse().unwrap_or(400);
                    let off_ms = args[i + 2].parse().unwrap_or(400);
                    config.pilot = Pilot::Pulse { on_ms, off_ms };
                    i += 2;
                }
            }
            "-t" | "--time" => {
                if i + 1 < args.len() {
                    config.max_time_ms = args[i + 1].parse().unwrap_or(60_000);
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    match FlightConfig::load_from(Path::new(&args[i + 1])) {
                        Ok(base) => config.base = base,
                        Err(e) => exit_with(&format!("{}: {}", args[i + 1], e)),
                    }
                    i += 1;
                }
            }
            "--json" => {
                json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => exit_with(&format!("Unknown argument: {other}")),
        }
        i += 1;
    }

    (config, json)
}

fn exit_with(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'descent-sim --help' for usage.");
    std::process::exit(1);
}

fn print_help() {
    println!("Rocket Drop descent simulator\n");
    println!("Usage: descent-sim [OPTIONS]\n");
    println!("Options:");
    println!("  -r, --ramp <low|standard|high>  Fly a single ramp level");
    println!("  -p, --pulse <on_ms> <off_ms>    Pulse the thrust on a fixed schedule");
    println!("  -t, --time <ms>                 Give up after this much flight time");
    println!("  -c, --config <path>             Load geometry and timing from a JSON file");
    println!("      --json                      Print the report as JSON");
    println!("  -h, --help                      Show this help message");
}
