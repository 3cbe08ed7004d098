use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use rocket_drop::build_info;
use rocket_drop::constants::REALTIME_FRAME_MS;
use rocket_drop::flight::process_input;
use rocket_drop::input::{map_key, KeyAction, ThrustLatch};
use rocket_drop::ui::draw_ui;
use rocket_drop::utils::logging::init_file_logger;
use rocket_drop::{FlightConfig, FlightController, RampLevel};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

struct Options {
    config_path: Option<PathBuf>,
    ramp: Option<RampLevel>,
}

fn main() -> io::Result<()> {
    let options = parse_args();

    if let Err(e) = init_file_logger() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config = load_config(&options);
    log::info!(
        "Starting rocket-drop {} with ramp offset {}",
        build_info::version_string(),
        config.ramp_offset
    );
    let flight = FlightController::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let reports_release = supports_keyboard_enhancement().unwrap_or(false);
    if reports_release {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    log::debug!("Key release reporting: {}", reports_release);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, flight, ThrustLatch::new(reports_release));

    // Cleanup terminal
    if reports_release {
        terminal.backend_mut().execute(PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

/// Main loop: draw, read input, advance the flight.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut flight: FlightController,
    mut latch: ThrustLatch,
) -> io::Result<()> {
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, &flight))?;

        // Drain every pending event before stepping physics
        if event::poll(Duration::from_millis(REALTIME_FRAME_MS))? {
            loop {
                if let Event::Key(key_event) = event::read()? {
                    match map_key(&key_event, flight.is_launched(), &mut latch) {
                        KeyAction::Flight(input) => {
                            process_input(&mut flight, input);
                        }
                        KeyAction::Quit => return Ok(()),
                        KeyAction::None => {}
                    }
                }
                if !event::poll(Duration::from_millis(0))? {
                    break;
                }
            }
        }

        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame = Instant::now();

        if let Some(input) = latch.tick(dt_ms) {
            process_input(&mut flight, input);
        }
        flight.tick(dt_ms);
    }
}

/// Config file (explicit or default location) with the ramp override
/// applied. Exits on an explicit config that cannot be used.
fn load_config(options: &Options) -> FlightConfig {
    let mut config = match &options.config_path {
        Some(path) => match FlightConfig::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FlightConfig::load_or_default(),
    };

    if let Some(level) = options.ramp {
        config.ramp_offset = level.offset();
        if let Err(e) = config.validate() {
            eprintln!("Ramp '{}' does not fit this config: {}", level.name(), e);
            std::process::exit(1);
        }
    }
    config
}

fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut options = Options {
        config_path: None,
        ramp: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("rocket-drop {}", build_info::version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Rocket Drop - hold to thrust, release to fall\n");
                println!("Usage: rocket-drop [options]\n");
                println!("Options:");
                println!("  --ramp <low|standard|high>  Ramp height preset");
                println!("  --config <path>             Load a JSON flight config");
                println!("  --version                   Show version information");
                println!("  --help                      Show this help message\n");
                println!("Controls: [Space]/[Up] thrust, [Enter] launch, [R] reset, [Q] quit");
                std::process::exit(0);
            }
            "--ramp" | "-r" if i + 1 < args.len() => {
                match RampLevel::from_name(&args[i + 1]) {
                    Some(level) => options.ramp = Some(level),
                    None => {
                        eprintln!("Unknown ramp level: {}", args[i + 1]);
                        eprintln!("Expected one of: low, standard, high");
                        std::process::exit(1);
                    }
                }
                i += 1;
            }
            "--config" | "-c" if i + 1 < args.len() => {
                options.config_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'rocket-drop --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    options
}
