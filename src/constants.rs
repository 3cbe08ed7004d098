// Tick and timing
/// Fixed physics step in milliseconds (~60 FPS).
pub const PHYSICS_TICK_MS: u64 = 16;
/// Largest frame delta fed into the physics loop after a pause or lag spike.
pub const MAX_FRAME_DT_MS: u64 = 100;
/// Real-time frame pacing for the terminal loop.
pub const REALTIME_FRAME_MS: u64 = 16;

// Input
/// How long a press stays held without a fresh key event, on terminals that
/// never report key releases. Covers the ~500ms initial key-repeat delay.
pub const INPUT_HOLD_MS: u64 = 550;

// Flight defaults (device-independent units)
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;
pub const DEFAULT_ROCKET_SIZE: f64 = 100.0;
pub const DEFAULT_RAMP_OFFSET: f64 = 340.0;
pub const DEFAULT_HOVER_RATIO: f64 = 0.01;

// Motion durations
pub const DESCENT_DURATION_MS: u64 = 12_000;
pub const FALL_DURATION_MS: u64 = 4_000;
pub const THRUST_RISE_MS: u64 = 200;
pub const THRUST_DECAY_MS: u64 = 500;

// Thrust spring
pub const SPRING_DAMPING: f64 = 8.0;
pub const SPRING_STIFFNESS: f64 = 80.0;
pub const SPRING_MASS: f64 = 1.0;
/// Spring is considered at rest below this distance from its target.
pub const SPRING_REST_DISPLACEMENT: f64 = 0.01;
/// Spring is considered at rest below this speed (units per second).
pub const SPRING_REST_SPEED: f64 = 2.0;

// Files
pub const DATA_DIR_NAME: &str = ".rocket-drop";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "rocket-drop.log";
