//! Log setup.
//!
//! The terminal is in raw mode on the alternate screen while the game runs,
//! so log output goes to a file in the data directory instead of stderr.

use super::persistence::data_path;
use crate::constants::LOG_FILE_NAME;
use std::fs::OpenOptions;
use std::io;

/// Initialise `env_logger` writing to ~/.rocket-drop/rocket-drop.log.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init_file_logger() -> io::Result<()> {
    let path = data_path(LOG_FILE_NAME)?;
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
    Ok(())
}
