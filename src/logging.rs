use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::app::config::{CONFIG_DIR, Config};

pub const LOG_FILE: &str = "movie_search.log";

pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(CONFIG_DIR)
}

/// Sends `tracing` output to a log file; the terminal belongs to the UI.
///
/// `RUST_LOG` wins over the configured level. Logging is best effort: if the
/// file can't be opened the app runs without it.
pub fn init_logging(config: &Config) {
    let dir = log_dir();
    if fs::create_dir_all(&dir).is_err() {
        return;
    }

    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
