//! Logger setup: terminal output on stderr plus a debug log file in the
//! cache directory.

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::paths;

/// Install the global logger. The file log always records at debug level.
///
/// Failing to open the log file is not fatal; the terminal logger still runs.
pub fn init(term_level: LevelFilter) {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    let mut file_error = None;
    if let Some(logs) = paths::log_dir() {
        match logs.open_latest() {
            Ok(file) => loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file)),
            Err(e) => file_error = Some((logs.latest(), e)),
        }
    }

    if CombinedLogger::init(loggers).is_err() {
        // Already installed, e.g. by a test harness
        return;
    }

    if let Some((path, e)) = file_error {
        log::warn!("log file {} unavailable: {}", path.display(), e);
    }
    log::debug!("logging initialized at {term_level}");
}
