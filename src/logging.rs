#![cfg(feature = "std")]

use std::env;
use std::io::Write;

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`error`..`trace`, or `off`).
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

/// Writes records to stderr so they never interleave with the game display.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr().lock(),
                "{} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `Warn` for missing or unknown values.
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger with the level taken from [`LOG_ENV`].
/// Calling it again is harmless.
pub fn init_logging() {
    let level = parse_level(env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
