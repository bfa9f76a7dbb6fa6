use std::{
    io::{self, Write},
    sync::OnceLock,
};

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::config::PROGRAM_LOG_LEVEL;

/// Writes `<time> <LEVEL> [<target>] <message>` lines to stderr.
pub struct Logger {
    level: Level,
}

impl Logger {
    fn format(&self, record: &Record<'_>) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        format!(
            "{} {:<5} [{}] {}",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let line = self.format(record);
            // stderr going away is not worth a panic
            let _ = writeln!(io::stderr().lock(), "{line}");
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

fn get_level_from_env() -> Option<Level> {
    std::env::var(PROGRAM_LOG_LEVEL)
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level())
}

/// Level for `verbose` repetitions of `-v` on top of a base level.
fn raise_level(base: Level, verbose: u8) -> Level {
    let steps = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];
    let idx = steps.iter().position(|l| *l == base).unwrap_or(1);
    steps[(idx + verbose as usize).min(steps.len() - 1)]
}

/// Resolve the effective level: env var if set, otherwise `warn`, then
/// raised by `verbose`.
pub fn resolve_level(verbose: u8) -> Level {
    raise_level(get_level_from_env().unwrap_or(Level::Warn), verbose)
}

pub fn init() -> Result<(), SetLoggerError> {
    init_with_verbosity(0)
}

pub fn init_with_verbosity(verbose: u8) -> Result<(), SetLoggerError> {
    _init(resolve_level(verbose))
}

pub fn _init(level: Level) -> Result<(), SetLoggerError> {
    static LOGGER: OnceLock<Logger> = OnceLock::new();

    // Only the first call installs the logger; later calls must not move
    // the max level away from the installed logger's level.
    let init_call = LOGGER.get().is_none();
    let logger = LOGGER.get_or_init(|| Logger { level });

    if init_call {
        log::set_logger(logger)?;
        log::set_max_level(logger.level.to_level_filter());
    }

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
