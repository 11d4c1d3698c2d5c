//! Terminal logger
//!
//! A `log` backend that prints leveled, colored lines to stderr. Game
//! narration (hint, board, results) goes through it.

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct TermLogger;

static LOGGER: TermLogger = TermLogger;

impl Log for TermLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("{} {}", level_tag(record.level()), record.args());
    }

    fn flush(&self) {}
}

fn level_tag(level: Level) -> colored::ColoredString {
    match level {
        Level::Error => "ERRO".red().bold(),
        Level::Warn => "WARN".yellow().bold(),
        Level::Info => "INFO".cyan(),
        Level::Debug => "DEBU".bright_black(),
        Level::Trace => "TRAC".bright_black(),
    }
}

/// Install the terminal logger
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
