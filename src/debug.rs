//! Diagnostic logging for the treedump binary.
//!
//! Installs a `log::Log` implementation so library log lines (including the
//! default dump logger, which writes under the `treedump` target) are visible.
//!
//! Level is chosen by the command line, or else by TREEDUMP_DEBUG_LEVEL:
//! - 0: No logging
//! - 1: Errors only (default)
//! - 2: Info level (files loaded, options files)
//! - 3: Debug level (dump traces, default surface changes)
//! - 4: Trace level
//!
//! Output goes to stderr so it never mixes with the dump on stdout. Set
//! TREEDUMP_LOG_FILE to write to a file instead.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::OnceLock;

/// Environment variable holding a numeric debug level.
pub const LEVEL_ENV: &str = "TREEDUMP_DEBUG_LEVEL";
/// Environment variable naming a log file.
pub const FILE_ENV: &str = "TREEDUMP_LOG_FILE";

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    /// Level named by TREEDUMP_DEBUG_LEVEL, if set to a number.
    pub fn from_env() -> Option<Self> {
        let val = std::env::var(LEVEL_ENV).ok()?;
        val.trim().parse::<u8>().ok().map(Self::from_number)
    }

    pub fn from_number(n: u8) -> Self {
        match n {
            0 => DebugLevel::Off,
            1 => DebugLevel::Error,
            2 => DebugLevel::Info,
            3 => DebugLevel::Debug,
            _ => DebugLevel::Trace,
        }
    }

    /// Level for a count of `-v` flags; no flags keeps errors only.
    pub fn from_verbosity(count: u8) -> Self {
        Self::from_number(count.saturating_add(1))
    }

    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            DebugLevel::Off => log::LevelFilter::Off,
            DebugLevel::Error => log::LevelFilter::Error,
            DebugLevel::Info => log::LevelFilter::Info,
            DebugLevel::Debug => log::LevelFilter::Debug,
            DebugLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

enum Sink {
    Stderr,
    File(File),
}

/// Global debug logger
struct DebugLogger {
    level: DebugLevel,
    sink: Mutex<Sink>,
}

impl DebugLogger {
    fn new(level: DebugLevel) -> Self {
        let sink = match std::env::var_os(FILE_ENV) {
            Some(path) if level != DebugLevel::Off => match OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(&path)
            {
                Ok(f) => Sink::File(f),
                // Fall back to stderr if the log file can't be opened
                Err(_) => Sink::Stderr,
            },
            _ => Sink::Stderr,
        };

        let to_file = matches!(sink, Sink::File(_));
        let logger = DebugLogger {
            level,
            sink: Mutex::new(sink),
        };
        if to_file {
            logger.write_raw(&format!(
                "{}\ntreedump debug session started at {} (level={:?})\n{}\n",
                "=".repeat(80),
                get_timestamp(),
                level,
                "=".repeat(80)
            ));
        }
        logger
    }

    fn write_raw(&self, msg: &str) {
        let mut sink = self.sink.lock();
        let _ = match &mut *sink {
            Sink::Stderr => std::io::stderr().write_all(msg.as_bytes()),
            Sink::File(file) => file.write_all(msg.as_bytes()).and_then(|_| file.flush()),
        };
    }
}

impl log::Log for DebugLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level.to_level_filter()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level_str = match record.level() {
            log::Level::Error => "ERROR",
            log::Level::Warn => "WARN ",
            log::Level::Info => "INFO ",
            log::Level::Debug => "DEBUG",
            log::Level::Trace => "TRACE",
        };
        self.write_raw(&format!(
            "[{}] [{}] [{}] {}\n",
            get_timestamp(),
            level_str,
            record.target(),
            record.args()
        ));
    }

    fn flush(&self) {
        if let Sink::File(file) = &mut *self.sink.lock() {
            let _ = file.flush();
        }
    }
}

static LOGGER: OnceLock<DebugLogger> = OnceLock::new();

fn get_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}

/// Install the process logger and return the level in effect.
///
/// `level` (from the command line) wins over TREEDUMP_DEBUG_LEVEL; with
/// neither, only errors are shown. Calling this twice keeps the first logger.
pub fn init_log_bridge(level: Option<DebugLevel>) -> DebugLevel {
    let level = level
        .or_else(DebugLevel::from_env)
        .unwrap_or(DebugLevel::Error);
    let logger = LOGGER.get_or_init(|| DebugLogger::new(level));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level.to_level_filter());
    }
    logger.level
}
