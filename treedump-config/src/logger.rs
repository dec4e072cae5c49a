//! Logger contract used by dumps, plus the two stock implementations.
//!
//! - [`LogBridge`] forwards to the `log` crate facade (the default).
//! - [`MemoryLogger`] keeps every line in memory, for tests and for callers
//!   that want to surface dump errors themselves.

use parking_lot::Mutex;

/// Sink for dump diagnostics.
///
/// Implementations must be `Send + Sync` so options can live in the
/// process-wide default surface.
pub trait Logger: Send + Sync {
    /// Report a failure (invalid options, non-container argument).
    fn error(&self, text: &str);

    /// Report a trace line. Only called when `verbose_level` asks for it.
    fn debug(&self, text: &str);
}

/// Default logger: routes to `log::error!` / `log::debug!` under the
/// `treedump` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogBridge;

impl Logger for LogBridge {
    fn error(&self, text: &str) {
        log::error!(target: "treedump", "{text}");
    }

    fn debug(&self, text: &str) {
        log::debug!(target: "treedump", "{text}");
    }
}

/// Level of a captured [`LogRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Debug,
}

/// One captured logger call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub text: String,
}

/// Logger that records every call.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Text of every error record.
    pub fn errors(&self) -> Vec<String> {
        self.texts(LogLevel::Error)
    }

    /// Text of every debug record.
    pub fn debugs(&self) -> Vec<String> {
        self.texts(LogLevel::Debug)
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }

    fn texts(&self, level: LogLevel) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.text.clone())
            .collect()
    }

    fn push(&self, level: LogLevel, text: &str) {
        self.records.lock().push(LogRecord {
            level,
            text: text.to_string(),
        });
    }
}

impl Logger for MemoryLogger {
    fn error(&self, text: &str) {
        self.push(LogLevel::Error, text);
    }

    fn debug(&self, text: &str) {
        self.push(LogLevel::Debug, text);
    }
}
