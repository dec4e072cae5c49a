//! Shared integration test helpers for treedump.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{capturing_dumper, sample_graph};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use tempfile::TempDir;
use treedump::{DumpOptions, Dumper, MemoryLogger, Table, Value};

/// Serializes tests that touch the process-wide default surface.
static DEFAULTS_LOCK: Mutex<()> = Mutex::new(());

/// Hold this for the whole test when reading or writing `treedump::defaults`.
///
/// The defaults are reset when the guard is taken.
pub fn lock_defaults() -> MutexGuard<'static, ()> {
    let guard = DEFAULTS_LOCK.lock();
    treedump::defaults::reset();
    guard
}

/// A dumper built from `options` that records its log lines.
pub fn capturing_dumper(options: DumpOptions) -> (Dumper, Arc<MemoryLogger>) {
    let logger = Arc::new(MemoryLogger::new());
    let dumper = Dumper::with_options(options.with_logger(logger.clone()));
    (dumper, logger)
}

/// Dump `table` and unwrap the text.
pub fn dump_text(dumper: &Dumper, table: &Table, name: &str) -> String {
    dumper
        .dump(&Value::from(table), Some(name))
        .expect("dump should not error")
        .expect("dump should produce text")
}

/// A small configuration-like graph with one shared table and one cycle.
///
/// ```text
/// app
///   name     = "demo"
///   version  = 3
///   servers  = [primary, primary]   (same table twice)
///   parent   -> app                  (cycle)
/// ```
pub fn sample_graph() -> Table {
    let primary = Table::from_pairs([("host", Value::from("db1")), ("port", Value::from(5432))]);
    let app = Table::new();
    app.set("name", "demo");
    app.set("version", 3);
    app.set("servers", Table::sequence([&primary, &primary]));
    app.set("parent", &app);
    app
}

/// Creates a temporary directory holding one file with `contents`.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn temp_file(name: &str, contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write temp file");
    (dir, path)
}
