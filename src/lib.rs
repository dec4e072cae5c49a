//! treedump: cycle-aware debug dumps of value graphs.
//!
//! A [`Dumper`] renders a [`Table`] and everything reachable from it as
//! indented text. Tables reached a second time are shown once and then
//! referenced by path, so cyclic graphs terminate.
//!
//! ```
//! use treedump::{Dumper, DumpOptions, Table, Value};
//!
//! let t = Table::from_pairs([("b", Value::from("x")), ("a", Value::from(1))]);
//! let dumper = Dumper::with_options(DumpOptions::new());
//! let text = dumper.dump(&Value::from(&t), Some("t")).unwrap().unwrap();
//! assert_eq!(text, "t = {\n  \"a\" = 1,\n  \"b\" = \"x\",\n}");
//! ```
//!
//! Options and the process-wide defaults live in `treedump-config`; the value
//! model lives in `treedump-model`. Both are re-exported here.

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod buffer;
pub mod cli;
pub mod debug;
mod dumper;
pub mod loader;
pub mod path;

pub use buffer::TextBuffer;
pub use dumper::Dumper;
pub use path::KeyPath;

pub use treedump_config::{
    CustomTextIndent, DumpError, DumpOptions, LogBridge, LogLevel, LogRecord, Logger,
    MemoryLogger, OptionsFile, OptionsFileError, OptionsFormat, RenderedEntry, defaults,
};
pub use treedump_model::{
    Callable, CustomText, Kind, Opaque, Table, TableId, Value, default_less, sort_by_less,
};
