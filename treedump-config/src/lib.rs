//! Configuration for treedump.
//!
//! This crate provides everything a dumper is configured with:
//!
//! - [`DumpOptions`] and its factory defaults
//! - The process-wide default surface ([`defaults::snapshot`], [`defaults::update`])
//! - Option validation ([`DumpOptions::validate`])
//! - The [`DumpError`] taxonomy
//! - The [`Logger`] contract with [`LogBridge`] and [`MemoryLogger`]
//! - Options files in YAML, TOML or JSON ([`OptionsFile`])

pub mod defaults;
mod error;
mod file;
mod hooks;
mod logger;
mod options;
mod validation;

pub use error::{DumpError, OptionsFileError};
pub use file::{OptionsFile, OptionsFormat};
pub use hooks::{Filter, Formatter, KeyComparator, PostRenderHook, RenderedEntry};
pub use logger::{LogBridge, LogLevel, LogRecord, Logger, MemoryLogger};
pub use options::{CustomTextIndent, DumpOptions};
pub use validation::MAX_VERBOSE_LEVEL;

// Re-export the model so hook authors need only one dependency.
pub use treedump_model::{Kind, Value};
