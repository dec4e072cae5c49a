//! Command-line interface for treedump.
//!
//! `treedump [OPTIONS] <FILE>` loads a JSON, YAML or TOML document and prints
//! its dump to stdout. Options are layered: the process defaults, then the
//! options file, then flags.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use treedump_config::{DumpOptions, Kind, MAX_VERBOSE_LEVEL, OptionsFile, defaults};

use crate::debug::DebugLevel;
use crate::dumper::Dumper;
use crate::loader::{self, DataFormat};

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for DebugLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Off => DebugLevel::Off,
            LogLevelArg::Error => DebugLevel::Error,
            LogLevelArg::Info => DebugLevel::Info,
            LogLevelArg::Debug => DebugLevel::Debug,
            LogLevelArg::Trace => DebugLevel::Trace,
        }
    }
}

/// treedump - cycle-aware debug dumps of structured data
#[derive(Parser, Debug)]
#[command(name = "treedump")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Data file to dump (JSON, YAML or TOML)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Document format (detected from the file extension when omitted)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<DataFormat>,

    /// Name shown in the header and used as the root of repeat paths
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// One level of indentation (spaces and tabs only)
    #[arg(long, value_name = "TEXT")]
    pub indent: Option<String>,

    /// Deepest level expanded below the root (-1 = unlimited)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max_depth: Option<i64>,

    /// Entries shown per table (-1 = unlimited)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max_items: Option<i64>,

    /// Fail on invalid options or input instead of logging
    #[arg(long)]
    pub strict: bool,

    /// List the keys of each table's metadata record
    #[arg(long)]
    pub show_metadata: bool,

    /// Omit the custom text line of tables that have one
    #[arg(long)]
    pub hide_custom_text: bool,

    /// Skip entries whose key has this kind (repeatable)
    #[arg(long, value_name = "KIND")]
    pub ignore_key_kind: Vec<Kind>,

    /// Skip entries whose value has this kind (repeatable)
    #[arg(long, value_name = "KIND")]
    pub ignore_value_kind: Vec<Kind>,

    /// Options file (YAML, TOML or JSON). Defaults to treedump/options.yaml
    /// in the user config directory when that file exists
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Write the effective options to FILE as YAML before dumping
    #[arg(long, value_name = "FILE")]
    pub save_options: Option<PathBuf>,

    /// Set debug log level (overrides TREEDUMP_DEBUG_LEVEL)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,

    /// Trace the dump (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level requested on the command line, if any.
    ///
    /// `-v` implies at least debug level, since dump traces are debug lines.
    pub fn debug_level(&self) -> Option<DebugLevel> {
        match (self.log_level, self.verbose) {
            (Some(level), _) => Some(level.into()),
            (None, 0) => None,
            (None, count) => Some(DebugLevel::from_verbosity(count).max(DebugLevel::Debug)),
        }
    }

    /// The options file in effect, if any.
    pub fn options_path(&self) -> Option<PathBuf> {
        self.options
            .clone()
            .or_else(|| default_options_path().filter(|path| path.exists()))
    }

    /// Layer the options file and the flags over the process defaults.
    pub fn build_options(&self) -> Result<DumpOptions> {
        let mut options = defaults::snapshot();

        if let Some(path) = self.options_path() {
            let file = OptionsFile::load(&path)
                .with_context(|| format!("Failed to load options from {}", path.display()))?;
            file.apply(&mut options);
        }

        if let Some(indent) = &self.indent {
            options.indent = indent.clone();
        }
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }
        if let Some(max_items) = self.max_items {
            options.max_items = max_items;
        }
        if self.strict {
            options.strict = true;
        }
        if self.show_metadata {
            options.show_metadata = true;
        }
        if self.hide_custom_text {
            options.show_custom_text = false;
        }
        options
            .ignore_key_kinds
            .extend(self.ignore_key_kind.iter().copied());
        options
            .ignore_value_kinds
            .extend(self.ignore_value_kind.iter().copied());
        if self.verbose > 0 {
            options.verbose_level = i64::from(self.verbose).min(MAX_VERBOSE_LEVEL);
        }

        Ok(options)
    }
}

/// Per-user options file: `<config dir>/treedump/options.yaml`.
pub fn default_options_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("treedump").join("options.yaml"))
}

/// Load the file, dump it and write the text to `out`.
///
/// Returns the process exit code: 0 when text was written, 1 when the dump
/// produced nothing (the reason has been logged).
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<i32> {
    let options = cli.build_options()?;

    if let Some(path) = &cli.save_options {
        OptionsFile::from_options(&options)
            .save(path)
            .with_context(|| format!("Failed to save options to {}", path.display()))?;
    }

    let value = loader::load_path(&cli.file, cli.format)?;
    let dumper = Dumper::with_options(options);
    match dumper.dump(&value, cli.name.as_deref())? {
        Some(text) => {
            writeln!(out, "{text}")?;
            Ok(0)
        }
        None => Ok(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("treedump").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_flags_parse() {
        let cli = parse(&[
            "data.json",
            "--max-depth",
            "-1",
            "--ignore-value-kind",
            "number",
            "--ignore-value-kind",
            "boolean",
            "-vv",
        ]);
        assert_eq!(cli.max_depth, Some(-1));
        assert_eq!(cli.ignore_value_kind, vec![Kind::Number, Kind::Boolean]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let args = ["treedump", "a.json", "--ignore-key-kind", "userdata"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_debug_level() {
        assert_eq!(parse(&["a.json"]).debug_level(), None);
        assert_eq!(parse(&["a.json", "-v"]).debug_level(), Some(DebugLevel::Debug));
        assert_eq!(parse(&["a.json", "-vvvv"]).debug_level(), Some(DebugLevel::Trace));
        assert_eq!(
            parse(&["a.json", "-v", "--log-level", "off"]).debug_level(),
            Some(DebugLevel::Off)
        );
    }

    #[test]
    fn test_flags_override_options_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opts.yaml");
        std::fs::write(&path, "max_depth: 3\nmax_items: 5\n").unwrap();

        let cli = parse(&[
            "a.json",
            "--options",
            path.to_str().unwrap(),
            "--max-items",
            "1",
            "-vvvvvv",
        ]);
        let options = cli.build_options().unwrap();
        assert_eq!(options.max_depth, 3);
        assert_eq!(options.max_items, 1);
        assert_eq!(options.verbose_level, MAX_VERBOSE_LEVEL);
    }
}
