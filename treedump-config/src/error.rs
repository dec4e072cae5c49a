//! Typed error variants for the treedump-config crate.
//!
//! [`DumpError`] is the taxonomy a dump reports through. Whether the first two
//! variants reach the caller as `Err` or are logged depends on
//! `DumpOptions::strict`; `CallerMisuse` always reaches the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use treedump_config::DumpError;
//!
//! fn describe(e: &DumpError) -> &'static str {
//!     match e {
//!         DumpError::ArgumentType { .. } => "not a table",
//!         DumpError::OptionValidation(_) => "bad options",
//!         DumpError::CallerMisuse(_) => "programming error",
//!     }
//! }
//! ```

use treedump_model::Kind;

/// Errors produced by a dump.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DumpError {
    /// The value handed to `dump` is not a container.
    #[error("bad argument '{name}' to dump: expected table, got {kind}")]
    ArgumentType {
        /// Name the caller gave the value (or the configured top-level name).
        name: String,
        /// Kind of the value actually received.
        kind: Kind,
    },

    /// One or more options have invalid values.
    ///
    /// The inner string lists every violation, separated by `"; "`.
    #[error("invalid dump options: {0}")]
    OptionValidation(String),

    /// The dump entry point was used in a way that is always a programming
    /// error, such as re-entering an instance from one of its own hooks.
    #[error("dump called incorrectly: {0}")]
    CallerMisuse(String),
}

/// Errors that can occur when loading or saving an options file.
#[derive(Debug, thiserror::Error)]
pub enum OptionsFileError {
    /// An I/O error occurred reading or writing the file.
    #[error("I/O error on options file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contained invalid YAML.
    #[error("YAML error in options file: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The file contained invalid TOML.
    #[error("TOML parse error in options file: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file contained invalid JSON.
    #[error("JSON parse error in options file: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is not one of `yaml`, `yml`, `toml` or `json`.
    #[error("unsupported options file format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_type_message_names_argument_and_kind() {
        let err = DumpError::ArgumentType {
            name: "cfg".to_string(),
            kind: Kind::Number,
        };
        let msg = err.to_string();
        assert!(msg.contains("'cfg'"));
        assert!(msg.contains("number"));
    }

    #[test]
    fn test_option_validation_message() {
        let err = DumpError::OptionValidation("a; b".to_string());
        assert_eq!(err.to_string(), "invalid dump options: a; b");
    }
}
