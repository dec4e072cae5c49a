//! Kind tags for values in a dump graph.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind tag of a [`crate::Value`].
///
/// Variants are declared in tag-name order so the derived `Ord` agrees with
/// ordering by [`Kind::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Boolean,
    Function,
    Nil,
    Number,
    Opaque,
    String,
    Table,
}

impl Kind {
    /// All kinds, in tag-name order.
    pub const ALL: [Kind; 7] = [
        Kind::Boolean,
        Kind::Function,
        Kind::Nil,
        Kind::Number,
        Kind::Opaque,
        Kind::String,
        Kind::Table,
    ];

    /// Tag name used in output, error messages and options files.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Boolean => "boolean",
            Kind::Function => "function",
            Kind::Nil => "nil",
            Kind::Number => "number",
            Kind::Opaque => "opaque",
            Kind::String => "string",
            Kind::Table => "table",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown kind tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown kind '{}' (expected one of: {})",
            self.0,
            Kind::ALL.map(Kind::name).join(", ")
        )
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
