//! Load JSON, YAML and TOML documents as value graphs.
//!
//! Objects and mappings become tables. Sequences become tables keyed `1..=n`.
//! Nulls vanish, since a nil value cannot be stored in a table.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use treedump_model::{Table, Value};

/// Document formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DataFormat {
    Json,
    Yaml,
    Toml,
}

impl DataFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            "toml" => Some(DataFormat::Toml),
            _ => None,
        }
    }
}

pub fn from_json(value: &serde_json::Value) -> Value {
    use serde_json::Value as Json;

    match value {
        Json::Null => Value::Nil,
        Json::Bool(b) => Value::Boolean(*b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => n.as_f64().map(Value::Float).unwrap_or_default(),
        },
        Json::String(s) => Value::from(s.as_str()),
        Json::Array(items) => Value::from(Table::sequence(items.iter().map(from_json))),
        Json::Object(map) => Value::from(Table::from_pairs(
            map.iter().map(|(k, v)| (k.as_str(), from_json(v))),
        )),
    }
}

pub fn from_yaml(value: &serde_yaml_ng::Value) -> Value {
    use serde_yaml_ng::Value as Yaml;

    match value {
        Yaml::Null => Value::Nil,
        Yaml::Bool(b) => Value::Boolean(*b),
        Yaml::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => n.as_f64().map(Value::Float).unwrap_or_default(),
        },
        Yaml::String(s) => Value::from(s.as_str()),
        Yaml::Sequence(items) => Value::from(Table::sequence(items.iter().map(from_yaml))),
        // Non-string keys keep their kind; null keys are dropped by the table.
        Yaml::Mapping(map) => Value::from(Table::from_pairs(
            map.iter().map(|(k, v)| (from_yaml(k), from_yaml(v))),
        )),
        Yaml::Tagged(tagged) => from_yaml(&tagged.value),
    }
}

pub fn from_toml(value: &toml::Value) -> Value {
    use toml::Value as Toml;

    match value {
        Toml::String(s) => Value::from(s.as_str()),
        Toml::Integer(i) => Value::Integer(*i),
        Toml::Float(f) => Value::Float(*f),
        Toml::Boolean(b) => Value::Boolean(*b),
        Toml::Datetime(dt) => Value::from(dt.to_string()),
        Toml::Array(items) => Value::from(Table::sequence(items.iter().map(from_toml))),
        Toml::Table(table) => from_toml_table(table),
    }
}

fn from_toml_table(table: &toml::Table) -> Value {
    Value::from(Table::from_pairs(
        table.iter().map(|(k, v)| (k.as_str(), from_toml(v))),
    ))
}

/// Parse a document held in memory.
pub fn parse_str(contents: &str, format: DataFormat) -> Result<Value> {
    Ok(match format {
        DataFormat::Json => {
            let doc: serde_json::Value =
                serde_json::from_str(contents).context("Failed to parse JSON")?;
            from_json(&doc)
        }
        DataFormat::Yaml => {
            let doc: serde_yaml_ng::Value =
                serde_yaml_ng::from_str(contents).context("Failed to parse YAML")?;
            from_yaml(&doc)
        }
        DataFormat::Toml => {
            let doc: toml::Table = toml::from_str(contents).context("Failed to parse TOML")?;
            from_toml_table(&doc)
        }
    })
}

/// Read and parse a file. `format` overrides detection by extension.
pub fn load_path(path: &Path, format: Option<DataFormat>) -> Result<Value> {
    let format = match format.or_else(|| DataFormat::from_path(path)) {
        Some(format) => format,
        None => anyhow::bail!(
            "Cannot tell the format of {}; use --format json|yaml|toml",
            path.display()
        ),
    };
    log::info!("Loading {:?} as {:?}", path, format);
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_str(&contents, format).with_context(|| format!("Invalid document in {}", path.display()))
}
