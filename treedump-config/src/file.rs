//! Options files: the serializable subset of `DumpOptions`.
//!
//! Callbacks and the logger cannot be written down, so an options file only
//! covers plain fields. Every field is optional; absent fields leave the
//! target options untouched when the file is applied.
//!
//! ```yaml
//! indent: "    "
//! max_depth: 3
//! ignore_value_kinds: [function]
//! insert_indent_for_custom_text: inherit
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use treedump_model::Kind;

use crate::error::OptionsFileError;
use crate::options::{CustomTextIndent, DumpOptions};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_indent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_indent_for_custom_text: Option<CustomTextIndent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_custom_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_metadata: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_key_kinds: Option<BTreeSet<Kind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_value_kinds: Option<BTreeSet<Kind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_level_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose_level: Option<i64>,
}

/// Formats an options file can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsFormat {
    Yaml,
    Toml,
    Json,
}

impl OptionsFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, OptionsFileError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(OptionsFormat::Yaml),
            "toml" => Ok(OptionsFormat::Toml),
            "json" => Ok(OptionsFormat::Json),
            _ => Err(OptionsFileError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl OptionsFile {
    /// Load an options file, choosing the parser by extension.
    pub fn load(path: &Path) -> Result<Self, OptionsFileError> {
        let format = OptionsFormat::from_path(path)?;
        log::info!("Loading dump options from {:?}", path);
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents, format)
    }

    pub fn parse(contents: &str, format: OptionsFormat) -> Result<Self, OptionsFileError> {
        Ok(match format {
            OptionsFormat::Yaml => serde_yaml_ng::from_str(contents)?,
            OptionsFormat::Toml => toml::from_str(contents)?,
            OptionsFormat::Json => serde_json::from_str(contents)?,
        })
    }

    /// Capture the plain fields of `options`.
    pub fn from_options(options: &DumpOptions) -> Self {
        Self {
            indent: Some(options.indent.clone()),
            insert_indent: Some(options.insert_indent),
            insert_indent_for_custom_text: Some(options.insert_indent_for_custom_text),
            max_depth: Some(options.max_depth),
            max_items: Some(options.max_items),
            show_custom_text: Some(options.show_custom_text),
            show_metadata: Some(options.show_metadata),
            ignore_key_kinds: Some(options.ignore_key_kinds.clone()),
            ignore_value_kinds: Some(options.ignore_value_kinds.clone()),
            top_level_name: Some(options.top_level_name.clone()),
            strict: Some(options.strict),
            verbose_level: Some(options.verbose_level),
        }
    }

    /// Overwrite the fields of `options` that this file sets.
    pub fn apply(&self, options: &mut DumpOptions) {
        if let Some(indent) = &self.indent {
            options.indent = indent.clone();
        }
        if let Some(v) = self.insert_indent {
            options.insert_indent = v;
        }
        if let Some(v) = self.insert_indent_for_custom_text {
            options.insert_indent_for_custom_text = v;
        }
        if let Some(v) = self.max_depth {
            options.max_depth = v;
        }
        if let Some(v) = self.max_items {
            options.max_items = v;
        }
        if let Some(v) = self.show_custom_text {
            options.show_custom_text = v;
        }
        if let Some(v) = self.show_metadata {
            options.show_metadata = v;
        }
        if let Some(kinds) = &self.ignore_key_kinds {
            options.ignore_key_kinds = kinds.clone();
        }
        if let Some(kinds) = &self.ignore_value_kinds {
            options.ignore_value_kinds = kinds.clone();
        }
        if let Some(name) = &self.top_level_name {
            options.top_level_name = name.clone();
        }
        if let Some(v) = self.strict {
            options.strict = v;
        }
        if let Some(v) = self.verbose_level {
            options.verbose_level = v;
        }
    }

    pub fn to_yaml(&self) -> Result<String, OptionsFileError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Write this file as YAML.
    pub fn save(&self, path: &Path) -> Result<(), OptionsFileError> {
        let yaml = self.to_yaml()?;
        fs::write(path, yaml)?;
        log::info!("Saved dump options to {:?}", path);
        Ok(())
    }
}
