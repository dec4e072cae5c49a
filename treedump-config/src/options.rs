//! `DumpOptions`: the full set of rendering options carried by a dumper.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use treedump_model::{Kind, Value};

use crate::defaults;
use crate::hooks::{Filter, Formatter, KeyComparator, PostRenderHook, RenderedEntry};
use crate::logger::Logger;

/// Whether a container's custom text gets its line breaks re-indented.
///
/// Options files accept `true`, `false` or `"inherit"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "IndentRepr", into = "IndentRepr")]
pub enum CustomTextIndent {
    /// Follow `insert_indent`.
    #[default]
    Inherit,
    Enabled,
    Disabled,
}

impl CustomTextIndent {
    /// Resolve against the value of `insert_indent`.
    pub fn resolve(self, insert_indent: bool) -> bool {
        match self {
            CustomTextIndent::Inherit => insert_indent,
            CustomTextIndent::Enabled => true,
            CustomTextIndent::Disabled => false,
        }
    }
}

impl From<bool> for CustomTextIndent {
    fn from(enabled: bool) -> Self {
        if enabled {
            CustomTextIndent::Enabled
        } else {
            CustomTextIndent::Disabled
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum IndentRepr {
    Flag(bool),
    Name(String),
}

impl TryFrom<IndentRepr> for CustomTextIndent {
    type Error = String;

    fn try_from(repr: IndentRepr) -> Result<Self, Self::Error> {
        match repr {
            IndentRepr::Flag(flag) => Ok(flag.into()),
            IndentRepr::Name(name) if name.eq_ignore_ascii_case("inherit") => {
                Ok(CustomTextIndent::Inherit)
            }
            IndentRepr::Name(name) => Err(format!(
                "expected true, false or \"inherit\", got \"{name}\""
            )),
        }
    }
}

impl From<CustomTextIndent> for IndentRepr {
    fn from(value: CustomTextIndent) -> Self {
        match value {
            CustomTextIndent::Inherit => IndentRepr::Name("inherit".to_string()),
            CustomTextIndent::Enabled => IndentRepr::Flag(true),
            CustomTextIndent::Disabled => IndentRepr::Flag(false),
        }
    }
}

/// Rendering options for a dump.
///
/// `Default` gives the factory defaults. Dumpers normally start from
/// [`defaults::snapshot`], which reflects any changes made to the
/// process-wide default surface.
#[derive(Clone)]
pub struct DumpOptions {
    /// One level of indentation.
    pub indent: String,
    /// Re-indent line breaks inside string values.
    pub insert_indent: bool,
    /// Re-indent line breaks inside a container's custom text.
    pub insert_indent_for_custom_text: CustomTextIndent,
    /// Deepest key level rendered below the root; -1 = unlimited.
    pub max_depth: i64,
    /// Entries rendered per container; -1 = unlimited.
    pub max_items: i64,
    /// Show a container's own custom text after its entries.
    pub show_custom_text: bool,
    /// List the keys of a container's metadata record.
    pub show_metadata: bool,
    pub ignore_key_kinds: BTreeSet<Kind>,
    pub ignore_value_kinds: BTreeSet<Kind>,
    pub key_filter: Option<Filter>,
    pub value_filter: Option<Filter>,
    /// Root path segment used when `dump` gets no name.
    pub top_level_name: String,
    /// Return errors instead of logging them.
    pub strict: bool,
    pub post_render_hook: Option<PostRenderHook>,
    pub key_formatter: Option<Formatter>,
    pub value_formatter: Option<Formatter>,
    pub comparator: KeyComparator,
    pub logger: Arc<dyn Logger>,
    /// 0 = silent, 1 = dump start/finish, 2 = per container, 3 = per skipped entry.
    pub verbose_level: i64,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            indent: defaults::indent(),
            insert_indent: defaults::bool_true(),
            insert_indent_for_custom_text: defaults::insert_indent_for_custom_text(),
            max_depth: defaults::unlimited(),
            max_items: defaults::unlimited(),
            show_custom_text: defaults::bool_true(),
            show_metadata: defaults::bool_false(),
            ignore_key_kinds: BTreeSet::new(),
            ignore_value_kinds: BTreeSet::new(),
            key_filter: None,
            value_filter: None,
            top_level_name: defaults::top_level_name(),
            strict: defaults::bool_false(),
            post_render_hook: None,
            key_formatter: None,
            value_formatter: None,
            comparator: defaults::comparator(),
            logger: defaults::logger(),
            verbose_level: defaults::verbose_level(),
        }
    }
}

impl fmt::Debug for DumpOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DumpOptions")
            .field("indent", &self.indent)
            .field("insert_indent", &self.insert_indent)
            .field(
                "insert_indent_for_custom_text",
                &self.insert_indent_for_custom_text,
            )
            .field("max_depth", &self.max_depth)
            .field("max_items", &self.max_items)
            .field("show_custom_text", &self.show_custom_text)
            .field("show_metadata", &self.show_metadata)
            .field("ignore_key_kinds", &self.ignore_key_kinds)
            .field("ignore_value_kinds", &self.ignore_value_kinds)
            .field("key_filter", &self.key_filter.is_some())
            .field("value_filter", &self.value_filter.is_some())
            .field("top_level_name", &self.top_level_name)
            .field("strict", &self.strict)
            .field("post_render_hook", &self.post_render_hook.is_some())
            .field("key_formatter", &self.key_formatter.is_some())
            .field("value_formatter", &self.value_formatter.is_some())
            .field("verbose_level", &self.verbose_level)
            .finish_non_exhaustive()
    }
}

impl DumpOptions {
    /// Factory defaults, ignoring the process-wide surface.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_insert_indent(mut self, enabled: bool) -> Self {
        self.insert_indent = enabled;
        self
    }

    pub fn with_custom_text_indent(mut self, setting: CustomTextIndent) -> Self {
        self.insert_indent_for_custom_text = setting;
        self
    }

    pub fn with_max_depth(mut self, max_depth: i64) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_items(mut self, max_items: i64) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn with_show_custom_text(mut self, enabled: bool) -> Self {
        self.show_custom_text = enabled;
        self
    }

    pub fn with_show_metadata(mut self, enabled: bool) -> Self {
        self.show_metadata = enabled;
        self
    }

    pub fn ignore_key_kind(mut self, kind: Kind) -> Self {
        self.ignore_key_kinds.insert(kind);
        self
    }

    pub fn ignore_value_kind(mut self, kind: Kind) -> Self {
        self.ignore_value_kinds.insert(kind);
        self
    }

    pub fn with_key_filter(
        mut self,
        filter: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.key_filter = Some(Arc::new(filter));
        self
    }

    pub fn with_value_filter(
        mut self,
        filter: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.value_filter = Some(Arc::new(filter));
        self
    }

    pub fn with_top_level_name(mut self, name: impl Into<String>) -> Self {
        self.top_level_name = name.into();
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_post_render_hook(
        mut self,
        hook: impl Fn(&RenderedEntry<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.post_render_hook = Some(Arc::new(hook));
        self
    }

    pub fn with_key_formatter(
        mut self,
        formatter: impl Fn(&Value, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.key_formatter = Some(Arc::new(formatter));
        self
    }

    pub fn with_value_formatter(
        mut self,
        formatter: impl Fn(&Value, &str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.value_formatter = Some(Arc::new(formatter));
        self
    }

    pub fn with_comparator(
        mut self,
        comparator: impl Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.comparator = Arc::new(comparator);
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_verbose_level(mut self, level: i64) -> Self {
        self.verbose_level = level;
        self
    }

    /// Resolved re-indent setting for container custom text.
    pub fn custom_text_indent_enabled(&self) -> bool {
        self.insert_indent_for_custom_text.resolve(self.insert_indent)
    }
}
