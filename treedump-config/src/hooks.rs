//! Callback types that customize a dump.
//!
//! Every hook is an `Arc<dyn Fn … + Send + Sync>` so options stay cheap to
//! clone and can be shared through the default surface.

use std::sync::Arc;

use treedump_model::Value;

/// Accepts (`true`) or rejects (`false`) a key or a value.
pub type Filter = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Turns a raw key or value plus its default rendering into the text to print.
pub type Formatter = Arc<dyn Fn(&Value, &str) -> String + Send + Sync>;

/// "Is `a` ordered before `b`" for keys of one container.
pub type KeyComparator = Arc<dyn Fn(&Value, &Value) -> bool + Send + Sync>;

/// Observer called after each entry is rendered. It cannot change output.
pub type PostRenderHook = Arc<dyn Fn(&RenderedEntry<'_>) + Send + Sync>;

/// Everything known about an entry once it has been rendered.
#[derive(Debug, Clone, Copy)]
pub struct RenderedEntry<'a> {
    pub key: &'a Value,
    pub value: &'a Value,
    pub key_text: &'a str,
    pub value_text: &'a str,
    /// Path from the root to this entry, ending with `key_text`.
    pub path: &'a [String],
}
