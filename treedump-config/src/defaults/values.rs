//! Factory default values for `DumpOptions`.

use std::sync::Arc;

use crate::hooks::KeyComparator;
use crate::logger::{LogBridge, Logger};
use crate::options::CustomTextIndent;

// ── Primitive helpers ──────────────────────────────────────────────────────

pub fn bool_false() -> bool {
    false
}

pub fn bool_true() -> bool {
    true
}

/// Sentinel for "no limit" on `max_depth` and `max_items`.
pub fn unlimited() -> i64 {
    -1
}

// ── Layout ─────────────────────────────────────────────────────────────────

pub fn indent() -> String {
    "  ".to_string()
}

pub fn insert_indent_for_custom_text() -> CustomTextIndent {
    CustomTextIndent::Inherit
}

pub fn top_level_name() -> String {
    "root".to_string()
}

// ── Behaviour ──────────────────────────────────────────────────────────────

pub fn comparator() -> KeyComparator {
    Arc::new(treedump_model::default_less)
}

pub fn logger() -> Arc<dyn Logger> {
    Arc::new(LogBridge)
}

pub fn verbose_level() -> i64 {
    0
}
