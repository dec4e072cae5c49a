//! Factory defaults and the process-wide default surface.
//!
//! `values` holds the small `default_*`-style functions `DumpOptions::default`
//! is built from. `surface` holds the shared, mutable defaults that every new
//! dumper snapshots at construction.

mod surface;
mod values;

pub use surface::{replace, reset, snapshot, update};
pub use values::{
    bool_false, bool_true, comparator, indent, insert_indent_for_custom_text, logger,
    top_level_name, unlimited, verbose_level,
};
