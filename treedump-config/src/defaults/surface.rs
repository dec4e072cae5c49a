//! The process-wide default surface.
//!
//! Writes only affect dumpers constructed afterwards: each dumper takes its
//! own copy via [`snapshot`] when it is built.

use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::options::DumpOptions;

static SURFACE: OnceLock<RwLock<DumpOptions>> = OnceLock::new();

fn surface() -> &'static RwLock<DumpOptions> {
    SURFACE.get_or_init(|| RwLock::new(DumpOptions::default()))
}

/// Copy of the current defaults.
pub fn snapshot() -> DumpOptions {
    surface().read().clone()
}

/// Mutate the shared defaults in place.
///
/// ```
/// treedump_config::defaults::update(|opts| opts.max_depth = 4);
/// assert_eq!(treedump_config::defaults::snapshot().max_depth, 4);
/// # treedump_config::defaults::reset();
/// ```
pub fn update<R>(f: impl FnOnce(&mut DumpOptions) -> R) -> R {
    let mut guard = surface().write();
    let result = f(&mut guard);
    log::debug!(target: "treedump", "default dump options updated: {:?}", *guard);
    result
}

/// Swap in a whole new set of defaults, returning the previous one.
pub fn replace(options: DumpOptions) -> DumpOptions {
    std::mem::replace(&mut *surface().write(), options)
}

/// Restore the factory defaults.
pub fn reset() {
    replace(DumpOptions::default());
}
