//! The dump entry point.
//!
//! A [`Dumper`] owns a copy of the options it was built with. Each call to
//! [`Dumper::dump`] validates those options, checks that it was handed a
//! table, and hands the walk to the renderer in `render`. Visited tables and
//! key paths live only for that one call.

mod render;

use std::collections::HashSet;
use std::sync::Arc;
use std::thread::{self, ThreadId};

use parking_lot::Mutex;
use treedump_config::{DumpError, DumpOptions, Logger, defaults};
use treedump_model::Value;

use crate::buffer::TextBuffer;
use crate::path::KeyPath;
use render::Renderer;

/// Renders value graphs into debug text.
#[derive(Debug)]
pub struct Dumper {
    options: DumpOptions,
    /// Threads with a dump running on this instance.
    rendering: Mutex<HashSet<ThreadId>>,
}

impl Default for Dumper {
    fn default() -> Self {
        Self::new()
    }
}

impl Dumper {
    /// Build a dumper from the current process-wide defaults.
    pub fn new() -> Self {
        Self::with_options(defaults::snapshot())
    }

    /// Build a dumper from the current defaults, overriding the logger and
    /// verbose level when given.
    pub fn with_logger(logger: Option<Arc<dyn Logger>>, verbose_level: Option<i64>) -> Self {
        let mut options = defaults::snapshot();
        if let Some(logger) = logger {
            options.logger = logger;
        }
        if let Some(level) = verbose_level {
            options.verbose_level = level;
        }
        Self::with_options(options)
    }

    /// Build a dumper from explicit options.
    pub fn with_options(options: DumpOptions) -> Self {
        Self {
            options,
            rendering: Mutex::new(HashSet::new()),
        }
    }

    pub fn options(&self) -> &DumpOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut DumpOptions {
        &mut self.options
    }

    /// Render `value` under `name`.
    ///
    /// Returns `Ok(Some(text))` on success. Invalid options and non-table
    /// values are errors under `strict`; otherwise they are logged and the
    /// result is `Ok(None)`. Re-entering this dumper from one of its own
    /// hooks is always `Err(DumpError::CallerMisuse)`; dumps on other threads
    /// may run at the same time.
    pub fn dump(&self, value: &Value, name: Option<&str>) -> Result<Option<String>, DumpError> {
        let _guard = RenderGuard::acquire(&self.rendering)?;
        let opts = &self.options;

        if let Err(message) = opts.check() {
            return self.fail(DumpError::OptionValidation(message));
        }

        let name = name.filter(|n| !n.is_empty());
        let root_name = name.unwrap_or(&opts.top_level_name);

        let Value::Table(table) = value else {
            return self.fail(DumpError::ArgumentType {
                name: root_name.to_string(),
                kind: value.kind(),
            });
        };

        if opts.verbose_level >= 1 {
            opts.logger
                .debug(&format!("dumping {} as '{root_name}'", value.generic_text()));
        }

        let mut out = TextBuffer::new();
        match name {
            Some(name) => out.append_line(&format!("{name} = {{")),
            None => out.append_line("{"),
        }
        let mut renderer = Renderer::new(opts);
        renderer.render_container(table, &KeyPath::root(root_name), &opts.indent, &mut out);
        out.append("}");

        let text = out.render();
        if opts.verbose_level >= 1 {
            opts.logger.debug(&format!(
                "dumped '{root_name}': {} containers, {} bytes",
                renderer.visited_count(),
                text.len()
            ));
        }
        Ok(Some(text))
    }

    fn fail(&self, error: DumpError) -> Result<Option<String>, DumpError> {
        if self.options.strict {
            Err(error)
        } else {
            self.options.logger.error(&error.to_string());
            Ok(None)
        }
    }
}

/// Marks a dumper busy on the calling thread for the duration of one dump.
struct RenderGuard<'a> {
    active: &'a Mutex<HashSet<ThreadId>>,
    thread: ThreadId,
}

impl<'a> RenderGuard<'a> {
    fn acquire(active: &'a Mutex<HashSet<ThreadId>>) -> Result<Self, DumpError> {
        let thread = thread::current().id();
        if !active.lock().insert(thread) {
            return Err(DumpError::CallerMisuse(
                "dumper re-entered while a dump is in progress; \
                 use a separate Dumper inside hooks"
                    .to_string(),
            ));
        }
        Ok(Self { active, thread })
    }
}

impl Drop for RenderGuard<'_> {
    fn drop(&mut self) {
        self.active.lock().remove(&self.thread);
    }
}
