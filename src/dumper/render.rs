//! Recursive, cycle-aware rendering of one table and everything below it.

use std::collections::HashMap;

use treedump_config::{DumpOptions, RenderedEntry};
use treedump_model::{CustomText, Table, TableId, Value, sort_by_less};

use crate::buffer::TextBuffer;
use crate::path::KeyPath;

const DEPTH_LIMIT_LINE: &str = "( depth limit reached )";
const ITEM_LIMIT_LINE: &str = "=== AND MORE ===";
const CUSTOM_TEXT_LABEL: &str = "to_string()";
const METADATA_LABEL: &str = "metadata";
const PRESENT: &str = "(present)";

/// State of one dump: the options in force and every table seen so far.
pub(super) struct Renderer<'a> {
    options: &'a DumpOptions,
    /// Table identity -> path where it was first rendered.
    visited: HashMap<TableId, KeyPath>,
    /// Tables currently being walked, outermost first.
    ancestors: Vec<TableId>,
}

impl<'a> Renderer<'a> {
    pub(super) fn new(options: &'a DumpOptions) -> Self {
        Self {
            options,
            visited: HashMap::new(),
            ancestors: Vec::new(),
        }
    }

    pub(super) fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Render the entries of `table` at `indent`, one per line, into `out`.
    pub(super) fn render_container(
        &mut self,
        table: &Table,
        path: &KeyPath,
        indent: &str,
        out: &mut TextBuffer,
    ) {
        let opts = self.options;

        // Past the depth bound the table is neither marked nor walked, so it
        // can still be expanded if reached later through a shallower path.
        if opts.max_depth >= 0 && path.depth() as i64 > opts.max_depth {
            out.append_line(&format!("{indent}{DEPTH_LIMIT_LINE}"));
            return;
        }

        if let Some(first_seen) = self.visited.get(&table.id()) {
            // Distinct keys can render to the same text, so a cycle is
            // decided by identity. The first-seen path is only for display.
            let cyclical = self.ancestors.contains(&table.id());
            debug_assert!(!cyclical || first_seen.is_ancestor_of(path));
            let relation = if cyclical {
                "cyclical reference"
            } else {
                "shared reference"
            };
            out.append_line(&format!(
                "{indent}* already shown ({relation}) -> {}",
                first_seen.dotted()
            ));
            return;
        }

        // Marked before the children so a self-edge is caught one level down.
        self.visited.insert(table.id(), path.clone());
        self.ancestors.push(table.id());
        self.trace(2, || format!("rendering table {} at {path}", table.id()));

        let mut entries = table.entries();
        sort_by_less(&mut entries, |(a, _), (b, _)| (opts.comparator)(a, b));

        let mut emitted: i64 = 0;
        for (key, value) in &entries {
            if opts.max_items >= 0 && emitted >= opts.max_items {
                out.append_line(&format!("{indent}{ITEM_LIMIT_LINE}"));
                break;
            }
            if let Some(reason) = self.skip_reason(key, value) {
                self.trace(3, || {
                    format!("skipping {} at {path}: {reason}", key.generic_text())
                });
                continue;
            }
            emitted += 1;
            self.render_entry(key, value, path, indent, out);
        }
        self.ancestors.pop();

        if opts.show_custom_text
            && let Some(text) = table.custom_text()
        {
            let text = if opts.custom_text_indent_enabled() {
                reindent(&text, indent, CUSTOM_TEXT_LABEL.chars().count() + 4)
            } else {
                text
            };
            out.append_line(&format!("{indent}{CUSTOM_TEXT_LABEL} = \"{text}\""));
        }

        if opts.show_metadata
            && let Some(metadata) = table.metadata()
            && !metadata.is_empty()
        {
            self.render_metadata(&metadata, indent, out);
        }
    }

    /// Why an entry is left out, checking key kind, value kind, key filter
    /// and value filter in that order.
    fn skip_reason(&self, key: &Value, value: &Value) -> Option<&'static str> {
        let opts = self.options;
        if opts.ignore_key_kinds.contains(&key.kind()) {
            Some("ignored key kind")
        } else if opts.ignore_value_kinds.contains(&value.kind()) {
            Some("ignored value kind")
        } else if opts.key_filter.as_ref().is_some_and(|f| !f(key)) {
            Some("rejected by key filter")
        } else if opts.value_filter.as_ref().is_some_and(|f| !f(value)) {
            Some("rejected by value filter")
        } else {
            None
        }
    }

    fn render_entry(
        &mut self,
        key: &Value,
        value: &Value,
        path: &KeyPath,
        indent: &str,
        out: &mut TextBuffer,
    ) {
        let opts = self.options;
        let mut key_text = self.key_text(key);

        let value_text = match value {
            Value::Table(child) => {
                let child_indent = format!("{indent}{}", opts.indent);
                let mut nested = TextBuffer::new();
                let child_path = path.child(key_text.clone());
                self.render_container(child, &child_path, &child_indent, &mut nested);
                let wrapped = format!("{{\n{}{indent}}}", nested.render());
                self.format_value(value, wrapped)
            }
            _ => match text_of(value) {
                Some(text) => {
                    if !matches!(value, Value::Str(_)) {
                        key_text = format!("to_string({key_text})");
                    }
                    let text = if opts.insert_indent {
                        // Continuation lines line up after `<key> = "`.
                        reindent(&text, indent, key_text.chars().count() + 4)
                    } else {
                        text
                    };
                    self.format_value(value, format!("\"{text}\""))
                }
                None => self.format_value(value, value.generic_text()),
            },
        };

        if let Some(hook) = &opts.post_render_hook {
            let entry_path = path.child(key_text.clone());
            hook(&RenderedEntry {
                key,
                value,
                key_text: &key_text,
                value_text: &value_text,
                path: entry_path.segments(),
            });
        }

        out.append_line(&format!("{indent}{key_text} = {value_text},"));
    }

    fn render_metadata(&self, metadata: &Table, indent: &str, out: &mut TextBuffer) {
        let opts = self.options;
        let mut keys: Vec<Value> = metadata.entries().into_iter().map(|(k, _)| k).collect();
        sort_by_less(&mut keys, |a, b| (opts.comparator)(a, b));

        out.append_line(&format!("{indent}{METADATA_LABEL} = {{"));
        for key in &keys {
            out.append_line(&format!(
                "{indent}{}{} = {PRESENT},",
                opts.indent,
                self.key_text(key)
            ));
        }
        out.append_line(&format!("{indent}}}"));
    }

    /// Quoted for strings, generic otherwise, then through the key formatter.
    fn key_text(&self, key: &Value) -> String {
        let default = match key {
            Value::Str(s) => format!("\"{s}\""),
            _ => key.generic_text(),
        };
        match &self.options.key_formatter {
            Some(formatter) => formatter(key, &default),
            None => default,
        }
    }

    fn format_value(&self, value: &Value, default: String) -> String {
        match &self.options.value_formatter {
            Some(formatter) => formatter(value, &default),
            None => default,
        }
    }

    fn trace(&self, level: i64, message: impl FnOnce() -> String) {
        if self.options.verbose_level >= level {
            self.options.logger.debug(&message());
        }
    }
}

/// Text of a string, or the custom text of a value that has one.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::Str(s) => Some(s.to_string()),
        _ => value.custom_text(),
    }
}

/// Indent every line after the first by `indent` plus `column` spaces.
fn reindent(text: &str, indent: &str, column: usize) -> String {
    if !text.contains('\n') {
        return text.to_string();
    }
    let continuation = format!("\n{indent}{}", " ".repeat(column));
    text.replace('\n', &continuation)
}
