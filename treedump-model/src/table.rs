//! The container kind: a shared, mutable associative table with identity.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::opaque::CustomText;
use crate::value::Value;

static NEXT_TABLE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`Table`], assigned at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableId(u64);

impl TableId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Function producing a table's custom textual form.
pub type TextFormFn = Rc<dyn Fn(&Table) -> String>;

#[derive(Default)]
struct TableData {
    /// Entries in insertion order.
    entries: Vec<(Value, Value)>,
    /// Key -> position in `entries`.
    index: HashMap<Value, usize>,
    metadata: Option<Table>,
    text_form: Option<TextFormFn>,
}

struct TableInner {
    id: TableId,
    data: RefCell<TableData>,
}

/// Handle to a table. Clones share the same table (and identity).
///
/// Tables may contain themselves, directly or through other tables, so
/// `Debug` only prints the id and entry count.
#[derive(Clone)]
pub struct Table(Rc<TableInner>);

impl Table {
    pub fn new() -> Self {
        let id = TableId(NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed));
        Self(Rc::new(TableInner {
            id,
            data: RefCell::new(TableData::default()),
        }))
    }

    /// Build a table from key/value pairs. Later duplicates replace earlier ones.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        let table = Self::new();
        for (k, v) in pairs {
            table.set(k, v);
        }
        table
    }

    /// Build a table keyed `1..=n` from a sequence.
    pub fn sequence<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        let table = Self::new();
        for (i, v) in items.into_iter().enumerate() {
            table.set(i as i64 + 1, v);
        }
        table
    }

    pub fn id(&self) -> TableId {
        self.0.id
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Store `value` under `key`, returning the previous value.
    ///
    /// A `Nil` value removes the entry. A `Nil` key cannot be stored and is
    /// ignored.
    pub fn set(&self, key: impl Into<Value>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        if key.is_nil() {
            return None;
        }

        let mut data = self.0.data.borrow_mut();
        match data.index.get(&key).copied() {
            Some(pos) if value.is_nil() => {
                let (_, old) = data.entries.remove(pos);
                data.index.remove(&key);
                for slot in data.index.values_mut() {
                    if *slot > pos {
                        *slot -= 1;
                    }
                }
                Some(old)
            }
            Some(pos) => Some(std::mem::replace(&mut data.entries[pos].1, value)),
            None if value.is_nil() => None,
            None => {
                let pos = data.entries.len();
                data.index.insert(key.clone(), pos);
                data.entries.push((key, value));
                None
            }
        }
    }

    /// Value stored under `key`, or `Nil`.
    pub fn get(&self, key: &Value) -> Value {
        let data = self.0.data.borrow();
        data.index
            .get(key)
            .map(|&pos| data.entries[pos].1.clone())
            .unwrap_or(Value::Nil)
    }

    pub fn len(&self) -> usize {
        self.0.data.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the entries in insertion order.
    ///
    /// The snapshot holds no borrow, so the table may be mutated (or visited
    /// again) while the caller walks it.
    pub fn entries(&self) -> Vec<(Value, Value)> {
        self.0.data.borrow().entries.clone()
    }

    /// Attach (or clear) a metadata record.
    pub fn set_metadata(&self, metadata: Option<Table>) {
        self.0.data.borrow_mut().metadata = metadata;
    }

    pub fn metadata(&self) -> Option<Table> {
        self.0.data.borrow().metadata.clone()
    }

    /// Give this table a custom textual form.
    pub fn set_text_form(&self, text_form: impl Fn(&Table) -> String + 'static) {
        self.0.data.borrow_mut().text_form = Some(Rc::new(text_form));
    }

    pub fn clear_text_form(&self) {
        self.0.data.borrow_mut().text_form = None;
    }

    pub fn has_text_form(&self) -> bool {
        self.0.data.borrow().text_form.is_some()
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomText for Table {
    fn custom_text(&self) -> Option<String> {
        // Release the borrow before calling out: the text function may read this table.
        let text_form = self.0.data.borrow().text_form.clone();
        text_form.map(|f| f(self))
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("id", &self.0.id)
            .field("len", &self.len())
            .finish()
    }
}
