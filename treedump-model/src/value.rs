//! The closed set of values a dump graph is made of.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::callable::Callable;
use crate::kind::Kind;
use crate::opaque::{CustomText, Opaque};
use crate::table::Table;

/// A value in a dump graph.
///
/// Equality and hashing follow key semantics: scalars and strings compare by
/// value (floats by bit pattern, and `Integer(1) != Float(1.0)`), while tables,
/// functions and opaque values compare by identity.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Nil,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Str(Rc<str>),
    Table(Table),
    Function(Callable),
    Opaque(Rc<dyn Opaque>),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) | Value::Float(_) => Kind::Number,
            Value::Str(_) => Kind::String,
            Value::Table(_) => Kind::Table,
            Value::Function(_) => Kind::Function,
            Value::Opaque(_) => Kind::Opaque,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Function(c) => Some(c),
            _ => None,
        }
    }

    /// Wrap a host object.
    pub fn opaque(object: impl Opaque + 'static) -> Self {
        Value::Opaque(Rc::new(object))
    }

    /// The textual form used when nothing more specific applies.
    ///
    /// Strings are returned unquoted; tables are named by their id so that the
    /// form is stable for the lifetime of the table.
    pub fn generic_text(&self) -> String {
        match self {
            Value::Nil => "nil".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => format_float(*f),
            Value::Str(s) => s.to_string(),
            Value::Table(t) => format!("table: {}", t.id()),
            Value::Function(c) => format!("function: {}", c.name()),
            Value::Opaque(o) => format!("opaque: {}", o.type_name()),
        }
    }

    /// The textual form used for ordering keys.
    ///
    /// Strings, numbers and booleans always have one; other values only when
    /// they have the custom-to-text capability.
    pub fn textual_form(&self) -> Option<String> {
        match self {
            Value::Boolean(_) | Value::Integer(_) | Value::Float(_) | Value::Str(_) => {
                Some(self.generic_text())
            }
            _ => self.custom_text(),
        }
    }
}

impl CustomText for Value {
    fn custom_text(&self) -> Option<String> {
        match self {
            Value::Table(t) => t.custom_text(),
            Value::Opaque(o) => o.text_form(),
            _ => None,
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e16 {
        format!("{f:.1}")
    } else {
        format!("{f}")
    }
}

fn opaque_addr(o: &Rc<dyn Opaque>) -> usize {
    Rc::as_ptr(o) as *const () as usize
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Table(a), Value::Table(b)) => a.ptr_eq(b),
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Opaque(a), Value::Opaque(b)) => opaque_addr(a) == opaque_addr(b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Nil => {}
            Value::Boolean(b) => b.hash(state),
            Value::Integer(i) => i.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Str(s) => s.hash(state),
            Value::Table(t) => t.addr().hash(state),
            Value::Function(c) => c.addr().hash(state),
            Value::Opaque(o) => opaque_addr(o).hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generic_text())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl From<Table> for Value {
    fn from(t: Table) -> Self {
        Value::Table(t)
    }
}

impl From<&Table> for Value {
    fn from(t: &Table) -> Self {
        Value::Table(t.clone())
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Value::Function(c)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Nil)
    }
}
