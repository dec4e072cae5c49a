//! Function descriptors.
//!
//! A dump never calls functions; it only needs enough to name and order them.

use std::fmt;
use std::rc::Rc;

#[derive(Debug)]
struct CallableInfo {
    name: String,
    source: Option<String>,
    line: Option<u32>,
}

/// A function value with identity.
///
/// Clones share identity: two `Callable`s are equal only when they come from
/// the same constructor call.
#[derive(Clone)]
pub struct Callable(Rc<CallableInfo>);

impl Callable {
    /// A function with no declaration site.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Rc::new(CallableInfo {
            name: name.into(),
            source: None,
            line: None,
        }))
    }

    /// A function declared in `source` at `line`.
    pub fn declared_at(name: impl Into<String>, source: impl Into<String>, line: u32) -> Self {
        Self(Rc::new(CallableInfo {
            name: name.into(),
            source: Some(source.into()),
            line: Some(line),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Identifier of the declaring source (file, chunk or module), if known.
    pub fn source(&self) -> Option<&str> {
        self.0.source.as_deref()
    }

    /// Declaration line within [`Self::source`], if known.
    pub fn line(&self) -> Option<u32> {
        self.0.line
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.0.name)
            .field("source", &self.0.source)
            .field("line", &self.0.line)
            .finish()
    }
}
