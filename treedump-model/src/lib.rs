//! Value graph model for treedump.
//!
//! This crate provides the in-memory graph a dump walks:
//!
//! - [`Value`], a closed enum over scalars, strings, tables, functions and opaque host objects
//! - [`Table`], the container kind, with identity ([`TableId`]), optional metadata
//!   and an optional custom textual form
//! - [`CustomText`], the custom-to-text capability
//! - [`default_less`] and [`sort_by_less`], the default key ordering

mod callable;
mod kind;
mod opaque;
pub mod ordering;
mod table;
mod value;

pub use callable::Callable;
pub use kind::{Kind, UnknownKind};
pub use opaque::{CustomText, Opaque};
pub use ordering::{default_less, sort_by_less};
pub use table::{Table, TableId, TextFormFn};
pub use value::Value;
