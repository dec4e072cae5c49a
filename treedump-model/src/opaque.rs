//! Host objects and the custom-to-text capability.

use std::fmt;

/// The ability to produce a custom textual form.
///
/// Implemented by [`crate::Table`] (through its text function) and by
/// [`crate::Value`], which delegates to the variant it holds. `None` means the
/// value does not have the capability.
pub trait CustomText {
    fn custom_text(&self) -> Option<String>;
}

/// A host object embedded in a dump graph.
///
/// Opaque values have identity but no enumerable entries. Implementors that
/// override [`Opaque::text_form`] render as text instead of their generic form.
pub trait Opaque: fmt::Debug {
    /// Short type name used in the generic textual form (`opaque: <type_name>`).
    fn type_name(&self) -> &str;

    /// Custom textual form, if this type has one.
    fn text_form(&self) -> Option<String> {
        None
    }
}
