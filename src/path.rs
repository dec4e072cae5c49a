//! Key paths from the root of a dump to the current node.

use std::fmt;

/// Ordered rendered-key segments, starting with the root name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Path holding only the root name.
    pub fn root(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// This path extended by one segment.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(segment.into());
        Self(segments)
    }

    /// Number of keys below the root (0 for the root itself).
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// True when `self` is a prefix of `other` (a path is its own ancestor).
    pub fn is_ancestor_of(&self, other: &KeyPath) -> bool {
        other.0.starts_with(&self.0)
    }

    /// Segments joined with `.`.
    pub fn dotted(&self) -> String {
        self.0.join(".")
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_and_child() {
        let root = KeyPath::root("t");
        assert_eq!(root.depth(), 0);
        let child = root.child("\"a\"");
        assert_eq!(child.depth(), 1);
        assert_eq!(child.segments(), ["t".to_string(), "\"a\"".to_string()]);
        assert_eq!(child.dotted(), "t.\"a\"");
        // The parent is untouched.
        assert_eq!(root.dotted(), "t");
    }

    #[test]
    fn test_ancestor_prefix() {
        let root = KeyPath::root("t");
        let a = root.child("a");
        let ab = a.child("b");
        let c = root.child("c");

        assert!(root.is_ancestor_of(&ab));
        assert!(a.is_ancestor_of(&ab));
        assert!(a.is_ancestor_of(&a));
        assert!(!ab.is_ancestor_of(&a));
        assert!(!c.is_ancestor_of(&ab));
    }

    #[test]
    fn test_segment_prefix_is_not_text_prefix() {
        let ab = KeyPath::root("t").child("ab");
        let a = KeyPath::root("t").child("a");
        assert!(!a.is_ancestor_of(&ab));
    }
}
