//! Option validation run before every dump.
//!
//! Field kinds are guaranteed by the types (and by serde for options files);
//! what remains are value-level rules. All violations are collected so the
//! caller sees them in one message.

use crate::options::DumpOptions;

/// Highest meaningful `verbose_level`.
pub const MAX_VERBOSE_LEVEL: i64 = 4;

impl DumpOptions {
    /// List every option that holds an invalid value. Empty means valid.
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if let Some(c) = self.indent.chars().find(|c| *c != ' ' && *c != '\t') {
            violations.push(format!(
                "indent must contain only spaces and tabs, found {c:?}"
            ));
        }

        if self.max_depth < -1 {
            violations.push(format!(
                "max_depth must be -1 (unlimited) or >= 0, got {}",
                self.max_depth
            ));
        }

        if self.max_items < -1 {
            violations.push(format!(
                "max_items must be -1 (unlimited) or >= 0, got {}",
                self.max_items
            ));
        }

        if self.top_level_name.is_empty() {
            violations.push("top_level_name must not be empty".to_string());
        } else if self.top_level_name.contains(['\n', '\r']) {
            violations.push("top_level_name must be a single line".to_string());
        }

        if !(0..=MAX_VERBOSE_LEVEL).contains(&self.verbose_level) {
            violations.push(format!(
                "verbose_level must be between 0 and {MAX_VERBOSE_LEVEL}, got {}",
                self.verbose_level
            ));
        }

        violations
    }

    /// Validate and combine all violations into one message.
    pub fn check(&self) -> Result<(), String> {
        let violations = self.validate();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(DumpOptions::default().validate().is_empty());
        assert_eq!(DumpOptions::default().check(), Ok(()));
    }

    #[test]
    fn test_tab_indent_is_valid() {
        assert!(DumpOptions::new().with_indent("\t").validate().is_empty());
        assert!(DumpOptions::new().with_indent("").validate().is_empty());
    }

    #[test]
    fn test_bad_indent() {
        let violations = DumpOptions::new().with_indent("--").validate();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("indent"));
    }

    #[test]
    fn test_limits_below_sentinel() {
        let violations = DumpOptions::new()
            .with_max_depth(-2)
            .with_max_items(-5)
            .validate();
        assert_eq!(violations.len(), 2);
        assert!(violations[0].contains("max_depth"));
        assert!(violations[1].contains("max_items"));
    }

    #[test]
    fn test_zero_limits_are_valid() {
        let opts = DumpOptions::new().with_max_depth(0).with_max_items(0);
        assert!(opts.validate().is_empty());
    }

    #[test]
    fn test_top_level_name() {
        assert_eq!(DumpOptions::new().with_top_level_name("").validate().len(), 1);
        assert_eq!(
            DumpOptions::new().with_top_level_name("a\nb").validate().len(),
            1
        );
    }

    #[test]
    fn test_verbose_level_range() {
        assert!(DumpOptions::new().with_verbose_level(4).validate().is_empty());
        assert_eq!(DumpOptions::new().with_verbose_level(5).validate().len(), 1);
        assert_eq!(DumpOptions::new().with_verbose_level(-1).validate().len(), 1);
    }

    #[test]
    fn test_all_violations_combined() {
        let err = DumpOptions::new()
            .with_indent("x")
            .with_max_depth(-3)
            .with_top_level_name("")
            .check()
            .unwrap_err();
        assert_eq!(err.matches("; ").count(), 2);
        assert!(err.contains("indent"));
        assert!(err.contains("max_depth"));
        assert!(err.contains("top_level_name"));
    }
}
