//! # Result Normalization — Canonical Text for Failure Sets
//!
//! This module defines `NormalizedResult`, the sole bridge between
//! validation failures and golden artifacts.
//!
//! ## Invariant
//!
//! The newtype has a private inner field. The only way to construct it is
//! through `NormalizedResult::from_failures()`, which renders one line per
//! failure and sorts the rendered lines byte-wise. Golden artifacts store
//! exactly these bytes, so result equality is string equality and the
//! engine's reporting order can never leak into an artifact.

use std::fmt;

use gsv_core::ValidationFailure;

/// The canonical text form of a validation failure set.
///
/// # Invariants
///
/// - The only constructor is [`NormalizedResult::from_failures`].
/// - One `[<field>] <description>` line per failure, each
///   newline-terminated.
/// - Lines are sorted lexicographically, byte-wise.
/// - The empty failure set renders as the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedResult(String);

impl NormalizedResult {
    /// Render and sort `failures` into canonical text.
    ///
    /// Input order is irrelevant: any permutation of the same failures
    /// produces identical output.
    pub fn from_failures(failures: &[ValidationFailure]) -> Self {
        let mut lines: Vec<String> = failures
            .iter()
            .map(ValidationFailure::render_line)
            .collect();
        lines.sort();
        Self(lines.concat())
    }

    /// The canonical text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical bytes, exactly as a golden artifact stores them.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of rendered lines.
    pub fn line_count(&self) -> usize {
        self.0.lines().count()
    }

    /// True for the empty failure set — the clean outcome.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(field: &str, description: &str) -> ValidationFailure {
        ValidationFailure::new(field, description)
    }

    #[test]
    fn test_empty_set_is_empty_string() {
        let result = NormalizedResult::from_failures(&[]);
        assert!(result.is_empty());
        assert_eq!(result.as_str(), "");
        assert_eq!(result.line_count(), 0);
    }

    #[test]
    fn test_single_failure_renders_one_line() {
        let result = NormalizedResult::from_failures(&[failure(
            "@links.self.href",
            "Does not match format 'url'",
        )]);
        assert_eq!(
            result.as_str(),
            "[@links.self.href] Does not match format 'url'\n"
        );
    }

    #[test]
    fn test_lines_sort_regardless_of_input_order() {
        let a = failure("(root)", "\"base_path\" is a required property");
        let b = failure("(root)", "\"name\" is a required property");

        let forward = NormalizedResult::from_failures(&[a.clone(), b.clone()]);
        let backward = NormalizedResult::from_failures(&[b, a]);

        assert_eq!(forward, backward);
        assert_eq!(
            forward.as_str(),
            "[(root)] \"base_path\" is a required property\n\
             [(root)] \"name\" is a required property\n"
        );
    }

    #[test]
    fn test_sort_is_byte_wise() {
        // 'Z' (0x5a) sorts before 'a' (0x61).
        let result =
            NormalizedResult::from_failures(&[failure("a", "lower"), failure("Z", "upper")]);
        assert_eq!(result.as_str(), "[Z] upper\n[a] lower\n");
    }

    #[test]
    fn test_duplicate_failures_are_kept() {
        let f = failure("x", "bad");
        let result = NormalizedResult::from_failures(&[f.clone(), f]);
        assert_eq!(result.line_count(), 2);
        assert_eq!(result.as_str(), "[x] bad\n[x] bad\n");
    }

    #[test]
    fn test_nonempty_output_ends_with_newline() {
        let result = NormalizedResult::from_failures(&[failure("a", "one"), failure("b", "two")]);
        assert!(result.as_str().ends_with('\n'));
    }

    #[test]
    fn test_display_matches_as_str() {
        let result = NormalizedResult::from_failures(&[failure("a", "one")]);
        assert_eq!(result.to_string(), result.as_str());
    }
}
