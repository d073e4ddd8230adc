//! # Validation Failures — Engine Findings as Plain Data
//!
//! A schema violation is a result, not an error. The validator adapter
//! produces `ValidationFailure` values; the normalizer renders them into the
//! canonical text form that golden artifacts store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single schema violation reported for a document.
///
/// `field` names the offending document location in dotted form
/// (`@links.self.href`), with the document root rendered as `(root)`.
/// `description` is the engine's human-readable message, carried through
/// unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Dotted document location at fault.
    pub field: String,
    /// Engine-provided message for the violation.
    pub description: String,
}

impl ValidationFailure {
    /// Construct a failure from a field and a description.
    pub fn new(field: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            description: description.into(),
        }
    }

    /// The single-line report form, newline included.
    pub fn render_line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let failure = ValidationFailure::new("@links.self.href", "Does not match format 'url'");
        assert_eq!(
            failure.to_string(),
            "[@links.self.href] Does not match format 'url'"
        );
    }

    #[test]
    fn test_display_root_field() {
        let failure = ValidationFailure::new("(root)", "\"name\" is a required property");
        assert_eq!(
            failure.to_string(),
            "[(root)] \"name\" is a required property"
        );
    }

    #[test]
    fn test_render_line_appends_newline() {
        let failure = ValidationFailure::new("a.b", "bad value");
        assert_eq!(failure.render_line(), "[a.b] bad value\n");
    }

    #[test]
    fn test_serde_round_trip() {
        let failure = ValidationFailure::new("items.0", "null is not of type \"object\"");
        let json = serde_json::to_string(&failure).unwrap();
        let back: ValidationFailure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, failure);
    }
}
