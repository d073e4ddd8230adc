//! # Golden Artifacts — Comparison and Update
//!
//! A golden artifact stores the expected normalized result of one case,
//! byte for byte. Comparison is exact equality; a mismatch renders a
//! unified diff with the expected bytes on the `-` side and the actual
//! bytes on the `+` side, anchored at the artifact's location and the
//! case's name. Update mode rewrites the artifact from the actual result
//! instead of comparing.

use similar::TextDiff;

use gsv_core::{AssertionFailure, InfrastructureError, ResolvedPath};

use crate::normalize::NormalizedResult;

/// Expected-side diff anchor for positive cases, which declare no
/// artifact.
const NO_FAILURES_LABEL: &str = "expected: no failures";

/// Read the golden artifact at `path` as UTF-8 text.
///
/// # Errors
///
/// Returns [`InfrastructureError::GoldenRead`] when the artifact cannot
/// be read.
pub fn read_golden(path: &ResolvedPath) -> Result<String, InfrastructureError> {
    std::fs::read_to_string(path.as_path()).map_err(|e| InfrastructureError::GoldenRead {
        path: path.to_string(),
        reason: e.to_string(),
    })
}

/// Write `actual` over the golden artifact at `path`, creating parent
/// directories as needed.
///
/// # Errors
///
/// Returns [`InfrastructureError::GoldenWrite`] when a directory or the
/// artifact itself cannot be written.
pub fn write_golden(
    path: &ResolvedPath,
    actual: &NormalizedResult,
) -> Result<(), InfrastructureError> {
    if let Some(parent) = path.as_path().parent() {
        std::fs::create_dir_all(parent).map_err(|e| InfrastructureError::GoldenWrite {
            path: path.to_string(),
            reason: format!("cannot create parent directory: {e}"),
        })?;
    }
    std::fs::write(path.as_path(), actual.as_bytes()).map_err(|e| {
        InfrastructureError::GoldenWrite {
            path: path.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Compare a case's actual result against its expectation.
///
/// `golden` carries the declared artifact location for negative cases and
/// is `None` for positive ones, where the expectation is the empty
/// string. Returns `Ok(None)` when expectations hold and `Ok(Some(..))`
/// when they do not.
///
/// A negative case whose actual result is empty fails with
/// [`AssertionFailure::UnexpectedlyValid`] before the artifact is read:
/// the declaration itself is wrong, whether or not the artifact exists.
///
/// # Errors
///
/// Returns [`InfrastructureError::GoldenRead`] when a declared artifact
/// cannot be read.
pub fn compare(
    case_name: &str,
    golden: Option<&ResolvedPath>,
    actual: &NormalizedResult,
) -> Result<Option<AssertionFailure>, InfrastructureError> {
    let (expected, expected_from) = match golden {
        Some(path) => {
            if actual.is_empty() {
                return Ok(Some(AssertionFailure::UnexpectedlyValid {
                    golden: path.to_string(),
                }));
            }
            (read_golden(path)?, path.to_string())
        }
        None => (String::new(), NO_FAILURES_LABEL.to_string()),
    };

    if expected == actual.as_str() {
        return Ok(None);
    }

    let diff = render_diff(&expected, actual.as_str(), &expected_from, case_name);
    Ok(Some(AssertionFailure::GoldenMismatch {
        expected_from,
        diff,
    }))
}

/// Render a unified diff between `expected` and `actual`, anchored at the
/// expectation's source and the case name.
fn render_diff(expected: &str, actual: &str, expected_from: &str, case_name: &str) -> String {
    TextDiff::from_lines(expected, actual)
        .unified_diff()
        .header(expected_from, case_name)
        .to_string()
}
