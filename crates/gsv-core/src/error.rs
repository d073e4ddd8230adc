//! # Error Types — Infrastructure vs Assertion
//!
//! Two error kinds, deliberately kept apart. `InfrastructureError` means the
//! harness could not do its job at all — an unreadable working directory, an
//! unloadable schema or document, an unreadable or unwritable golden
//! artifact, a malformed suite — and is fatal to the run. `AssertionFailure`
//! means one case's expectation did not hold; it is recorded in the run
//! report and later cases still execute.
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations. Load-style variants carry the resolved location and a
//! stringified cause.

use thiserror::Error;

/// Fatal harness failure. Aborts the run that encounters it.
#[derive(Error, Debug, Clone)]
pub enum InfrastructureError {
    /// The process working directory could not be determined.
    #[error("cannot determine working directory: {reason}")]
    WorkingDir {
        /// Underlying cause.
        reason: String,
    },

    /// Schema file could not be read or parsed.
    #[error("schema load error for '{path}': {reason}")]
    SchemaLoad {
        /// Resolved schema location.
        path: String,
        /// Underlying cause.
        reason: String,
    },

    /// Schema parsed but did not compile into a validator.
    #[error("validator build error for '{path}': {reason}")]
    ValidatorBuild {
        /// Resolved schema location.
        path: String,
        /// Underlying cause.
        reason: String,
    },

    /// Document file could not be read or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Resolved document location.
        path: String,
        /// Underlying cause.
        reason: String,
    },

    /// Golden artifact is declared but could not be read.
    #[error("cannot read golden artifact '{path}': {reason}")]
    GoldenRead {
        /// Resolved golden location.
        path: String,
        /// Underlying cause.
        reason: String,
    },

    /// Golden artifact could not be written in update mode.
    #[error("cannot write golden artifact '{path}': {reason}")]
    GoldenWrite {
        /// Resolved golden location.
        path: String,
        /// Underlying cause.
        reason: String,
    },

    /// Suite file could not be read or parsed.
    #[error("suite load error for '{path}': {reason}")]
    SuiteLoad {
        /// Suite file location.
        path: String,
        /// Underlying cause.
        reason: String,
    },

    /// Two cases in one suite share a name.
    #[error("duplicate case name '{name}' in suite '{suite}'")]
    DuplicateCaseName {
        /// The repeated case name.
        name: String,
        /// Suite containing the duplicates.
        suite: String,
    },

    /// Two cases in one suite declare the same golden location.
    #[error("duplicate golden location '{path}' in suite '{suite}'")]
    DuplicateGolden {
        /// The repeated golden location.
        path: String,
        /// Suite containing the duplicates.
        suite: String,
    },
}

/// A single case's expectation was not met. Never fatal to the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssertionFailure {
    /// The normalized actual result differs byte-wise from the expected
    /// result.
    #[error("expectations not met:\n{diff}")]
    GoldenMismatch {
        /// Where the expected bytes came from: the golden location, or the
        /// no-failures label for positive cases.
        expected_from: String,
        /// Unified diff, expected on `-`, actual on `+`.
        diff: String,
    },

    /// The case declares a golden artifact but its document validated
    /// cleanly.
    #[error("document validated cleanly but the case declares golden '{golden}'; drop the golden declaration if the case is now positive")]
    UnexpectedlyValid {
        /// Declared golden location.
        golden: String,
    },
}
