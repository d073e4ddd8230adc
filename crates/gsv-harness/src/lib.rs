//! # gsv-harness — Golden-File Verification Harness
//!
//! Ties the validator adapter to stored expectations. A case names a
//! schema, a document, and optionally a golden artifact; running it
//! validates the document, normalizes the failures into canonical text,
//! and byte-compares that text against the artifact (absent artifact
//! means "expected empty"). Update mode rewrites artifacts from actual
//! results instead of comparing.
//!
//! ## Modules
//!
//! - [`normalize`] — `NormalizedResult`, the canonical text form of a
//!   failure set. Sorted lines, trailing newlines, empty string for the
//!   clean outcome.
//! - [`golden`] — artifact reading/writing and byte comparison with
//!   unified diff rendering.
//! - [`suite`] — declarative case lists, loadable from YAML.
//! - [`runner`] — executes suites and aggregates per-case outcomes into
//!   a run report.
//!
//! ## Failure Semantics
//!
//! One case's assertion failure never stops its siblings; the first
//! infrastructure error aborts the whole run. Update mode is explicit
//! configuration on [`runner::RunConfig`], never ambient state.

pub mod golden;
pub mod normalize;
pub mod runner;
pub mod suite;

// Re-export primary types for ergonomic imports.
pub use normalize::NormalizedResult;
pub use runner::{run_case, run_suite, CaseReport, CaseStatus, RunConfig, RunReport};
pub use suite::{SchemaCase, Suite};
