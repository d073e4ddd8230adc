//! # gsv-core — Foundational Types for the Golden Schema Verifier
//!
//! This crate is the bedrock of the gsv workspace. It defines the small set
//! of primitives every other crate builds on: validation failures as plain
//! data, the split between infrastructure errors and assertion failures,
//! and lexical path resolution.
//!
//! ## Key Design Principles
//!
//! 1. **Failures are data, not errors.** A document that violates its schema
//!    produces `ValidationFailure` values and an `Ok` return. `Err` is
//!    reserved for broken infrastructure: unreadable files, uncompilable
//!    schemas, unwritable golden artifacts.
//!
//! 2. **Two error kinds, nothing implicit.** `InfrastructureError` is fatal
//!    to the run that encounters it; `AssertionFailure` belongs to a single
//!    case and never stops its siblings. Both are ordinary values — no
//!    panics, no process exits in library code.
//!
//! 3. **Lexical path resolution.** `ResolvedPath` joins and cleans paths
//!    without touching the filesystem and always renders with forward
//!    slashes, so case definitions and report lines read identically on
//!    every platform.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gsv-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`.

pub mod error;
pub mod failure;
pub mod paths;

// Re-export primary types for ergonomic imports.
pub use error::{AssertionFailure, InfrastructureError};
pub use failure::ValidationFailure;
pub use paths::ResolvedPath;
