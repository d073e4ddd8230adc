//! # gsv-schema — Schema Validator Adapter
//!
//! Wraps the `jsonschema` crate (Draft 2020-12) behind the narrow seam the
//! harness needs: load and compile one schema, validate documents against
//! it, and hand back [`gsv_core::ValidationFailure`] values with dotted
//! field locations.
//!
//! ## Validation Is Not an Error
//!
//! A document that violates its schema is a normal outcome here — the
//! adapter returns `Ok` with a non-empty failure list. `Err` is reserved
//! for infrastructure: unreadable or unparseable schema files, schemas
//! that do not compile, unreadable or unparseable documents.
//!
//! ## Reference Resolution
//!
//! External `$ref` URIs resolve to files sitting next to the schema being
//! compiled (by filename). Anything that cannot be resolved locally —
//! metaschemas included — resolves to the permissive schema instead, so
//! compilation never makes a network request.
//!
//! ## Crate Policy
//!
//! - Depends only on `gsv-core` internally.
//! - Engine messages pass through unmodified; golden artifacts therefore
//!   track the pinned engine version.

pub mod validate;

pub use validate::SchemaValidator;
