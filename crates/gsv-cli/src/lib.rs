//! # gsv-cli — CLI for the Golden Schema Verifier
//!
//! Provides the `gsv` command-line interface over the harness crates.
//!
//! ## Subcommands
//!
//! - `gsv verify <suite.yaml>... [--update] [--base-dir <dir>]` — run
//!   suites, printing a per-case line and suite totals. Exit code 0 when
//!   no case failed; updated artifacts count as success.
//! - `gsv list <suite.yaml>...` — print the cases of each suite without
//!   running them.
//!
//! Case locations resolve against each suite file's own directory unless
//! `--base-dir` overrides it, so suite trees stay relocatable.

pub mod list;
pub mod verify;
