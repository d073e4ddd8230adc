//! # List CLI — Inspect suite contents without running anything.
//!
//! Provides the `gsv list` subcommand: load each suite and print its cases
//! with their polarity and declared locations. Useful for a quick review of
//! what a verify run would cover.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use gsv_harness::Suite;

/// List subcommand arguments.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Suite files to inspect.
    #[arg(required = true)]
    pub suites: Vec<PathBuf>,
}

/// Execute the list subcommand.
pub fn run_list(args: &ListArgs) -> Result<u8> {
    for suite_path in &args.suites {
        let suite = Suite::from_yaml_file(suite_path)
            .with_context(|| format!("cannot load suite {}", suite_path.display()))?;

        println!("suite: {} ({} cases)", suite.name, suite.cases.len());
        for case in &suite.cases {
            let polarity = if case.is_negative() {
                "negative"
            } else {
                "positive"
            };
            println!("  {:<10} {}", polarity, case.name);
            println!("    schema:   {}", case.schema.display());
            println!("    document: {}", case.document.display());
            if let Some(golden) = &case.golden {
                println!("    golden:   {}", golden.display());
            }
        }
        println!();
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_suite(dir: &Path) -> PathBuf {
        let suite_path = dir.join("suite.yaml");
        std::fs::write(
            &suite_path,
            r#"suite: node-schema
cases:
  - name: minimum
    schema: schemas/node.schema.json
    document: documents/minimum.json
  - name: empty-object
    schema: schemas/node.schema.json
    document: documents/empty.json
    golden: golden/empty.txt
"#,
        )
        .unwrap();
        suite_path
    }

    #[test]
    fn list_loads_and_reports_zero() {
        let dir = tempfile::tempdir().unwrap();
        let suite_path = write_suite(dir.path());
        let args = ListArgs {
            suites: vec![suite_path],
        };
        assert_eq!(run_list(&args).unwrap(), 0);
    }

    #[test]
    fn list_missing_suite_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = ListArgs {
            suites: vec![dir.path().join("absent.yaml")],
        };
        assert!(run_list(&args).is_err());
    }

    #[test]
    fn list_rejects_duplicate_case_names() {
        let dir = tempfile::tempdir().unwrap();
        let suite_path = dir.path().join("suite.yaml");
        std::fs::write(
            &suite_path,
            r#"suite: broken
cases:
  - name: twice
    schema: a.json
    document: b.json
  - name: twice
    schema: a.json
    document: c.json
"#,
        )
        .unwrap();
        let args = ListArgs {
            suites: vec![suite_path],
        };
        assert!(run_list(&args).is_err());
    }
}
