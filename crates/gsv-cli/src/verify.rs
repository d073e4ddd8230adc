//! # Verify CLI — Run suites against their golden artifacts.
//!
//! Provides the `gsv verify` subcommand: load each suite, run its cases,
//! and print per-case outcomes with suite totals.
//!
//! ## Usage
//!
//! ```bash
//! # Run the bundled fixture suites:
//! gsv verify fixtures/node.yaml fixtures/collection.yaml
//!
//! # Regenerate golden artifacts after an engine or schema change:
//! gsv verify fixtures/node.yaml --update
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use gsv_core::{InfrastructureError, ResolvedPath};
use gsv_harness::{run_suite, CaseStatus, RunConfig, RunReport, Suite};

/// Verify subcommand arguments.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Suite files to run.
    #[arg(required = true)]
    pub suites: Vec<PathBuf>,

    /// Rewrite the golden artifacts of negative cases from actual
    /// results instead of comparing. Review the rewrites before
    /// committing.
    #[arg(long)]
    pub update: bool,

    /// Base directory case locations resolve against.
    /// Defaults to each suite file's own directory.
    #[arg(long)]
    pub base_dir: Option<PathBuf>,
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let mut totals = (0usize, 0usize, 0usize);
    let mut total_cases = 0usize;

    for suite_path in &args.suites {
        let suite = Suite::from_yaml_file(suite_path)
            .with_context(|| format!("cannot load suite {}", suite_path.display()))?;

        let base_dir = resolve_base_dir(args.base_dir.as_deref(), suite_path)?;
        let config = RunConfig::new(base_dir).with_update(args.update);

        let report = run_suite(&suite, &config)
            .with_context(|| format!("run aborted for suite '{}'", suite.name))?;
        print_report(&report);

        total_cases += report.cases.len();
        totals.0 += report.passed();
        totals.1 += report.updated();
        totals.2 += report.failed();
    }

    let (passed, updated, failed) = totals;
    println!("Total: {total_cases} cases, {passed} passed, {updated} updated, {failed} failed");
    if updated > 0 {
        println!("Review updated golden artifacts before committing.");
    }

    Ok(if failed == 0 { 0 } else { 1 })
}

/// Pick the directory case locations resolve against: an explicit
/// `--base-dir` wins, otherwise the suite file's own directory. Either
/// way the result is made absolute against the working directory.
fn resolve_base_dir(
    override_dir: Option<&Path>,
    suite_path: &Path,
) -> Result<PathBuf, InfrastructureError> {
    let dir = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => suite_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };
    Ok(ResolvedPath::from_cwd(&dir)?.as_path().to_path_buf())
}

fn print_report(report: &RunReport) {
    println!("suite: {}", report.suite);
    for case in &report.cases {
        match &case.status {
            CaseStatus::Passed => {
                println!("  {:<8} {}", "PASS", case.name);
            }
            CaseStatus::Updated { golden } => {
                println!("  {:<8} {} -> {golden}", "UPDATED", case.name);
            }
            CaseStatus::Failed(failure) => {
                println!("  {:<8} {}", "FAIL", case.name);
                for line in failure.to_string().lines() {
                    println!("           {line}");
                }
            }
        }
    }
    println!(
        "  {} cases: {} passed, {} updated, {} failed",
        report.cases.len(),
        report.passed(),
        report.updated(),
        report.failed()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_json(dir: &Path, rel: &str, value: &serde_json::Value) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    }

    /// Suite tree with one positive and one negative case.
    fn write_suite_tree(dir: &Path) -> PathBuf {
        write_json(
            dir,
            "schemas/node.schema.json",
            &json!({
                "type": "object",
                "required": ["name"],
                "properties": { "name": { "type": "string" } }
            }),
        );
        write_json(dir, "documents/good.json", &json!({ "name": "docs" }));
        write_json(dir, "documents/bad.json", &json!({}));
        let suite_path = dir.join("suite.yaml");
        std::fs::write(
            &suite_path,
            r#"suite: node-schema
cases:
  - name: good
    schema: schemas/node.schema.json
    document: documents/good.json
  - name: bad
    schema: schemas/node.schema.json
    document: documents/bad.json
    golden: golden/bad.txt
"#,
        )
        .unwrap();
        suite_path
    }

    #[test]
    fn resolve_base_dir_override_wins() {
        let base = resolve_base_dir(Some(Path::new("/explicit")), Path::new("suites/a.yaml"));
        assert_eq!(base.unwrap(), PathBuf::from("/explicit"));
    }

    #[test]
    fn resolve_base_dir_defaults_to_suite_parent() {
        let dir = tempfile::tempdir().unwrap();
        let suite_path = dir.path().join("suites/a.yaml");
        let base = resolve_base_dir(None, &suite_path).unwrap();
        assert!(base.is_absolute());
        assert!(base.ends_with("suites"));
    }

    #[test]
    fn resolve_base_dir_bare_filename_uses_working_directory() {
        let base = resolve_base_dir(None, Path::new("a.yaml")).unwrap();
        assert!(base.is_absolute());
    }

    #[test]
    fn verify_update_then_compare_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let suite_path = write_suite_tree(dir.path());

        let update = VerifyArgs {
            suites: vec![suite_path.clone()],
            update: true,
            base_dir: None,
        };
        assert_eq!(run_verify(&update).unwrap(), 0);
        assert!(dir.path().join("golden/bad.txt").exists());

        let compare = VerifyArgs {
            suites: vec![suite_path],
            update: false,
            base_dir: None,
        };
        assert_eq!(run_verify(&compare).unwrap(), 0);
    }

    #[test]
    fn verify_tampered_golden_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let suite_path = write_suite_tree(dir.path());

        let update = VerifyArgs {
            suites: vec![suite_path.clone()],
            update: true,
            base_dir: None,
        };
        run_verify(&update).unwrap();

        let golden = dir.path().join("golden/bad.txt");
        let mut content = std::fs::read_to_string(&golden).unwrap();
        content.push_str("[zz] stale line\n");
        std::fs::write(&golden, content).unwrap();

        let compare = VerifyArgs {
            suites: vec![suite_path],
            update: false,
            base_dir: None,
        };
        assert_eq!(run_verify(&compare).unwrap(), 1);
    }

    #[test]
    fn verify_missing_suite_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = VerifyArgs {
            suites: vec![dir.path().join("absent.yaml")],
            update: false,
            base_dir: None,
        };
        assert!(run_verify(&args).is_err());
    }

    #[test]
    fn verify_missing_schema_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let suite_path = dir.path().join("suite.yaml");
        std::fs::write(
            &suite_path,
            r#"suite: broken
cases:
  - name: no-schema
    schema: schemas/absent.schema.json
    document: documents/absent.json
"#,
        )
        .unwrap();

        let args = VerifyArgs {
            suites: vec![suite_path],
            update: false,
            base_dir: None,
        };
        assert!(run_verify(&args).is_err());
    }

    #[test]
    fn verify_explicit_base_dir_resolves_locations() {
        let dir = tempfile::tempdir().unwrap();
        let tree = write_suite_tree(dir.path());
        // Move the suite file elsewhere; --base-dir points back at the tree.
        let moved = dir.path().join("elsewhere/suite.yaml");
        std::fs::create_dir_all(moved.parent().unwrap()).unwrap();
        std::fs::rename(&tree, &moved).unwrap();

        let args = VerifyArgs {
            suites: vec![moved],
            update: true,
            base_dir: Some(dir.path().to_path_buf()),
        };
        assert_eq!(run_verify(&args).unwrap(), 0);
        assert!(dir.path().join("golden/bad.txt").exists());
    }
}
