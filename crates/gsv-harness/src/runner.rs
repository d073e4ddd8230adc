//! # Case Runner — Execute Suites, Aggregate Outcomes
//!
//! Runs every case of a suite: resolve locations against the configured
//! base directory, validate the document, normalize the failures, then
//! update or compare. An assertion failure is recorded in the report and
//! the run continues; the first infrastructure error aborts the run.

use std::path::PathBuf;

use gsv_core::{AssertionFailure, InfrastructureError, ResolvedPath};
use gsv_schema::SchemaValidator;

use crate::golden;
use crate::normalize::NormalizedResult;
use crate::suite::{SchemaCase, Suite};

/// Runner configuration, threaded explicitly through every run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Base directory case locations resolve against.
    pub base_dir: PathBuf,
    /// Rewrite golden artifacts of negative cases instead of comparing.
    pub update: bool,
}

impl RunConfig {
    /// Compare-mode configuration rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            update: false,
        }
    }

    /// Switch update mode on or off.
    pub fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }
}

/// Outcome of a single case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseStatus {
    /// Expectations held.
    Passed,
    /// Update mode rewrote the golden artifact at the given location.
    Updated {
        /// Resolved location that was written.
        golden: String,
    },
    /// Expectations did not hold.
    Failed(AssertionFailure),
}

/// One case's entry in the run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    /// Case name as declared in the suite.
    pub name: String,
    /// Outcome.
    pub status: CaseStatus,
}

/// Aggregated outcome of one suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Suite name.
    pub suite: String,
    /// Per-case entries, in suite order.
    pub cases: Vec<CaseReport>,
}

impl RunReport {
    /// Number of cases whose expectations held.
    pub fn passed(&self) -> usize {
        self.count(|s| matches!(s, CaseStatus::Passed))
    }

    /// Number of golden artifacts rewritten by update mode.
    pub fn updated(&self) -> usize {
        self.count(|s| matches!(s, CaseStatus::Updated { .. }))
    }

    /// Number of cases whose expectations did not hold.
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, CaseStatus::Failed(_)))
    }

    /// True when no case failed. Updated cases count as success.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, pred: impl Fn(&CaseStatus) -> bool) -> usize {
        self.cases.iter().filter(|c| pred(&c.status)).count()
    }
}

/// Run every case of `suite` under `config`.
///
/// Suite rules are checked up front, so a malformed suite aborts before
/// any case executes.
///
/// # Errors
///
/// Returns the first [`InfrastructureError`] encountered; cases after it
/// do not execute.
pub fn run_suite(suite: &Suite, config: &RunConfig) -> Result<RunReport, InfrastructureError> {
    suite.ensure_unique()?;

    let mut cases = Vec::with_capacity(suite.cases.len());
    for case in &suite.cases {
        let status = run_case(case, config)?;
        match &status {
            CaseStatus::Passed => {
                tracing::debug!(suite = %suite.name, case = %case.name, "case passed");
            }
            CaseStatus::Updated { golden } => {
                tracing::warn!(
                    suite = %suite.name,
                    case = %case.name,
                    golden = %golden,
                    "golden artifact rewritten, review before committing"
                );
            }
            CaseStatus::Failed(failure) => {
                tracing::debug!(suite = %suite.name, case = %case.name, %failure, "case failed");
            }
        }
        cases.push(CaseReport {
            name: case.name.clone(),
            status,
        });
    }

    Ok(RunReport {
        suite: suite.name.clone(),
        cases,
    })
}

/// Run a single case under `config`.
///
/// Update mode affects negative cases only: their artifact is rewritten
/// from the actual result and the case reports as updated without
/// comparison. Positive cases always compare.
///
/// # Errors
///
/// Any schema, document, or golden infrastructure problem surfaces here;
/// assertion failures do not, they land in the returned status.
pub fn run_case(case: &SchemaCase, config: &RunConfig) -> Result<CaseStatus, InfrastructureError> {
    let schema_path = ResolvedPath::resolve(&config.base_dir, &case.schema);
    let document_path = ResolvedPath::resolve(&config.base_dir, &case.document);
    let golden_path = case
        .golden
        .as_deref()
        .map(|g| ResolvedPath::resolve(&config.base_dir, g));

    let validator = SchemaValidator::load(&schema_path)?;
    let failures = validator.validate_file(&document_path)?;
    let actual = NormalizedResult::from_failures(&failures);

    if config.update {
        if let Some(golden) = &golden_path {
            golden::write_golden(golden, &actual)?;
            return Ok(CaseStatus::Updated {
                golden: golden.to_string(),
            });
        }
    }

    match golden::compare(&case.name, golden_path.as_ref(), &actual)? {
        None => Ok(CaseStatus::Passed),
        Some(failure) => Ok(CaseStatus::Failed(failure)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(statuses: Vec<CaseStatus>) -> RunReport {
        RunReport {
            suite: "s".into(),
            cases: statuses
                .into_iter()
                .enumerate()
                .map(|(i, status)| CaseReport {
                    name: format!("case-{i}"),
                    status,
                })
                .collect(),
        }
    }

    #[test]
    fn test_report_counts() {
        let r = report(vec![
            CaseStatus::Passed,
            CaseStatus::Updated {
                golden: "g.txt".into(),
            },
            CaseStatus::Failed(AssertionFailure::UnexpectedlyValid {
                golden: "g.txt".into(),
            }),
            CaseStatus::Passed,
        ]);
        assert_eq!(r.passed(), 2);
        assert_eq!(r.updated(), 1);
        assert_eq!(r.failed(), 1);
        assert!(!r.is_success());
    }

    #[test]
    fn test_updated_cases_count_as_success() {
        let r = report(vec![
            CaseStatus::Passed,
            CaseStatus::Updated {
                golden: "g.txt".into(),
            },
        ]);
        assert!(r.is_success());
    }

    #[test]
    fn test_empty_report_is_success() {
        let r = report(vec![]);
        assert!(r.is_success());
        assert_eq!(r.passed() + r.updated() + r.failed(), 0);
    }

    #[test]
    fn test_config_with_update() {
        let config = RunConfig::new("/base").with_update(true);
        assert!(config.update);
        assert_eq!(config.base_dir, PathBuf::from("/base"));
    }
}
