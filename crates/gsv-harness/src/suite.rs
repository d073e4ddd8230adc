//! # Suites — Declarative Case Lists
//!
//! A suite is a named list of cases, stored as YAML:
//!
//! ```yaml
//! suite: node-schema
//! cases:
//!   - name: minimum-required
//!     schema: schemas/node.schema.json
//!     document: documents/node-minimum.json
//!   - name: empty-object
//!     schema: schemas/node.schema.json
//!     document: documents/empty-object.json
//!     golden: golden/node-empty-object.txt
//! ```
//!
//! Declaring a `golden` location makes a case negative (failures are
//! expected and recorded there); leaving it out makes the case positive
//! (the document must validate cleanly). Exactly one of the two holds per
//! case. Locations stay as written; the runner resolves them against its
//! base directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use gsv_core::{InfrastructureError, ResolvedPath};

/// One verification case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaCase {
    /// Case name, unique within its suite.
    pub name: String,
    /// Schema location, relative to the run's base directory.
    pub schema: PathBuf,
    /// Document location, relative to the run's base directory.
    pub document: PathBuf,
    /// Expected-result location. Present on negative cases only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub golden: Option<PathBuf>,
}

impl SchemaCase {
    /// A positive case: the document must validate cleanly.
    pub fn positive(
        name: impl Into<String>,
        schema: impl Into<PathBuf>,
        document: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            document: document.into(),
            golden: None,
        }
    }

    /// A negative case: validation failures are expected and recorded at
    /// `golden`.
    pub fn negative(
        name: impl Into<String>,
        schema: impl Into<PathBuf>,
        document: impl Into<PathBuf>,
        golden: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            document: document.into(),
            golden: Some(golden.into()),
        }
    }

    /// True when the case declares a golden artifact.
    pub fn is_negative(&self) -> bool {
        self.golden.is_some()
    }
}

/// A named list of cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    /// Suite name, used as report context.
    #[serde(rename = "suite")]
    pub name: String,
    /// Cases in declaration order.
    pub cases: Vec<SchemaCase>,
}

impl Suite {
    /// Load a suite from a YAML file and check its structural rules.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::SuiteLoad`] when the file cannot be
    /// read or parsed, and the duplicate errors from [`Suite::ensure_unique`]
    /// when its rules are violated.
    pub fn from_yaml_file(path: &Path) -> Result<Self, InfrastructureError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| InfrastructureError::SuiteLoad {
                path: path.display().to_string(),
                reason: format!("cannot read file: {e}"),
            })?;

        let suite: Suite =
            serde_yaml::from_str(&content).map_err(|e| InfrastructureError::SuiteLoad {
                path: path.display().to_string(),
                reason: format!("invalid YAML: {e}"),
            })?;

        suite.ensure_unique()?;
        Ok(suite)
    }

    /// Enforce case-name and golden-location uniqueness.
    ///
    /// Duplicate names make report lines ambiguous; duplicate golden
    /// locations make update mode last-writer-wins. Both are rejected.
    /// Golden locations are compared lexically cleaned, so spelling
    /// aliases of one file (`golden/x.txt`, `./golden/x.txt`) collide.
    pub fn ensure_unique(&self) -> Result<(), InfrastructureError> {
        let mut names: HashSet<&str> = HashSet::new();
        let mut goldens: HashSet<ResolvedPath> = HashSet::new();

        for case in &self.cases {
            if !names.insert(case.name.as_str()) {
                return Err(InfrastructureError::DuplicateCaseName {
                    name: case.name.clone(),
                    suite: self.name.clone(),
                });
            }
            if let Some(golden) = &case.golden {
                let cleaned = ResolvedPath::clean(golden);
                if !goldens.insert(cleaned.clone()) {
                    return Err(InfrastructureError::DuplicateGolden {
                        path: cleaned.to_string(),
                        suite: self.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
