//! # Schema Validation
//!
//! Runtime validation of JSON/YAML documents against a JSON Schema
//! definition (Draft 2020-12), reported as [`ValidationFailure`] values.
//!
//! ## Field Mapping
//!
//! The engine locates violations with JSON Pointers (`/a/b/0`). Reports
//! and golden artifacts use the dotted form instead (`a.b.0`), with the
//! document root rendered as `(root)` and pointer escapes unfolded.
//!
//! ## Reference Resolution
//!
//! A `$ref` to another schema resolves to the file of the same name next
//! to the schema being compiled. Unresolvable references answer with the
//! permissive schema so that compilation proceeds without network access.

use std::path::{Path, PathBuf};

use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;

use gsv_core::{InfrastructureError, ResolvedPath, ValidationFailure};

/// Local retriever that resolves `$ref` URIs to sibling schema files.
///
/// This prevents the jsonschema crate from making network requests for
/// cross-schema references: the filename at the end of the URI is looked
/// up in the directory of the schema under compilation. Unresolved URIs
/// (draft metaschemas, missing files) yield a permissive schema that
/// accepts anything.
struct SiblingSchemaRetriever {
    /// Directory of the schema being compiled.
    schema_dir: PathBuf,
}

impl Retrieve for SiblingSchemaRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let uri_str = uri.as_str();
        let filename = uri_str.rsplit('/').next().unwrap_or(uri_str);

        if !filename.is_empty() {
            let candidate = self.schema_dir.join(filename);
            if let Ok(content) = std::fs::read_to_string(&candidate) {
                if let Ok(value) = serde_json::from_str::<Value>(&content) {
                    tracing::debug!(reference = uri_str, "resolved $ref to sibling file");
                    return Ok(value);
                }
            }
        }

        // Unresolved references answer permissively rather than reaching
        // for the network.
        tracing::debug!(reference = uri_str, "unresolved $ref, answering permissively");
        Ok(serde_json::json!({}))
    }
}

/// A compiled validator for a single schema file.
///
/// Construction loads, parses, and compiles the schema; validation then
/// maps every engine error to a [`ValidationFailure`] with a dotted field
/// and the engine's message verbatim.
#[derive(Debug)]
pub struct SchemaValidator {
    /// Resolved location the schema was loaded from.
    schema_path: ResolvedPath,
    /// Compiled validator with sibling `$ref` resolution installed.
    validator: Validator,
}

impl SchemaValidator {
    /// Load and compile the schema at `schema_path`.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::SchemaLoad`] if the file cannot be
    /// read or is not valid JSON, and [`InfrastructureError::ValidatorBuild`]
    /// if the parsed schema does not compile.
    pub fn load(schema_path: &ResolvedPath) -> Result<Self, InfrastructureError> {
        let content = std::fs::read_to_string(schema_path.as_path()).map_err(|e| {
            InfrastructureError::SchemaLoad {
                path: schema_path.to_string(),
                reason: format!("cannot read file: {e}"),
            }
        })?;

        let schema_value: Value =
            serde_json::from_str(&content).map_err(|e| InfrastructureError::SchemaLoad {
                path: schema_path.to_string(),
                reason: format!("invalid JSON: {e}"),
            })?;

        let validator = build_validator(schema_path, &schema_value)?;
        tracing::debug!(schema = %schema_path, "compiled schema");

        Ok(Self {
            schema_path: schema_path.clone(),
            validator,
        })
    }

    /// The location this validator was loaded from.
    pub fn schema_path(&self) -> &ResolvedPath {
        &self.schema_path
    }

    /// Validate a parsed document.
    ///
    /// Returns one failure per engine error, in engine order. An empty
    /// vector means the document conforms.
    pub fn validate_value(&self, instance: &Value) -> Vec<ValidationFailure> {
        self.validator
            .iter_errors(instance)
            .map(|e| {
                ValidationFailure::new(
                    field_from_pointer(&e.instance_path.to_string()),
                    e.to_string(),
                )
            })
            .collect()
    }

    /// Validate the document stored at `document_path`.
    ///
    /// The format follows the extension: `.yaml`/`.yml` parse as YAML,
    /// everything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::DocumentLoad`] if the file cannot be
    /// read or parsed.
    pub fn validate_file(
        &self,
        document_path: &ResolvedPath,
    ) -> Result<Vec<ValidationFailure>, InfrastructureError> {
        let instance = load_document(document_path)?;
        Ok(self.validate_value(&instance))
    }
}

/// Compile `schema_value` with Draft 2020-12 semantics and sibling `$ref`
/// resolution rooted at the schema's directory.
fn build_validator(
    schema_path: &ResolvedPath,
    schema_value: &Value,
) -> Result<Validator, InfrastructureError> {
    let schema_dir = schema_path
        .as_path()
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft202012);
    opts.with_retriever(SiblingSchemaRetriever { schema_dir });

    opts.build(schema_value)
        .map_err(|e| InfrastructureError::ValidatorBuild {
            path: schema_path.to_string(),
            reason: e.to_string(),
        })
}

/// Parse the document at `path` into a JSON value, dispatching on the
/// file extension.
fn load_document(path: &ResolvedPath) -> Result<Value, InfrastructureError> {
    let content =
        std::fs::read_to_string(path.as_path()).map_err(|e| InfrastructureError::DocumentLoad {
            path: path.to_string(),
            reason: format!("cannot read file: {e}"),
        })?;

    let ext = path
        .as_path()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match ext {
        "yaml" | "yml" => {
            serde_yaml::from_str(&content).map_err(|e| InfrastructureError::DocumentLoad {
                path: path.to_string(),
                reason: format!("invalid YAML: {e}"),
            })
        }
        _ => serde_json::from_str(&content).map_err(|e| InfrastructureError::DocumentLoad {
            path: path.to_string(),
            reason: format!("invalid JSON: {e}"),
        }),
    }
}

/// Map a JSON Pointer instance location to the dotted field form.
///
/// The empty pointer is the document root, rendered `(root)`. Segments
/// join with `.` and JSON Pointer escapes unfold (`~1` to `/`, `~0` to
/// `~`, in that order). Only the leading separator is stripped, so a
/// property named by the empty string keeps its segment (`//a` maps to
/// `.a`).
fn field_from_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        return "(root)".to_string();
    }
    pointer
        .strip_prefix('/')
        .unwrap_or(pointer)
        .split('/')
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}
