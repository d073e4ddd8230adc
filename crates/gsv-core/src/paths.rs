//! # Path Resolution — Lexical, Slash-Normalized Locations
//!
//! Case definitions name schema, document, and golden locations relative to
//! a base directory. Resolution is purely lexical: join against the base,
//! fold `.` and `..` segments, render with forward slashes. The filesystem
//! is never consulted, so resolution cannot observe symlinks and produces
//! the same string on every platform.

use std::env;
use std::fmt;
use std::path::{Component, Path};

use crate::error::InfrastructureError;

/// A lexically cleaned, forward-slash location.
///
/// The inner string is the only representation; `as_path` borrows it for
/// filesystem calls (forward slashes are accepted everywhere).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath(String);

impl ResolvedPath {
    /// Resolve `relative` against `base`.
    ///
    /// Absolute inputs ignore `base`. `.` segments drop out and `..` pops
    /// the previous segment where one exists; `..` at a root folds away,
    /// while leading `..` on a relative result is kept.
    pub fn resolve(base: &Path, relative: &Path) -> Self {
        if relative.is_absolute() {
            Self(clean_slash(relative))
        } else {
            Self(clean_slash(&base.join(relative)))
        }
    }

    /// Lexically clean `path` without joining any base.
    ///
    /// Spelling aliases of one location (`./g/x.txt`, `g//x.txt`,
    /// `g/../g/x.txt`) all clean to the same value, so cleaned paths
    /// compare by location rather than by spelling.
    pub fn clean(path: &Path) -> Self {
        Self(clean_slash(path))
    }

    /// Resolve `relative` against the process working directory.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::WorkingDir`] when the working
    /// directory cannot be determined.
    pub fn from_cwd(relative: &Path) -> Result<Self, InfrastructureError> {
        let cwd = env::current_dir().map_err(|e| InfrastructureError::WorkingDir {
            reason: e.to_string(),
        })?;
        Ok(Self::resolve(&cwd, relative))
    }

    /// The forward-slash string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Borrow as a `Path` for filesystem calls.
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

/// Lexically clean `path` and render it with forward slashes.
fn clean_slash(path: &Path) -> String {
    let mut prefix = String::new();
    let mut rooted = false;
    let mut segments: Vec<String> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(p) => {
                prefix = p.as_os_str().to_string_lossy().replace('\\', "/");
            }
            Component::RootDir => rooted = true,
            Component::CurDir => {}
            Component::ParentDir => match segments.last() {
                Some(last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push("..".to_string()),
            },
            Component::Normal(s) => segments.push(s.to_string_lossy().into_owned()),
        }
    }

    let mut out = prefix;
    if rooted {
        out.push('/');
    }
    out.push_str(&segments.join("/"));
    if out.is_empty() {
        out.push('.');
    }
    out
}
