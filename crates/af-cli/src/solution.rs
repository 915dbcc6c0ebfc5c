// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolves the `-p/--solution-package` argument (spec.md §1/§6) down to a
//! local directory holding `solution.jsonc`, and loads that manifest.
//!
//! Grounded on the original's `_validate_arguments`/`forge` package-handling
//! branch: a ZIP path is unzipped, a GitHub URL is fetched and unzipped, a
//! directory is used as-is.

use af_platform::Platform;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolutionError {
    #[error("'{0}' is neither an existing directory, a .zip file, nor a URL")]
    NotFound(String),
    #[error("'{0}' does not contain a solution.jsonc manifest")]
    MissingManifest(PathBuf),
    #[error("reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing '{path}': {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Platform(#[from] af_platform::PlatformError),
}

/// The minimal `solution.jsonc` schema: a display name, a set of variables
/// to seed the Variable Store with before the sequence runs, and the
/// relative path to the sequence document that provisions the workspace —
/// the Rust analogue of the original's `get_included_file('environment')`.
#[derive(Debug, Clone, Deserialize)]
pub struct SolutionManifest {
    pub name: String,
    #[serde(default)]
    pub variables: serde_json::Map<String, serde_json::Value>,
    pub environment: EnvironmentSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentSection {
    pub create: String,
}

fn looks_like_url(spec: &str) -> bool {
    spec.starts_with("http://") || spec.starts_with("https://")
}

/// Resolve `spec` (a directory, a `.zip` path, or a GitHub URL) to a local
/// directory, downloading/extracting as needed.
pub async fn resolve_solution_directory(platform: &Platform, spec: &str) -> Result<PathBuf, SolutionError> {
    let path = Path::new(spec);

    if looks_like_url(spec) {
        let allowed: Vec<String> = vec!["jsonc", "json", "zip", "py", "md", "txt"].into_iter().map(str::to_string).collect();
        let zip_path = platform.git_get_path_from_url(spec, None, Some(&allowed), true).await?;
        let result = platform.decompress(&zip_path, None).await?;
        let destination = result.response.unwrap_or(zip_path);
        return Ok(PathBuf::from(destination));
    }

    if path.is_dir() {
        return Ok(path.to_path_buf());
    }

    if path.is_file() && path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("zip")) {
        let result = platform.decompress(spec, None).await?;
        let destination = result.response.ok_or_else(|| SolutionError::NotFound(spec.to_string()))?;
        return Ok(PathBuf::from(destination));
    }

    Err(SolutionError::NotFound(spec.to_string()))
}

/// Load and parse `<solution_dir>/solution.jsonc`.
pub fn load_manifest(solution_dir: &Path) -> Result<SolutionManifest, SolutionError> {
    let manifest_path = solution_dir.join("solution.jsonc");
    if !manifest_path.is_file() {
        return Err(SolutionError::MissingManifest(solution_dir.to_path_buf()));
    }
    let text = std::fs::read_to_string(&manifest_path).map_err(|source| SolutionError::Io {
        path: manifest_path.clone(),
        source,
    })?;
    let stripped = af_sequence::strip_jsonc_comments(&text);
    serde_json::from_str(&stripped).map_err(|source| SolutionError::Manifest {
        path: manifest_path,
        source,
    })
}

#[cfg(test)]
#[path = "solution_tests.rs"]
mod tests;
