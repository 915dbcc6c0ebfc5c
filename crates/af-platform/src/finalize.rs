// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The final steps of workspace creation, grounded on
//! `finalize_workspace_creation`: copy solution assets into the workspace,
//! move the sequence log into `BUILD_LOGS`, and stamp a `.config` file.

use crate::error::PlatformError;
use crate::platform::Platform;
use std::path::{Path, PathBuf};

const SOLUTION_ASSET_EXTENSIONS: &[&str] = &["json", "jsonc", "zip", "py", "md", "txt"];

fn has_solution_asset_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SOLUTION_ASSET_EXTENSIONS.iter().any(|allowed| ext.eq_ignore_ascii_case(allowed)))
        .unwrap_or(false)
}

fn copy_solution_assets(source: &Path, destination: &Path) -> Result<(), PlatformError> {
    std::fs::create_dir_all(destination).map_err(|err| PlatformError::Io {
        context: format!("creating '{}'", destination.display()),
        source: err,
    })?;

    for entry in walk_files(source)? {
        if !has_solution_asset_extension(&entry) {
            continue;
        }
        let relative = entry.strip_prefix(source).unwrap_or(&entry);
        let target = destination.join(relative);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|err| PlatformError::Io {
                context: format!("creating '{}'", parent.display()),
                source: err,
            })?;
        }
        std::fs::copy(&entry, &target).map_err(|err| PlatformError::Io {
            context: format!("copying '{}'", entry.display()),
            source: err,
        })?;
    }
    Ok(())
}

fn walk_files(dir: &Path) -> Result<Vec<PathBuf>, PlatformError> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in std::fs::read_dir(&current).map_err(|err| PlatformError::Io {
            context: format!("reading '{}'", current.display()),
            source: err,
        })? {
            let entry = entry.map_err(|err| PlatformError::Io {
                context: format!("reading entry in '{}'", current.display()),
                source: err,
            })?;
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else {
                files.push(path);
            }
        }
    }
    Ok(files)
}

fn write_config_file(create_path: &Path, solution_name: &str) -> Result<(), PlatformError> {
    let config_path = create_path.join(".config");
    let install_date = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    let contents = format!(
        "# Please do not remove or edit.\n\
         # File was auto-generated by the AutoForge solution installer.\n\
         solution_name={solution_name}\n\
         install_date={install_date}\n"
    );
    std::fs::write(&config_path, contents).map_err(|err| PlatformError::Io {
        context: format!("creating '{}'", config_path.display()),
        source: err,
    })
}

impl Platform {
    /// Carries out the last steps of new workspace creation: copy solution
    /// resources and the `env.sh` launcher, relocate the sequence log, and
    /// stamp the workspace's `.config`.
    pub fn finalize_workspace_creation(
        &self,
        solution_package_path: &str,
        solution_name: &str,
        env_starter_file: &Path,
        sequence_log_file: Option<&Path>,
    ) -> Result<(), PlatformError> {
        #[allow(clippy::unwrap_used)]
        let variables = self.variables.read().unwrap();
        let scripts_path = variables
            .get("SCRIPTS_BASE")
            .map(|v| v.value.clone())
            .ok_or_else(|| PlatformError::Internal("crucial variable 'SCRIPTS_BASE' is not defined".to_string()))?;
        let logs_path = variables
            .get("BUILD_LOGS")
            .map(|v| v.value.clone())
            .ok_or_else(|| PlatformError::Internal("crucial variable 'BUILD_LOGS' is not defined".to_string()))?;
        drop(variables);

        let solution_destination_path = Path::new(&scripts_path).join("solution");
        copy_solution_assets(Path::new(solution_package_path), &solution_destination_path)?;

        let workspace_path = self.workspace_path();
        if env_starter_file.exists() {
            let target = workspace_path.join(
                env_starter_file
                    .file_name()
                    .ok_or_else(|| PlatformError::InvalidArgument("env starter file has no file name".to_string()))?,
            );
            std::fs::copy(env_starter_file, &target).map_err(|err| PlatformError::Io {
                context: format!("copying '{}'", env_starter_file.display()),
                source: err,
            })?;
        }

        if let Some(sequence_log_file) = sequence_log_file {
            let logs_path = Path::new(&logs_path);
            std::fs::create_dir_all(logs_path).map_err(|err| PlatformError::Io {
                context: format!("creating '{}'", logs_path.display()),
                source: err,
            })?;
            let target = logs_path.join(
                sequence_log_file
                    .file_name()
                    .ok_or_else(|| PlatformError::InvalidArgument("sequence log file has no file name".to_string()))?,
            );
            std::fs::rename(sequence_log_file, &target).map_err(|err| PlatformError::Io {
                context: format!("moving '{}'", sequence_log_file.display()),
                source: err,
            })?;
        }

        write_config_file(&workspace_path, solution_name)
    }
}

#[cfg(test)]
#[path = "finalize_tests.rs"]
mod tests;
