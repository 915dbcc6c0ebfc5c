// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Git operations and GitHub path downloads, grounded on `git_clone_repo`/
//! `git_checkout_revision`/`git_get_path_from_url`.

use crate::error::PlatformError;
use crate::http::UrlGetOptions;
use crate::platform::Platform;
use crate::shell::flatten_command;
use af_core::CommandResult;
use std::time::Duration;

fn normalize_to_github_api_url(url: &str) -> Option<String> {
    if let Some(rest) = url.strip_prefix("https://github.com/") {
        let mut parts = rest.splitn(4, '/');
        let owner = parts.next()?;
        let repo = parts.next()?;
        let kind = parts.next().unwrap_or("");
        let path = parts.next().unwrap_or("");
        if kind == "tree" {
            let mut segments = path.splitn(2, '/');
            let branch = segments.next().unwrap_or("main");
            let tail = segments.next().unwrap_or("");
            return Some(format!("https://api.github.com/repos/{owner}/{repo}/contents/{tail}?ref={branch}"));
        }
        return Some(url.to_string());
    }
    if url.starts_with("https://api.github.com/") {
        return Some(url.to_string());
    }
    None
}

impl Platform {
    pub async fn git_clone_repo(
        &self,
        repo_url: &str,
        dest_repo_path: &str,
        timeout: Option<Duration>,
        clear_destination_path: bool,
    ) -> Result<CommandResult, PlatformError> {
        let dest_repo_path = self.expand_var(dest_repo_path).map_err(|source| PlatformError::Vars {
            context: "expanding destination path".to_string(),
            source,
        })?;

        crate::workspace::path_erase(&dest_repo_path, std::path::Path::new(&dest_repo_path), clear_destination_path, false)?;

        let arguments = format!("clone --progress {repo_url} {dest_repo_path}");
        self.execute_shell_command(&flatten_command("git", Some(&arguments)), None, timeout)
            .await
    }

    pub async fn git_checkout_revision(
        &self,
        dest_repo_path: &str,
        revision: &str,
        timeout: Option<Duration>,
        pull_latest: bool,
    ) -> Result<CommandResult, PlatformError> {
        let dest_repo_path = self.expand_var(dest_repo_path).map_err(|source| PlatformError::Vars {
            context: "expanding repo path".to_string(),
            source,
        })?;
        let repo_path = std::path::PathBuf::from(&dest_repo_path);
        if !repo_path.exists() {
            return Err(PlatformError::NotFound(dest_repo_path));
        }

        if pull_latest {
            let result = self
                .execute_shell_command("git pull", Some(repo_path.clone()), timeout)
                .await?;
            if !result.is_success() {
                return Err(PlatformError::Internal(format!(
                    "git 'pull' failed with exit code {}",
                    result.return_code
                )));
            }
        }

        self.execute_shell_command(&format!("git checkout {revision}"), Some(repo_path), timeout)
            .await
    }

    /// Download every file directly under a GitHub tree URL and bundle them
    /// into a local zip archive, returning the archive's path.
    pub async fn git_get_path_from_url(
        &self,
        url: &str,
        destination_file_name: Option<&str>,
        allowed_extensions: Option<&[String]>,
        delete_if_exist: bool,
    ) -> Result<String, PlatformError> {
        let api_url =
            normalize_to_github_api_url(url.trim()).ok_or_else(|| PlatformError::InvalidArgument(format!("URL '{url}' is not a valid URL")))?;

        let destination_file_name = match destination_file_name {
            Some(name) => self.expand_var(name).map_err(|source| PlatformError::Vars {
                context: "expanding destination file name".to_string(),
                source,
            })?,
            None => std::env::temp_dir().join(format!("af-{}.zip", uuid::Uuid::new_v4())).display().to_string(),
        };

        let destination_path = std::path::PathBuf::from(&destination_file_name);
        if destination_path.exists() {
            if !delete_if_exist {
                return Err(PlatformError::AlreadyExists(destination_file_name));
            }
            std::fs::remove_file(&destination_path).map_err(|source| PlatformError::Io {
                context: format!("removing '{destination_file_name}'"),
                source,
            })?;
        }

        let listing = self.url_get(&api_url, UrlGetOptions::default()).await?;
        let files = listing
            .extra_data
            .ok_or_else(|| PlatformError::Internal("could not get path listing for remote URL".to_string()))?;
        let files = files
            .as_array()
            .ok_or_else(|| PlatformError::Internal("path listing did not return a list".to_string()))?;

        let temp_dir = tempfile::tempdir().map_err(|source| PlatformError::Io {
            context: "creating temporary download directory".to_string(),
            source,
        })?;

        for file_info in files {
            if file_info.get("type").and_then(|v| v.as_str()) != Some("file") {
                continue;
            }
            let Some(name) = file_info.get("name").and_then(|v| v.as_str()) else {
                continue;
            };
            if let Some(extensions) = allowed_extensions {
                let matches = extensions.iter().any(|ext| name.to_lowercase().ends_with(&ext.to_lowercase()));
                if !matches {
                    continue;
                }
            }
            let Some(download_url) = file_info.get("download_url").and_then(|v| v.as_str()) else {
                continue;
            };
            let local_path = temp_dir.path().join(name);
            let options = UrlGetOptions {
                destination: Some(local_path.display().to_string()),
                ..Default::default()
            };
            let result = self.url_get(download_url, options).await?;
            if !result.is_success() {
                return Err(PlatformError::Internal(format!(
                    "HTTP operation failed with exit code {}",
                    result.return_code
                )));
            }
        }

        let archive_file = std::fs::File::create(&destination_path).map_err(|source| PlatformError::Io {
            context: format!("creating '{destination_file_name}'"),
            source,
        })?;
        let mut writer = zip::ZipWriter::new(archive_file);
        let options = zip::write::SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        for entry in std::fs::read_dir(temp_dir.path()).map_err(|source| PlatformError::Io {
            context: "reading temporary download directory".to_string(),
            source,
        })? {
            let entry = entry.map_err(|source| PlatformError::Io {
                context: "reading temporary download directory entry".to_string(),
                source,
            })?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            writer.start_file(name.as_ref(), options).map_err(|source| PlatformError::Zip {
                context: format!("writing '{name}' to archive"),
                source,
            })?;
            let contents = std::fs::read(entry.path()).map_err(|source| PlatformError::Io {
                context: format!("reading '{}'", entry.path().display()),
                source,
            })?;
            std::io::Write::write_all(&mut writer, &contents).map_err(|source| PlatformError::Io {
                context: format!("writing '{name}' to archive"),
                source,
            })?;
        }
        writer.finish().map_err(|source| PlatformError::Zip {
            context: format!("finalizing '{destination_file_name}'"),
            source,
        })?;

        Ok(destination_file_name)
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
