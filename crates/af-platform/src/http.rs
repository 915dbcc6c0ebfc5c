// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plain HTTP retrieval and archive decompression, grounded on `url_get`/
//! `decompress`. `reqwest`'s blocking client runs under `spawn_blocking` so
//! these operations compose with the rest of the async Platform API without
//! tying up the Tokio runtime.

use crate::error::PlatformError;
use crate::platform::Platform;
use crate::workspace::path_create;
use af_core::CommandResult;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Callback invoked with a human-readable progress string (e.g. `"42.17%"`)
/// as a download advances; mirrors forwarding into a Progress Tracker body.
pub type ProgressFn = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Default)]
pub struct UrlGetOptions {
    pub destination: Option<String>,
    pub delete_if_exist: bool,
    pub proxy_server: Option<String>,
    pub token: Option<String>,
    pub timeout: Option<std::time::Duration>,
    pub extra_headers: HashMap<String, String>,
    pub progress: Option<ProgressFn>,
}

fn looks_like_unix_path(text: &str) -> bool {
    !text.rsplit('/').next().unwrap_or(text).contains('.')
}

fn file_from_url(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).to_string()
}

fn build_client(options: &UrlGetOptions) -> Result<reqwest::blocking::Client, PlatformError> {
    let mut builder = reqwest::blocking::Client::builder();
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(proxy) = &options.proxy_server {
        let proxy = reqwest::Proxy::all(proxy).map_err(|source| PlatformError::Http {
            context: format!("configuring proxy '{proxy}'"),
            source,
        })?;
        builder = builder.proxy(proxy);
    }
    builder.build().map_err(|source| PlatformError::Http {
        context: "building HTTP client".to_string(),
        source,
    })
}

fn do_get(url: String, options: UrlGetOptions) -> Result<CommandResult, PlatformError> {
    let is_url_path = looks_like_unix_path(&url);
    let client = build_client(&options)?;

    let mut request = client.get(&url);
    if let Some(token) = &options.token {
        request = request.bearer_auth(token);
    }
    for (header, value) in &options.extra_headers {
        request = request.header(header.as_str(), value.as_str());
    }

    let response = request.send().map_err(|source| PlatformError::Http {
        context: format!("requesting '{url}'"),
        source,
    })?;

    if is_url_path {
        let files: serde_json::Value = response.json().map_err(|source| PlatformError::Http {
            context: format!("parsing directory listing from '{url}'"),
            source,
        })?;
        return Ok(CommandResult::ok_with(url.clone(), url).with_extra_data(files));
    }

    let remote_file = file_from_url(&url);
    let destination_file = match &options.destination {
        None => std::env::temp_dir().join(&remote_file),
        Some(destination) => {
            if looks_like_unix_path(destination) {
                path_create(Path::new(destination), false)?;
                PathBuf::from(destination).join(&remote_file)
            } else {
                if let Some(parent) = Path::new(destination).parent() {
                    path_create(parent, false)?;
                }
                PathBuf::from(destination)
            }
        }
    };

    if destination_file.exists() {
        if !options.delete_if_exist {
            return Err(PlatformError::AlreadyExists(destination_file.display().to_string()));
        }
        std::fs::remove_file(&destination_file).map_err(|source| PlatformError::Io {
            context: format!("removing '{}'", destination_file.display()),
            source,
        })?;
    }

    let total_size = response.content_length();
    let mut out_file = std::fs::File::create(&destination_file).map_err(|source| PlatformError::Io {
        context: format!("creating '{}'", destination_file.display()),
        source,
    })?;

    let mut downloaded: u64 = 0;
    let mut response = response;
    let mut buf = [0_u8; 1024 * 10];
    loop {
        let read = response.read(&mut buf).map_err(|source| PlatformError::Io {
            context: format!("reading '{url}'"),
            source,
        })?;
        if read == 0 {
            break;
        }
        out_file.write_all(&buf[..read]).map_err(|source| PlatformError::Io {
            context: format!("writing '{}'", destination_file.display()),
            source,
        })?;
        downloaded += read as u64;

        if let (Some(total), Some(progress)) = (total_size, &options.progress) {
            if total > 0 {
                let percentage = (downloaded as f64 / total as f64) * 100.0;
                progress(&format!("{percentage:.2}%"));
            }
        }
    }

    let destination_display = destination_file.display().to_string();
    if let Some(total) = total_size {
        if total > 0 && downloaded == 0 {
            return Ok(CommandResult::failed(destination_display, 1, "no bytes downloaded"));
        }
    }
    Ok(CommandResult::ok_with(destination_display.clone(), destination_display).with_extra_value(downloaded as i64))
}

impl Platform {
    /// Fetch `url`, either downloading it to `options.destination` or, when
    /// `url` points to a directory-style path, returning its file listing as
    /// `extra_data`.
    pub async fn url_get(&self, url: &str, options: UrlGetOptions) -> Result<CommandResult, PlatformError> {
        let url = url.trim().to_string();
        let proxy_server = options.proxy_server.clone().or_else(|| self.config.proxy_server.clone());
        let token = options.token.clone().or_else(|| self.config.git_token.clone());
        let resolved = UrlGetOptions {
            proxy_server,
            token,
            ..options
        };
        tokio::task::spawn_blocking(move || do_get(url, resolved))
            .await
            .map_err(|source| PlatformError::Internal(format!("url_get task panicked: {source}")))?
    }

    /// Extract a zip archive to `destination_path` (or alongside the archive
    /// when not given), deleting the archive afterward.
    pub async fn decompress(&self, archive_path: &str, destination_path: Option<&str>) -> Result<CommandResult, PlatformError> {
        let expanded_archive = self.expand_var(archive_path).map_err(|source| PlatformError::Vars {
            context: "expanding archive path".to_string(),
            source,
        })?;
        let expanded_destination = match destination_path {
            Some(path) => Some(self.expand_var(path).map_err(|source| PlatformError::Vars {
                context: "expanding destination path".to_string(),
                source,
            })?),
            None => None,
        };

        tokio::task::spawn_blocking(move || decompress_archive(&expanded_archive, expanded_destination.as_deref()))
            .await
            .map_err(|source| PlatformError::Internal(format!("decompress task panicked: {source}")))?
    }
}

fn decompress_archive(archive_path: &str, destination_path: Option<&str>) -> Result<CommandResult, PlatformError> {
    let archive = Path::new(archive_path);
    let destination = match destination_path {
        Some(path) => PathBuf::from(path),
        None => archive
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    path_create(&destination, false)?;

    let file = std::fs::File::open(archive).map_err(|source| PlatformError::Io {
        context: format!("opening '{archive_path}'"),
        source,
    })?;
    let mut zip_archive = zip::ZipArchive::new(file).map_err(|source| PlatformError::Zip {
        context: format!("reading '{archive_path}'"),
        source,
    })?;
    zip_archive.extract(&destination).map_err(|source| PlatformError::Zip {
        context: format!("extracting '{archive_path}'"),
        source,
    })?;

    std::fs::remove_file(archive).map_err(|source| PlatformError::Io {
        context: format!("removing '{archive_path}'"),
        source,
    })?;

    Ok(CommandResult::ok_with("decompress", destination.display().to_string()))
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
