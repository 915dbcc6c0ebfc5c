// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The fixed, string-keyed operation registry a step's `method` is dispatched
//! through. Grounded on the original's `execute_python_method`, replacing
//! reflection with an explicit match per spec.md §9's design note.

use crate::error::SequenceError;
use af_core::{CommandResult, Distro};
use af_platform::{resolve_per_distro, LineSink, Platform, UrlGetOptions, ValidationMethod};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

fn str_arg(arguments: &Value, key: &str) -> Result<String, SequenceError> {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| SequenceError::Schema(format!("missing required argument '{key}'")))
}

fn str_arg_opt(arguments: &Value, key: &str) -> Option<String> {
    arguments.get(key).and_then(Value::as_str).map(str::to_string)
}

fn bool_arg(arguments: &Value, key: &str, default: bool) -> bool {
    arguments.get(key).and_then(Value::as_bool).unwrap_or(default)
}

fn duration_arg(arguments: &Value, key: &str) -> Option<Duration> {
    arguments
        .get(key)
        .and_then(Value::as_f64)
        .filter(|secs| *secs > 0.0)
        .map(Duration::from_secs_f64)
}

/// Dispatch a step's `method` to the matching Platform Services operation.
/// `sink` forwards captured subprocess output lines to the Progress Tracker.
pub async fn dispatch(
    platform: &Platform,
    method: &str,
    arguments: &Value,
    sink: Option<Arc<dyn LineSink>>,
) -> Result<CommandResult, SequenceError> {
    match method {
        "initialize_workspace" => {
            let path = platform.initialize_workspace(
                bool_arg(arguments, "delete_existing", false),
                bool_arg(arguments, "must_be_empty", false),
                bool_arg(arguments, "create_as_needed", false),
                bool_arg(arguments, "change_dir", false),
            )?;
            Ok(CommandResult::ok_with("initialize_workspace", path.display().to_string()))
        }
        "path_erase" => {
            let path = str_arg(arguments, "path")?;
            let allow_non_empty = bool_arg(arguments, "allow_non_empty", false);
            let raise_if_missing = bool_arg(arguments, "raise_if_missing", false);
            let expanded = {
                #[allow(clippy::unwrap_used)]
                platform.variables().read().unwrap().expand(&path)
            }
            .map_err(|source| af_platform::PlatformError::Vars {
                context: "expanding path".to_string(),
                source,
            })?;
            af_platform::path_erase(&path, std::path::Path::new(&expanded), allow_non_empty, raise_if_missing)?;
            Ok(CommandResult::ok("path_erase"))
        }
        "path_create" => {
            let path = str_arg(arguments, "path")?;
            let erase_if_exist = bool_arg(arguments, "erase_if_exist", false);
            let expanded = {
                #[allow(clippy::unwrap_used)]
                platform.variables().read().unwrap().expand(&path)
            }
            .map_err(|source| af_platform::PlatformError::Vars {
                context: "expanding path".to_string(),
                source,
            })?;
            let created = af_platform::path_create(std::path::Path::new(&expanded), erase_if_exist)?;
            Ok(CommandResult::ok_with("path_create", created.display().to_string()))
        }
        "decompress" => {
            let archive = str_arg(arguments, "archive")?;
            let destination = str_arg_opt(arguments, "destination");
            platform.decompress(&archive, destination.as_deref()).await.map_err(Into::into)
        }
        "url_get" => {
            let url = str_arg(arguments, "url")?;
            let options = UrlGetOptions {
                destination: str_arg_opt(arguments, "destination"),
                delete_if_exist: bool_arg(arguments, "delete_if_exist", false),
                proxy_server: str_arg_opt(arguments, "proxy"),
                token: str_arg_opt(arguments, "token"),
                timeout: duration_arg(arguments, "timeout"),
                extra_headers: Default::default(),
                progress: None,
            };
            platform.url_get(&url, options).await.map_err(Into::into)
        }
        "git_clone_repo" => {
            let url = str_arg(arguments, "url")?;
            let dest = str_arg(arguments, "dest")?;
            platform
                .git_clone_repo(&url, &dest, duration_arg(arguments, "timeout"), bool_arg(arguments, "clear", true))
                .await
                .map_err(Into::into)
        }
        "git_checkout_revision" => {
            let dest = str_arg(arguments, "dest")?;
            let revision = str_arg(arguments, "rev")?;
            platform
                .git_checkout_revision(
                    &dest,
                    &revision,
                    duration_arg(arguments, "timeout"),
                    bool_arg(arguments, "pull_latest", true),
                )
                .await
                .map_err(Into::into)
        }
        "git_get_path_from_url" => {
            let url = str_arg(arguments, "url")?;
            let destination_file_name = str_arg_opt(arguments, "destination_file_name");
            let allowed_extensions: Option<Vec<String>> = arguments
                .get("allowed_extensions")
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(|v| v.as_str().map(str::to_string)).collect());
            let path = platform
                .git_get_path_from_url(
                    &url,
                    destination_file_name.as_deref(),
                    allowed_extensions.as_deref(),
                    bool_arg(arguments, "delete_if_exist", false),
                )
                .await?;
            Ok(CommandResult::ok_with("git_get_path_from_url", path))
        }
        "python_virtualenv_create" => {
            let venv_path = str_arg(arguments, "venv_path")?;
            platform.python_virtualenv_create(&venv_path).await.map_err(Into::into)
        }
        "python_update_pip" => platform
            .python_update_pip(str_arg_opt(arguments, "venv_path").as_deref())
            .await
            .map_err(Into::into),
        "python_package_add" => {
            let package = str_arg(arguments, "package")?;
            platform
                .python_package_add(&package, str_arg_opt(arguments, "venv_path").as_deref())
                .await
                .map_err(Into::into)
        }
        "python_package_uninstall" => {
            let package = str_arg(arguments, "package")?;
            platform
                .python_package_uninstall(&package, str_arg_opt(arguments, "venv_path").as_deref())
                .await
                .map_err(Into::into)
        }
        "python_package_get_version" => {
            let package = str_arg(arguments, "package")?;
            let version = platform
                .python_package_get_version(&package, str_arg_opt(arguments, "venv_path").as_deref())
                .await?;
            Ok(CommandResult::ok_with("python_package_get_version", version))
        }
        "environment_variable_set" => {
            let name = str_arg(arguments, "name")?;
            let value = str_arg(arguments, "value")?;
            af_platform::variable_set(&name, &value, bool_arg(arguments, "allow_overwrite", true))?;
            Ok(CommandResult::ok("environment_variable_set"))
        }
        "environment_variable_expect" => {
            let name = str_arg(arguments, "name")?;
            let token = str_arg(arguments, "token")?;
            af_platform::variable_expect(&name, &token, bool_arg(arguments, "case_sensitive", false))?;
            Ok(CommandResult::ok("environment_variable_expect"))
        }
        "environment_variable_expand" => {
            let text = str_arg(arguments, "text")?;
            let expanded = af_platform::variable_expand(&text, bool_arg(arguments, "to_absolute_path", false))?;
            Ok(CommandResult::ok_with("environment_variable_expand", expanded))
        }
        "environment_append_to_path" => {
            let path = str_arg(arguments, "path")?;
            af_platform::append_to_path(&path);
            Ok(CommandResult::ok("environment_append_to_path"))
        }
        "create_alias" => {
            let alias = str_arg(arguments, "alias")?;
            let command = str_arg(arguments, "command")?;
            platform
                .create_alias(&alias, &command, bool_arg(arguments, "commit_changes", false))
                .map_err(Into::into)
        }
        "validate_prerequisite" => {
            let distro_key = Distro::detect().as_key();
            let resolved = resolve_per_distro(arguments, distro_key);
            let validation_method = match str_arg(&resolved, "method")?.as_str() {
                "execute_process" => ValidationMethod::ExecuteProcess,
                "read_file" => ValidationMethod::ReadFile,
                "sys_package" => ValidationMethod::SysPackage,
                other => return Err(SequenceError::Schema(format!("unknown validation method '{other}'"))),
            };
            let command = str_arg(&resolved, "command")?;
            let cwd = str_arg_opt(&resolved, "cwd").map(PathBuf::from);
            platform
                .validate_prerequisite(
                    validation_method,
                    &command,
                    str_arg_opt(&resolved, "arguments").as_deref(),
                    cwd,
                    str_arg_opt(&resolved, "expected_response").as_deref(),
                    str_arg_opt(&resolved, "version").as_deref(),
                )
                .await
                .map_err(Into::into)
        }
        "execute_cli_command" | "execute_shell_command" => {
            let command_and_args = str_arg(arguments, "command_and_args")?;
            let cwd = str_arg_opt(arguments, "cwd").map(PathBuf::from);
            let result = platform
                .execute_shell_command_with_sink(&command_and_args, cwd, duration_arg(arguments, "timeout"), sink)
                .await?;
            if let Some(expected) = arguments.get("expected_return_code").and_then(Value::as_i64) {
                if result.return_code as i64 != expected {
                    return Err(af_platform::PlatformError::Internal(format!(
                        "expected return code {expected}, got {}",
                        result.return_code
                    ))
                    .into());
                }
            }
            Ok(result)
        }
        "finalize_workspace_creation" => {
            let solution_package_path = str_arg(arguments, "solution_package_path")?;
            let solution_name = str_arg(arguments, "solution_name")?;
            let env_starter_file = PathBuf::from(str_arg(arguments, "env_starter_file")?);
            let sequence_log_file = str_arg_opt(arguments, "sequence_log_file").map(PathBuf::from);
            platform.finalize_workspace_creation(
                &solution_package_path,
                &solution_name,
                &env_starter_file,
                sequence_log_file.as_deref(),
            )?;
            Ok(CommandResult::ok("finalize_workspace_creation"))
        }
        other => Err(SequenceError::UnknownMethod(other.to_string())),
    }
}
