// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The sequence document schema, grounded on spec.md §6's "Sequence
//! document" and the original's loose dict-shaped sequence JSON.

use crate::error::SequenceError;
use crate::jsonc::strip_jsonc_comments;
use serde::Deserialize;
use serde_json::Value;

/// What to do when a step's operation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOnError {
    #[default]
    Default,
    Break,
    Resume,
}

impl ActionOnError {
    pub fn aborts(self) -> bool {
        !matches!(self, ActionOnError::Resume)
    }
}

/// `status_on_error` is either a single string or a distro-keyed mapping
/// with a `default` fallback, per spec.md §9's Open Question decision.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StatusOnError {
    Flat(String),
    PerDistro(serde_json::Map<String, Value>),
}

impl StatusOnError {
    pub fn resolve(&self, distro_key: &str) -> Option<String> {
        match self {
            StatusOnError::Flat(text) => Some(text.clone()),
            StatusOnError::PerDistro(map) => map
                .get(distro_key)
                .or_else(|| map.get("default"))
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// The embedded `condition`/`if_true`/`if_false` shape of a `conditional`
/// step's arguments.
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionalArguments {
    pub condition: Step,
    #[serde(default)]
    pub if_true: Vec<Step>,
    #[serde(default)]
    pub if_false: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub description: Option<String>,
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
    #[serde(default)]
    pub response_store_key: Option<String>,
    #[serde(default)]
    pub action_on_error: ActionOnError,
    #[serde(default)]
    pub status_new_line: Option<bool>,
    #[serde(default)]
    pub status_on_error: Option<StatusOnError>,
    #[serde(default)]
    pub disabled: bool,
}

impl Step {
    pub fn display_description(&self) -> String {
        self.description.clone().unwrap_or_default()
    }

    /// Parse this step's `arguments` as the embedded conditional shape; only
    /// valid when `method == "conditional"`.
    pub fn as_conditional(&self) -> Result<ConditionalArguments, SequenceError> {
        serde_json::from_value(self.arguments.clone())
            .map_err(|err| SequenceError::Schema(format!("invalid 'conditional' step arguments: {err}")))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SequenceDocument {
    #[serde(default = "default_title_length")]
    pub status_title_length: usize,
    #[serde(default = "default_true")]
    pub status_add_time_prefix: bool,
    #[serde(default)]
    pub status_new_line: bool,
    #[serde(default)]
    pub status_pre_message: Option<String>,
    #[serde(default)]
    pub status_post_message: Option<String>,
    pub steps: Vec<Step>,
}

fn default_title_length() -> usize {
    80
}

fn default_true() -> bool {
    true
}

/// Parse a sequence document from JSON-with-comments text.
pub fn parse(text: &str) -> Result<SequenceDocument, SequenceError> {
    let stripped = strip_jsonc_comments(text);
    let document: SequenceDocument =
        serde_json::from_str(&stripped).map_err(|err| SequenceError::Schema(format!("malformed sequence document: {err}")))?;
    if document.steps.is_empty() {
        return Err(SequenceError::Schema(
            "expected a non-empty ordered list of steps".to_string(),
        ));
    }
    Ok(document)
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
