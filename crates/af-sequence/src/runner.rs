// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Sequence Runner: walks a [`SequenceDocument`]'s steps, dispatching
//! each through the operation registry while driving a Progress Tracker.
//!
//! Grounded on the original `SequenceRunner.run_sequence`: the skip-disabled,
//! expand-then-dispatch, resolve-`status_on_error`-by-distro, and
//! `action_on_error` continuation policy are kept, with reflection replaced
//! by [`crate::registry::dispatch`].

use crate::document::{SequenceDocument, Step};
use crate::error::SequenceError;
use crate::registry;
use af_core::{CommandResult, Distro};
use af_platform::{LineSink, Platform};
use af_progress::ProgressTracker;
use af_vars::VariableStore;
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

/// Forwards subprocess output lines captured by the Subprocess Supervisor
/// into the Progress Tracker's in-place body, throttled by the tracker
/// itself.
struct TrackerSink(Arc<Mutex<ProgressTracker>>);

impl LineSink for TrackerSink {
    fn on_line(&self, line: &str) {
        #[allow(clippy::unwrap_used)]
        self.0.lock().unwrap().set_body_in_place(line, None, true);
    }
}

/// Summary returned once every step has run (or the sequence aborted).
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub steps_run: usize,
    pub warnings: usize,
    pub elapsed: Duration,
}

/// Drives one sequence document against a [`Platform`], updating the shared
/// Variable Store with `response_store_key` results as steps complete.
pub struct SequenceRunner {
    platform: Platform,
    variables: Arc<RwLock<VariableStore>>,
    tracker: Arc<Mutex<ProgressTracker>>,
}

impl SequenceRunner {
    pub fn new(platform: Platform, tracker: ProgressTracker) -> Self {
        let variables = platform.variables();
        SequenceRunner {
            platform,
            variables,
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Run every non-disabled step in `document`, in order. Returns on the
    /// first step whose `action_on_error` resolves to an abort.
    pub async fn run(&mut self, document: &SequenceDocument) -> Result<RunSummary, SequenceError> {
        let start = Instant::now();
        let mut warnings = 0usize;
        let mut steps_run = 0usize;

        if let Some(message) = &document.status_pre_message {
            tracing::info!("{message}");
        }

        let mut index = 0usize;
        while index < document.steps.len() {
            let step = &document.steps[index];
            if step.disabled {
                index += 1;
                continue;
            }
            warnings += self.execute_step(index, step, true).await?.1;
            steps_run += 1;
            index += 1;
        }

        if let Some(message) = &document.status_post_message {
            tracing::info!("{message}");
        }

        let elapsed = start.elapsed();
        tracing::info!(steps_run, warnings, elapsed_ms = elapsed.as_millis() as u64, "sequence completed");
        Ok(RunSummary {
            steps_run,
            warnings,
            elapsed,
        })
    }

    /// Run a single step, recursing into `conditional`'s branches. Returns
    /// the step's result and how many warnings it produced (0 or 1).
    async fn execute_step(&mut self, index: usize, step: &Step, announce: bool) -> Result<(CommandResult, usize), SequenceError> {
        if announce {
            let title = step.display_description();
            let title = if title.is_empty() { step.method.clone() } else { title };
            #[allow(clippy::unwrap_used)]
            self.tracker.lock().unwrap().set_pre(&title, step.status_new_line);
        }

        if step.method == "conditional" {
            return self.execute_conditional(index, step, announce).await;
        }

        match self.dispatch(step).await {
            Ok(result) => {
                if let Some(key) = &step.response_store_key {
                    if let Some(text) = &result.response {
                        #[allow(clippy::unwrap_used)]
                        self.variables.write().unwrap().set(key, text);
                    }
                }
                if announce {
                    #[allow(clippy::unwrap_used)]
                    self.tracker.lock().unwrap().set_result("OK", Some(0));
                }
                Ok((result, 0))
            }
            Err(err) => {
                let distro_key = Distro::detect().as_key();
                let status_message = step.status_on_error.as_ref().and_then(|s| s.resolve(distro_key));

                if announce {
                    let label = status_message.as_deref().unwrap_or("ERROR");
                    #[allow(clippy::unwrap_used)]
                    self.tracker.lock().unwrap().set_result(label, Some(1));
                }

                let result = err.result().cloned();
                let seq_err = SequenceError::StepFailed {
                    step: index,
                    description: step.display_description(),
                    source: err.into(),
                };

                if step.action_on_error.aborts() {
                    Err(seq_err)
                } else {
                    tracing::warn!(step = index, "{seq_err} (resuming: action_on_error = resume)");
                    Ok((
                        result.unwrap_or_else(|| CommandResult::failed(step.method.clone(), 1, seq_err.to_string())),
                        1,
                    ))
                }
            }
        }
    }

    async fn execute_conditional(&mut self, index: usize, step: &Step, announce: bool) -> Result<(CommandResult, usize), SequenceError> {
        let conditional = step.as_conditional()?;
        // Evaluated quietly: the condition's own dispatch emits no tracker line of
        // its own, only the conditional step's pre-announced line resolves below.
        let condition_passed = matches!(self.dispatch(&conditional.condition).await, Ok(result) if result.is_success());

        if announce {
            let (label, status_code) = if condition_passed { ("OK", 0) } else { ("NO", 1) };
            #[allow(clippy::unwrap_used)]
            self.tracker.lock().unwrap().set_result(label, Some(status_code));
        }

        let branch = if condition_passed { &conditional.if_true } else { &conditional.if_false };
        let mut last = CommandResult::ok("conditional");
        let mut warnings = 0usize;
        for (offset, inner_step) in branch.iter().enumerate() {
            if inner_step.disabled {
                continue;
            }
            let (result, step_warnings) = self.execute_step(index + offset + 1, inner_step, true).await?;
            last = result;
            warnings += step_warnings;
        }
        Ok((last, warnings))
    }

    async fn dispatch(&self, step: &Step) -> Result<CommandResult, SequenceError> {
        let expanded_arguments = {
            #[allow(clippy::unwrap_used)]
            self.variables.read().unwrap().expand_any(&step.arguments)
        }
        .map_err(|source| {
            SequenceError::Platform(af_platform::PlatformError::Vars {
                context: "expanding step arguments".to_string(),
                source,
            })
        })?;

        let sink: Option<Arc<dyn LineSink>> = Some(Arc::new(TrackerSink(Arc::clone(&self.tracker))));
        registry::dispatch(&self.platform, &step.method, &expanded_arguments, sink).await
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
