// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Sequence Runner: parses a JSONC sequence document and drives its
//! steps through a fixed operation registry against a [`af_platform::Platform`].
//!
//! Grounded on the original `auto_forge.core.sequencer`: the document schema
//! is kept, reflection-based method dispatch is replaced by an explicit
//! registry (see [`registry::dispatch`]).

mod document;
mod error;
mod jsonc;
mod registry;
mod runner;

pub use document::{parse, ActionOnError, ConditionalArguments, SequenceDocument, StatusOnError, Step};
pub use error::SequenceError;
pub use jsonc::strip_jsonc_comments;
pub use runner::{RunSummary, SequenceRunner};
