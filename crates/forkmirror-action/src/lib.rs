// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! forkmirror: fork a repository into an organization, copy it into a new
//! private repository there, and make the triggering user its admin.

pub mod error;
pub mod inputs;
pub mod logging;
pub mod orchestrator;
pub mod workflow;

pub use error::RunError;
pub use inputs::{ActionInputs, RawInputs};
pub use orchestrator::{Orchestrator, RunOutcome, Stage};
pub use workflow::{escape_data, report, Workflow};
