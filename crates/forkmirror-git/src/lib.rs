// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The handful of git operations forkmirror needs, behind a trait so the
//! synchronizer can be exercised without a network.

mod client;
mod command_client;
mod error;
mod mock_client;

pub use client::{GitClient, GitIdentity};
pub use command_client::CommandGitClient;
pub use error::GitError;
pub use mock_client::{MockCall, MockGitClient};
