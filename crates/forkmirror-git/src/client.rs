// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;

use async_trait::async_trait;

use crate::error::GitError;

/// Name and email git records for anything it writes during a run.
///
/// Applied through `GIT_AUTHOR_*` / `GIT_COMMITTER_*` on each invocation, so
/// no git config file is touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GitIdentity {
	pub name: String,
	pub email: String,
}

impl Default for GitIdentity {
	fn default() -> Self {
		Self {
			name: "github-actions[bot]".to_string(),
			email: "41898282+github-actions[bot]@users.noreply.github.com".to_string(),
		}
	}
}

/// Trait abstracting git operations for testability.
///
/// Every operation after `clone` takes the repository directory explicitly;
/// implementations must never depend on the process working directory.
#[async_trait]
pub trait GitClient: Send + Sync {
	/// Clone `url` into `target`, which must not exist yet.
	async fn clone_repo(&self, url: &str, target: &Path) -> Result<(), GitError>;

	/// Register `url` as remote `name` in the repository at `repo`.
	async fn add_remote(&self, repo: &Path, name: &str, url: &str) -> Result<(), GitError>;

	/// Output of `git remote -v`.
	async fn list_remotes(&self, repo: &Path) -> Result<String, GitError>;

	/// Push every local branch to `remote`.
	async fn push_all_branches(&self, repo: &Path, remote: &str) -> Result<(), GitError>;

	/// Push every tag to `remote`.
	async fn push_tags(&self, repo: &Path, remote: &str) -> Result<(), GitError>;
}
