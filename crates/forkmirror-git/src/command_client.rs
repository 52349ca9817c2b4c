// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, trace, warn};

use crate::client::{GitClient, GitIdentity};
use crate::error::GitError;

/// Git client implementation using the git CLI.
#[derive(Clone, Debug, Default)]
pub struct CommandGitClient {
	identity: GitIdentity,
}

impl CommandGitClient {
	pub fn new() -> Self {
		Self::default()
	}

	/// Runs git and returns trimmed stdout on success.
	///
	/// `repo` becomes `git -C <repo>`; `None` runs against no repository
	/// (used by clone). Only the subcommand is logged since the remaining
	/// arguments may hold authenticated URLs.
	async fn run_git(&self, repo: Option<&Path>, args: &[&str]) -> Result<String, GitError> {
		let subcommand = args.first().copied().unwrap_or_default();

		let mut cmd = Command::new("git");
		if let Some(repo) = repo {
			cmd.arg("-C").arg(repo);
		}
		cmd.args(args)
			.env("GIT_TERMINAL_PROMPT", "0")
			.env("GIT_AUTHOR_NAME", &self.identity.name)
			.env("GIT_AUTHOR_EMAIL", &self.identity.email)
			.env("GIT_COMMITTER_NAME", &self.identity.name)
			.env("GIT_COMMITTER_EMAIL", &self.identity.email)
			.kill_on_drop(true);

		trace!(
			subcommand,
			repo = ?repo.map(Path::display),
			"running git command"
		);

		let output = cmd.output().await.map_err(|e| {
			if e.kind() == std::io::ErrorKind::NotFound {
				warn!("git not found in PATH");
				GitError::GitNotInstalled
			} else {
				GitError::Io(e)
			}
		})?;

		if output.status.success() {
			Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
		} else {
			let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
			Err(GitError::command_failed(subcommand, stderr))
		}
	}
}

#[async_trait]
impl GitClient for CommandGitClient {
	async fn clone_repo(&self, url: &str, target: &Path) -> Result<(), GitError> {
		let target_str = target.to_string_lossy();
		// Bare: every remote branch lands in refs/heads so `push --all`
		// carries all of them, not just the default branch.
		self.run_git(None, &["clone", "--bare", "--quiet", url, &target_str])
			.await?;
		debug!(target = %target.display(), "cloned repository");
		Ok(())
	}

	async fn add_remote(&self, repo: &Path, name: &str, url: &str) -> Result<(), GitError> {
		self.run_git(Some(repo), &["remote", "add", name, url]).await?;
		debug!(repo = %repo.display(), remote = name, "added remote");
		Ok(())
	}

	async fn list_remotes(&self, repo: &Path) -> Result<String, GitError> {
		self.run_git(Some(repo), &["remote", "-v"]).await
	}

	async fn push_all_branches(&self, repo: &Path, remote: &str) -> Result<(), GitError> {
		self.run_git(Some(repo), &["push", remote, "--all"]).await?;
		debug!(repo = %repo.display(), remote, "pushed all branches");
		Ok(())
	}

	async fn push_tags(&self, repo: &Path, remote: &str) -> Result<(), GitError> {
		self.run_git(Some(repo), &["push", remote, "--tags"]).await?;
		debug!(repo = %repo.display(), remote, "pushed tags");
		Ok(())
	}
}
