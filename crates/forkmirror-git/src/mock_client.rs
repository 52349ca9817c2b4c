// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::GitClient;
use crate::error::GitError;

/// Recorded call to the mock git client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockCall {
	Clone { url: String, target: PathBuf },
	AddRemote { repo: PathBuf, name: String, url: String },
	ListRemotes { repo: PathBuf },
	PushAll { repo: PathBuf, remote: String },
	PushTags { repo: PathBuf, remote: String },
}

/// Mock git client for testing.
///
/// A successful clone creates the target directory; a failed clone leaves a
/// partially written one behind, like an interrupted `git clone` does. A clone
/// into an existing directory fails, again like git.
#[derive(Clone, Default)]
pub struct MockGitClient {
	/// Number of clone attempts that fail before one succeeds.
	pub clone_failures: u32,
	/// If set, add_remote returns this error.
	pub add_remote_error: Option<String>,
	/// If set, push_all_branches returns this error.
	pub push_all_error: Option<String>,
	/// If set, push_tags returns this error.
	pub push_tags_error: Option<String>,
	/// Track calls for verification.
	pub calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockGitClient {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_clone_failures(mut self, failures: u32) -> Self {
		self.clone_failures = failures;
		self
	}

	pub fn with_add_remote_error(mut self, error: impl Into<String>) -> Self {
		self.add_remote_error = Some(error.into());
		self
	}

	pub fn with_push_all_error(mut self, error: impl Into<String>) -> Self {
		self.push_all_error = Some(error.into());
		self
	}

	pub fn with_push_tags_error(mut self, error: impl Into<String>) -> Self {
		self.push_tags_error = Some(error.into());
		self
	}

	pub fn get_calls(&self) -> Vec<MockCall> {
		self.calls.lock().unwrap().clone()
	}

	pub fn clone_attempts(&self) -> usize {
		self
			.get_calls()
			.iter()
			.filter(|c| matches!(c, MockCall::Clone { .. }))
			.count()
	}

	fn record(&self, call: MockCall) {
		self.calls.lock().unwrap().push(call);
	}
}

#[async_trait]
impl GitClient for MockGitClient {
	async fn clone_repo(&self, url: &str, target: &Path) -> Result<(), GitError> {
		self.record(MockCall::Clone {
			url: url.to_string(),
			target: target.to_path_buf(),
		});

		if target.exists() {
			return Err(GitError::command_failed(
				"clone",
				format!(
					"fatal: destination path '{}' already exists and is not an empty directory.",
					target.display()
				),
			));
		}

		std::fs::create_dir_all(target)?;

		if self.clone_attempts() as u32 <= self.clone_failures {
			std::fs::write(target.join("packed-refs.lock"), "")?;
			return Err(GitError::command_failed(
				"clone",
				format!("fatal: unable to access '{url}': Could not resolve host"),
			));
		}

		Ok(())
	}

	async fn add_remote(&self, repo: &Path, name: &str, url: &str) -> Result<(), GitError> {
		self.record(MockCall::AddRemote {
			repo: repo.to_path_buf(),
			name: name.to_string(),
			url: url.to_string(),
		});
		match &self.add_remote_error {
			Some(err) => Err(GitError::command_failed("remote", err.clone())),
			None => Ok(()),
		}
	}

	async fn list_remotes(&self, repo: &Path) -> Result<String, GitError> {
		self.record(MockCall::ListRemotes {
			repo: repo.to_path_buf(),
		});
		let remotes = self
			.get_calls()
			.iter()
			.filter_map(|c| match c {
				MockCall::AddRemote { name, url, .. } => {
					Some(format!("{name}\t{url} (fetch)\n{name}\t{url} (push)"))
				}
				_ => None,
			})
			.collect::<Vec<_>>()
			.join("\n");
		Ok(remotes)
	}

	async fn push_all_branches(&self, repo: &Path, remote: &str) -> Result<(), GitError> {
		self.record(MockCall::PushAll {
			repo: repo.to_path_buf(),
			remote: remote.to_string(),
		});
		match &self.push_all_error {
			Some(err) => Err(GitError::command_failed("push", err.clone())),
			None => Ok(()),
		}
	}

	async fn push_tags(&self, repo: &Path, remote: &str) -> Result<(), GitError> {
		self.record(MockCall::PushTags {
			repo: repo.to_path_buf(),
			remote: remote.to_string(),
		});
		match &self.push_tags_error {
			Some(err) => Err(GitError::command_failed("push", err.clone())),
			None => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	#[tokio::test]
	async fn test_clone_failures_then_success() {
		let temp = TempDir::new().unwrap();
		let target = temp.path().join("repo");
		let client = MockGitClient::new().with_clone_failures(1);

		assert!(client.clone_repo("https://example/a.git", &target).await.is_err());
		assert!(target.exists(), "failed clone leaves debris behind");

		let err = client
			.clone_repo("https://example/a.git", &target)
			.await
			.unwrap_err();
		assert!(err.to_string().contains("already exists"));

		std::fs::remove_dir_all(&target).unwrap();
		client.clone_repo("https://example/a.git", &target).await.unwrap();
		assert_eq!(client.clone_attempts(), 3);
	}

	#[tokio::test]
	async fn test_list_remotes_reflects_added_remotes() {
		let client = MockGitClient::new();
		let repo = Path::new("/work/repo");
		client.add_remote(repo, "privatemirror", "https://example/m.git").await.unwrap();

		let remotes = client.list_remotes(repo).await.unwrap();
		assert!(remotes.contains("privatemirror\thttps://example/m.git (push)"));
	}

	#[tokio::test]
	async fn test_configured_push_error() {
		let client = MockGitClient::new().with_push_tags_error("rejected");
		let repo = Path::new("/work/repo");

		assert!(client.push_all_branches(repo, "origin").await.is_ok());
		let err = client.push_tags(repo, "origin").await.unwrap_err();
		assert_eq!(err.to_string(), "git push failed: rejected");
	}
}
