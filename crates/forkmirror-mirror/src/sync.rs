// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::{Path, PathBuf};
use std::time::Duration;

use forkmirror_common_http::{retry, RetryConfig};
use forkmirror_common_secret::SecretString;
use forkmirror_core::QualifiedRepo;
use forkmirror_git::{GitClient, GitError};
use tempfile::TempDir;
use tracing::{debug, info, instrument, warn};

use crate::error::{MirrorError, Result};
use crate::url::{build_authenticated_url, repo_url, DEFAULT_SERVER_URL};

/// Name of the remote the mirror is pushed through.
pub const MIRROR_REMOTE: &str = "privatemirror";

const CLONE_ATTEMPTS: u32 = 5;
const CLONE_RETRY_DELAY: Duration = Duration::from_secs(3);

/// One fork-to-mirror copy.
#[derive(Debug, Clone)]
pub struct SyncJob {
	pub fork: QualifiedRepo,
	pub mirror: QualifiedRepo,
	pub credential: SecretString,
	/// Git server both repositories live on, e.g. `https://github.com`.
	pub server_url: String,
}

impl SyncJob {
	pub fn new(fork: QualifiedRepo, mirror: QualifiedRepo, credential: SecretString) -> Self {
		Self {
			fork,
			mirror,
			credential,
			server_url: DEFAULT_SERVER_URL.to_string(),
		}
	}

	pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
		self.server_url = server_url.into();
		self
	}
}

#[derive(Debug, Clone)]
pub struct SyncOptions {
	/// Retry policy for the initial clone. Pushes are never retried.
	pub clone_retry: RetryConfig,
	pub remote_name: String,
	/// Parent directory for the per-run working directory; the system
	/// temporary directory when unset.
	pub work_root: Option<PathBuf>,
}

impl Default for SyncOptions {
	fn default() -> Self {
		Self {
			clone_retry: RetryConfig::fixed(CLONE_ATTEMPTS, CLONE_RETRY_DELAY),
			remote_name: MIRROR_REMOTE.to_string(),
			work_root: None,
		}
	}
}

/// Copy every branch and tag of `job.fork` into `job.mirror`.
///
/// Works in a fresh temporary directory that is removed afterwards whether or
/// not the copy succeeded. Every failure surfaces as
/// [`MirrorError::SyncFailed`] with the credential scrubbed out.
#[instrument(skip(git, job, options), fields(fork = %job.fork, mirror = %job.mirror))]
pub async fn sync_fork_to_mirror(
	git: &impl GitClient,
	job: &SyncJob,
	options: &SyncOptions,
) -> Result<()> {
	let credential = &job.credential;
	let fork_url = build_authenticated_url(&repo_url(&job.server_url, &job.fork), credential)?;
	let mirror_url = build_authenticated_url(&repo_url(&job.server_url, &job.mirror), credential)?;

	let workdir = create_workdir(options.work_root.as_deref())
		.map_err(|e| MirrorError::sync_failed(format!("failed to create working directory: {e}"), credential))?;
	debug!(workdir = %workdir.path().display(), "created working directory");

	let result = run_sync(git, &fork_url, &mirror_url, workdir.path(), credential, options).await;

	let workdir_path = workdir.path().to_path_buf();
	if let Err(e) = workdir.close() {
		warn!(workdir = %workdir_path.display(), error = %e, "failed to remove working directory");
	}

	match &result {
		Ok(()) => info!("fork synced to mirror"),
		Err(e) => warn!(error = %e, "sync failed"),
	}
	result
}

fn create_workdir(root: Option<&Path>) -> std::io::Result<TempDir> {
	let mut builder = tempfile::Builder::new();
	builder.prefix("forkmirror-");
	match root {
		Some(root) => builder.tempdir_in(root),
		None => builder.tempdir(),
	}
}

async fn run_sync(
	git: &impl GitClient,
	fork_url: &str,
	mirror_url: &str,
	workdir: &Path,
	credential: &SecretString,
	options: &SyncOptions,
) -> Result<()> {
	let repo = workdir.join("repo.git");
	let wrap = |e: GitError| MirrorError::sync_failed(e, credential);

	clone_with_retry(git, fork_url, &repo, credential, &options.clone_retry)
		.await
		.map_err(wrap)?;

	let remote = options.remote_name.as_str();
	git
		.add_remote(&repo, remote, mirror_url)
		.await
		.map_err(wrap)?;

	match git.list_remotes(&repo).await {
		Ok(remotes) => debug!(remotes = %credential.scrub(&remotes), "configured remotes"),
		Err(e) => debug!(error = %credential.scrub(&e.to_string()), "could not list remotes"),
	}

	git
		.push_all_branches(&repo, remote)
		.await
		.map_err(wrap)?;
	git.push_tags(&repo, remote).await.map_err(wrap)?;

	Ok(())
}

/// Clone `url` into `target`, clearing whatever a failed attempt left behind
/// before trying again.
async fn clone_with_retry(
	git: &impl GitClient,
	url: &str,
	target: &Path,
	credential: &SecretString,
	config: &RetryConfig,
) -> std::result::Result<(), GitError> {
	retry(config, || async move {
		if tokio::fs::try_exists(target).await? {
			tokio::fs::remove_dir_all(target).await?;
		}
		git
			.clone_repo(url, target)
			.await
			.map_err(|e| scrub_git_error(e, credential))
	})
	.await
}

/// Git echoes remote URLs in its error output.
fn scrub_git_error(err: GitError, credential: &SecretString) -> GitError {
	match err {
		GitError::CommandFailed { subcommand, stderr } => GitError::CommandFailed {
			subcommand,
			stderr: credential.scrub(&stderr),
		},
		other => other,
	}
}
