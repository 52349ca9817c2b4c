// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::fmt;

use async_trait::async_trait;
use forkmirror_common_secret::SecretString;
use forkmirror_core::{
	validate_bare_name, validate_qualified_reference, QualifiedRepo, ReferenceError, RepoName,
};
use thiserror::Error;

use crate::error::GithubError;

/// The remote repository operation that was being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOperation {
	CreateFork,
	CreateRepository,
	AddAdmin,
}

impl fmt::Display for RemoteOperation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			RemoteOperation::CreateFork => "create fork",
			RemoteOperation::CreateRepository => "create repository",
			RemoteOperation::AddAdmin => "add admin",
		};
		f.write_str(s)
	}
}

#[derive(Debug, Error)]
pub enum RepoClientError {
	#[error(transparent)]
	InvalidFormat(#[from] ReferenceError),

	#[error("Failed to {operation}: {source}")]
	RemoteOperationFailed {
		operation: RemoteOperation,
		#[source]
		source: GithubError,
	},
}

impl RepoClientError {
	pub fn remote(operation: RemoteOperation, source: GithubError) -> Self {
		Self::RemoteOperationFailed { operation, source }
	}

	/// The operation that failed remotely, if the failure got that far.
	pub fn operation(&self) -> Option<RemoteOperation> {
		match self {
			Self::InvalidFormat(_) => None,
			Self::RemoteOperationFailed { operation, .. } => Some(*operation),
		}
	}
}

/// Repository-management operations against a GitHub-compatible host.
///
/// Implementors supply the three typed REST calls. The provided methods take
/// raw user input, validate it before anything leaves the process, and attach
/// the failed operation to remote errors.
#[async_trait]
pub trait RepoClient: Send + Sync {
	/// Fork `upstream` into `organization`, returning the fork's full name.
	async fn create_fork(
		&self,
		upstream: &QualifiedRepo,
		organization: &str,
		credential: &SecretString,
	) -> Result<QualifiedRepo, GithubError>;

	/// Create a private repository called `name` inside `organization`.
	async fn create_org_repo(
		&self,
		name: &RepoName,
		organization: &str,
		credential: &SecretString,
	) -> Result<QualifiedRepo, GithubError>;

	/// Grant `username` admin permission on `repo`.
	async fn add_collaborator(
		&self,
		repo: &QualifiedRepo,
		username: &str,
		credential: &SecretString,
	) -> Result<bool, GithubError>;

	async fn fork_publicly(
		&self,
		upstream: &str,
		organization: &str,
		credential: &SecretString,
	) -> Result<QualifiedRepo, RepoClientError> {
		let upstream = validate_qualified_reference(upstream)?;
		self
			.create_fork(&upstream, organization, credential)
			.await
			.map_err(|e| RepoClientError::remote(RemoteOperation::CreateFork, e))
	}

	async fn create_private_repo(
		&self,
		name: &str,
		organization: &str,
		credential: &SecretString,
	) -> Result<QualifiedRepo, RepoClientError> {
		let name = validate_bare_name(name)?;
		self
			.create_org_repo(&name, organization, credential)
			.await
			.map_err(|e| RepoClientError::remote(RemoteOperation::CreateRepository, e))
	}

	/// `repo` must be `owner/repo`. A grant the host did not confirm is an
	/// error, so `Ok` always carries `true`.
	async fn add_admin(
		&self,
		username: &str,
		repo: &str,
		credential: &SecretString,
	) -> Result<bool, RepoClientError> {
		let repo = validate_qualified_reference(repo)?;
		let added = self
			.add_collaborator(&repo, username, credential)
			.await
			.map_err(|e| RepoClientError::remote(RemoteOperation::AddAdmin, e))?;
		if !added {
			return Err(RepoClientError::remote(
				RemoteOperation::AddAdmin,
				GithubError::InvalidResponse(format!("{username} was not added to {repo}")),
			));
		}
		Ok(added)
	}
}
