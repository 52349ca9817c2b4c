// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use forkmirror_common_secret::SecretString;
use forkmirror_core::{validate_qualified_reference, QualifiedRepo, RepoName};

use crate::error::GithubError;
use crate::repo_client::RepoClient;

/// Recorded call to the mock repository client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockRepoCall {
	CreateFork {
		upstream: String,
		organization: String,
	},
	CreateOrgRepo {
		name: String,
		organization: String,
	},
	AddCollaborator {
		repo: String,
		username: String,
	},
}

/// Mock repository client for testing.
///
/// By default a fork of `owner/repo` lands at `organization/repo` and a new
/// repository at `organization/name`, like GitHub does.
#[derive(Clone, Default)]
pub struct MockRepoClient {
	/// If set, create_fork fails with an API error carrying this message.
	pub fork_error: Option<String>,
	/// If set, create_fork returns this instead of the derived name.
	pub fork_result: Option<String>,
	/// If set, create_org_repo fails with an API error carrying this message.
	pub create_repo_error: Option<String>,
	/// If set, add_collaborator fails with an API error carrying this message.
	pub add_collaborator_error: Option<String>,
	/// If set, add_collaborator succeeds without confirming the grant.
	pub add_collaborator_unconfirmed: bool,
	/// Track calls for verification.
	pub calls: Arc<Mutex<Vec<MockRepoCall>>>,
}

impl MockRepoClient {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_fork_error(mut self, error: impl Into<String>) -> Self {
		self.fork_error = Some(error.into());
		self
	}

	pub fn with_fork_result(mut self, full_name: impl Into<String>) -> Self {
		self.fork_result = Some(full_name.into());
		self
	}

	pub fn with_create_repo_error(mut self, error: impl Into<String>) -> Self {
		self.create_repo_error = Some(error.into());
		self
	}

	pub fn with_add_collaborator_error(mut self, error: impl Into<String>) -> Self {
		self.add_collaborator_error = Some(error.into());
		self
	}

	pub fn with_add_collaborator_unconfirmed(mut self) -> Self {
		self.add_collaborator_unconfirmed = true;
		self
	}

	pub fn get_calls(&self) -> Vec<MockRepoCall> {
		self.calls.lock().unwrap().clone()
	}

	fn record(&self, call: MockRepoCall) {
		self.calls.lock().unwrap().push(call);
	}

	fn fail(message: &str) -> GithubError {
		GithubError::api_error(422, message)
	}

	fn qualified(full_name: &str) -> Result<QualifiedRepo, GithubError> {
		validate_qualified_reference(full_name)
			.map_err(|e| GithubError::InvalidResponse(e.to_string()))
	}
}

#[async_trait]
impl RepoClient for MockRepoClient {
	async fn create_fork(
		&self,
		upstream: &QualifiedRepo,
		organization: &str,
		_credential: &SecretString,
	) -> Result<QualifiedRepo, GithubError> {
		self.record(MockRepoCall::CreateFork {
			upstream: upstream.full_name(),
			organization: organization.to_string(),
		});

		if let Some(err) = &self.fork_error {
			return Err(Self::fail(err));
		}
		match &self.fork_result {
			Some(full_name) => Self::qualified(full_name),
			None => Self::qualified(&format!("{organization}/{}", upstream.name())),
		}
	}

	async fn create_org_repo(
		&self,
		name: &RepoName,
		organization: &str,
		_credential: &SecretString,
	) -> Result<QualifiedRepo, GithubError> {
		self.record(MockRepoCall::CreateOrgRepo {
			name: name.to_string(),
			organization: organization.to_string(),
		});

		if let Some(err) = &self.create_repo_error {
			return Err(Self::fail(err));
		}
		Self::qualified(&format!("{organization}/{name}"))
	}

	async fn add_collaborator(
		&self,
		repo: &QualifiedRepo,
		username: &str,
		_credential: &SecretString,
	) -> Result<bool, GithubError> {
		self.record(MockRepoCall::AddCollaborator {
			repo: repo.full_name(),
			username: username.to_string(),
		});

		match &self.add_collaborator_error {
			Some(err) => Err(Self::fail(err)),
			None => Ok(!self.add_collaborator_unconfirmed),
		}
	}
}
