// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request and response bodies for the GitHub REST endpoints forkmirror uses.

use serde::{Deserialize, Serialize};

/// Body of `POST /repos/{owner}/{repo}/forks`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateForkRequest {
	/// Organization that will own the fork.
	pub organization: String,
	/// Fork every branch, not only the default one.
	pub default_branch_only: bool,
}

/// Body of `POST /orgs/{org}/repos`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrgRepoRequest {
	pub name: String,
	pub visibility: String,
	pub private: bool,
}

impl CreateOrgRepoRequest {
	pub fn private(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			visibility: "private".to_string(),
			private: true,
		}
	}
}

/// Body of `PUT /repos/{owner}/{repo}/collaborators/{username}`.
#[derive(Debug, Clone, Serialize)]
pub struct AddCollaboratorRequest {
	pub permission: String,
}

impl AddCollaboratorRequest {
	pub fn admin() -> Self {
		Self {
			permission: "admin".to_string(),
		}
	}
}

/// The subset of GitHub's repository object forkmirror reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
	/// Full repository name (owner/repo).
	pub full_name: String,
}

/// GitHub API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubErrorResponse {
	/// Error message.
	pub message: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_create_org_repo_request_is_private() {
		let body = serde_json::to_value(CreateOrgRepoRequest::private("widgets-mirror")).unwrap();
		assert_eq!(
			body,
			json!({"name": "widgets-mirror", "visibility": "private", "private": true})
		);
	}

	#[test]
	fn test_add_collaborator_request_is_admin() {
		let body = serde_json::to_value(AddCollaboratorRequest::admin()).unwrap();
		assert_eq!(body, json!({"permission": "admin"}));
	}

	#[test]
	fn test_repository_ignores_unknown_fields() {
		let repo: Repository = serde_json::from_value(json!({
			"id": 1,
			"full_name": "octo-internal/widgets",
			"private": false,
			"fork": true,
			"owner": {"login": "octo-internal"}
		}))
		.unwrap();
		assert_eq!(repo.full_name, "octo-internal/widgets");
	}

	#[test]
	fn test_error_response_reads_message_only() {
		let body: GitHubErrorResponse = serde_json::from_value(json!({
			"message": "Not Found",
			"documentation_url": "https://docs.github.com/rest"
		}))
		.unwrap();
		assert_eq!(body.message, "Not Found");
	}
}
