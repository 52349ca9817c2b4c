// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP implementation of [`RepoClient`] for the GitHub REST API.

use async_trait::async_trait;
use forkmirror_common_secret::SecretString;
use forkmirror_core::{validate_qualified_reference, QualifiedRepo, RepoName};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use tracing::{debug, error, info, instrument, warn};

use crate::config::GithubConfig;
use crate::error::GithubError;
use crate::repo_client::RepoClient;
use crate::types::{
	AddCollaboratorRequest, CreateForkRequest, CreateOrgRepoRequest, GitHubErrorResponse,
	Repository,
};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub REST client authenticated per call with a caller-supplied token.
#[derive(Clone)]
pub struct GithubClient {
	config: GithubConfig,
	http_client: Client,
}

impl GithubClient {
	pub fn new(config: GithubConfig) -> Result<Self, GithubError> {
		let http_client = forkmirror_common_http::builder()
			.timeout(config.timeout())
			.build()
			.map_err(|e| GithubError::Config(format!("Failed to create HTTP client: {e}")))?;

		Ok(Self {
			config,
			http_client,
		})
	}

	pub fn config(&self) -> &GithubConfig {
		&self.config
	}

	fn endpoint(&self, path: &str) -> Result<Url, GithubError> {
		self
			.config
			.base_url()
			.join(path)
			.map_err(|e| GithubError::Config(format!("Invalid URL: {e}")))
	}

	fn authorized(&self, request: RequestBuilder, credential: &SecretString) -> RequestBuilder {
		request
			.bearer_auth(credential.expose())
			.header("Accept", GITHUB_ACCEPT)
			.header("X-GitHub-Api-Version", GITHUB_API_VERSION)
	}

	async fn send(&self, request: RequestBuilder) -> Result<Response, GithubError> {
		let response = request.send().await.map_err(|e| {
			if e.is_timeout() {
				return GithubError::Timeout;
			}
			GithubError::Network(e)
		})?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(map_github_error(status, &body));
		}
		Ok(response)
	}

	async fn parse_repository(response: Response) -> Result<QualifiedRepo, GithubError> {
		let repo: Repository = response.json().await.map_err(|e| {
			error!(error = %e, "Failed to parse repository response");
			GithubError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		validate_qualified_reference(&repo.full_name).map_err(|_| {
			GithubError::InvalidResponse(format!("unexpected full_name '{}'", repo.full_name))
		})
	}
}

#[async_trait]
impl RepoClient for GithubClient {
	#[instrument(skip(self, credential), fields(upstream = %upstream))]
	async fn create_fork(
		&self,
		upstream: &QualifiedRepo,
		organization: &str,
		credential: &SecretString,
	) -> Result<QualifiedRepo, GithubError> {
		let url = self.endpoint(&format!(
			"repos/{}/{}/forks",
			upstream.owner(),
			upstream.name()
		))?;

		debug!(url = %url, "Creating fork");

		let body = CreateForkRequest {
			organization: organization.to_string(),
			default_branch_only: false,
		};
		let response = self
			.send(self.authorized(self.http_client.post(url), credential).json(&body))
			.await?;

		let fork = Self::parse_repository(response).await?;
		info!(fork = %fork, "Fork created");
		Ok(fork)
	}

	#[instrument(skip(self, credential), fields(name = %name))]
	async fn create_org_repo(
		&self,
		name: &RepoName,
		organization: &str,
		credential: &SecretString,
	) -> Result<QualifiedRepo, GithubError> {
		let url = self.endpoint(&format!(
			"orgs/{}/repos",
			urlencoding::encode(organization)
		))?;

		debug!(url = %url, "Creating private repository");

		let response = self
			.send(
				self
					.authorized(self.http_client.post(url), credential)
					.json(&CreateOrgRepoRequest::private(name.as_str())),
			)
			.await?;

		let repo = Self::parse_repository(response).await?;
		info!(repo = %repo, "Private repository created");
		Ok(repo)
	}

	#[instrument(skip(self, credential), fields(repo = %repo))]
	async fn add_collaborator(
		&self,
		repo: &QualifiedRepo,
		username: &str,
		credential: &SecretString,
	) -> Result<bool, GithubError> {
		let url = self.endpoint(&format!(
			"repos/{}/{}/collaborators/{}",
			repo.owner(),
			repo.name(),
			urlencoding::encode(username)
		))?;

		debug!(url = %url, "Adding admin collaborator");

		let response = self
			.send(
				self
					.authorized(self.http_client.put(url), credential)
					.json(&AddCollaboratorRequest::admin()),
			)
			.await?;

		// 201 carries an invitation, 204 means the user already had access.
		info!(status = response.status().as_u16(), username, "Admin granted");
		Ok(true)
	}
}

/// Map an unsuccessful GitHub response to an error, preferring the `message`
/// field of GitHub's JSON error body over the raw body.
pub(crate) fn map_github_error(status: StatusCode, body: &str) -> GithubError {
	let status_code = status.as_u16();
	let message = serde_json::from_str::<GitHubErrorResponse>(body)
		.map(|r| r.message)
		.unwrap_or_else(|_| body.to_string());

	match status_code {
		401 => {
			warn!(status = status_code, "Unauthorized request to GitHub");
			GithubError::Unauthorized
		}
		403 => {
			let lower = message.to_lowercase();
			if lower.contains("rate limit") || lower.contains("api rate") {
				warn!(status = status_code, "GitHub rate limit exceeded");
				GithubError::RateLimited
			} else {
				warn!(status = status_code, "Forbidden request to GitHub");
				GithubError::Forbidden(message)
			}
		}
		_ => {
			error!(status = status_code, message = %message, "GitHub API error");
			GithubError::ApiError {
				status: status_code,
				message,
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::repo_client::{RemoteOperation, RepoClientError};
	use serde_json::json;
	use wiremock::matchers::{body_json, header, method, path};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn token() -> SecretString {
		SecretString::new("ghp_test_token".to_string())
	}

	async fn client_for(server: &MockServer) -> GithubClient {
		GithubClient::new(GithubConfig::new().with_base_url(server.uri())).unwrap()
	}

	#[test]
	fn test_map_github_error_401() {
		let err = map_github_error(StatusCode::UNAUTHORIZED, "");
		assert!(matches!(err, GithubError::Unauthorized));
	}

	#[test]
	fn test_map_github_error_403_rate_limit() {
		let body = r#"{"message":"API rate limit exceeded for installation"}"#;
		let err = map_github_error(StatusCode::FORBIDDEN, body);
		assert!(matches!(err, GithubError::RateLimited));
	}

	#[test]
	fn test_map_github_error_403_forbidden() {
		let err = map_github_error(StatusCode::FORBIDDEN, "Access denied");
		assert!(matches!(err, GithubError::Forbidden(ref m) if m == "Access denied"));
	}

	#[test]
	fn test_map_github_error_uses_json_message() {
		let body = r#"{"message":"Not Found","documentation_url":"https://docs.github.com"}"#;
		let err = map_github_error(StatusCode::NOT_FOUND, body);
		assert_eq!(err.to_string(), "GitHub API error: 404 - Not Found");
	}

	#[tokio::test]
	async fn test_fork_publicly_returns_fork_full_name() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/repos/octo/widgets/forks"))
			.and(header("authorization", "Bearer ghp_test_token"))
			.and(header("accept", "application/vnd.github+json"))
			.and(header("x-github-api-version", "2022-11-28"))
			.and(body_json(json!({
				"organization": "octo-internal",
				"default_branch_only": false
			})))
			.respond_with(ResponseTemplate::new(202).set_body_json(json!({
				"id": 42,
				"full_name": "octo-internal/widgets",
				"private": false,
				"html_url": "https://github.com/octo-internal/widgets"
			})))
			.expect(1)
			.mount(&server)
			.await;

		let client = client_for(&server).await;
		let fork = client
			.fork_publicly("octo/widgets", "octo-internal", &token())
			.await
			.unwrap();
		assert_eq!(fork.full_name(), "octo-internal/widgets");
	}

	#[tokio::test]
	async fn test_fork_publicly_rejects_invalid_reference_without_request() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.respond_with(ResponseTemplate::new(202))
			.expect(0)
			.mount(&server)
			.await;

		let client = client_for(&server).await;
		let err = client
			.fork_publicly("octo widgets", "octo-internal", &token())
			.await
			.unwrap_err();
		assert!(matches!(err, RepoClientError::InvalidFormat(_)));
		assert_eq!(
			err.to_string(),
			"Invalid repository reference: octo widgets. Expected format: owner/repo."
		);
	}

	#[tokio::test]
	async fn test_fork_publicly_wraps_remote_failure() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/repos/octo/widgets/forks"))
			.respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
			.mount(&server)
			.await;

		let client = client_for(&server).await;
		let err = client
			.fork_publicly("octo/widgets", "octo-internal", &token())
			.await
			.unwrap_err();
		assert_eq!(err.operation(), Some(RemoteOperation::CreateFork));
		assert_eq!(
			err.to_string(),
			"Failed to create fork: GitHub API error: 404 - Not Found"
		);
	}

	#[tokio::test]
	async fn test_fork_with_malformed_full_name_is_invalid_response() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.respond_with(ResponseTemplate::new(202).set_body_json(json!({"full_name": "nope"})))
			.mount(&server)
			.await;

		let client = client_for(&server).await;
		let err = client
			.fork_publicly("octo/widgets", "octo-internal", &token())
			.await
			.unwrap_err();
		assert!(matches!(
			err,
			RepoClientError::RemoteOperationFailed {
				source: GithubError::InvalidResponse(_),
				..
			}
		));
	}

	#[tokio::test]
	async fn test_create_private_repo_sends_private_payload() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/orgs/octo-internal/repos"))
			.and(body_json(json!({
				"name": "widgets-mirror",
				"visibility": "private",
				"private": true
			})))
			.respond_with(ResponseTemplate::new(201).set_body_json(json!({
				"full_name": "octo-internal/widgets-mirror",
				"private": true
			})))
			.expect(1)
			.mount(&server)
			.await;

		let client = client_for(&server).await;
		let repo = client
			.create_private_repo("widgets-mirror", "octo-internal", &token())
			.await
			.unwrap();
		assert_eq!(repo.full_name(), "octo-internal/widgets-mirror");
	}

	#[tokio::test]
	async fn test_create_private_repo_rejects_qualified_name() {
		let server = MockServer::start().await;
		let client = client_for(&server).await;

		let err = client
			.create_private_repo("octo/widgets-mirror", "octo-internal", &token())
			.await
			.unwrap_err();
		assert_eq!(
			err.to_string(),
			"Invalid repository name: octo/widgets-mirror."
		);
		assert!(server.received_requests().await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_create_private_repo_name_taken() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/orgs/octo-internal/repos"))
			.respond_with(ResponseTemplate::new(422).set_body_json(json!({
				"message": "Repository creation failed."
			})))
			.mount(&server)
			.await;

		let client = client_for(&server).await;
		let err = client
			.create_private_repo("widgets-mirror", "octo-internal", &token())
			.await
			.unwrap_err();
		assert_eq!(
			err.to_string(),
			"Failed to create repository: GitHub API error: 422 - Repository creation failed."
		);
	}

	#[tokio::test]
	async fn test_add_admin_accepts_created_and_no_content() {
		for status in [201, 204] {
			let server = MockServer::start().await;
			Mock::given(method("PUT"))
				.and(path("/repos/octo-internal/widgets-mirror/collaborators/alice"))
				.and(body_json(json!({"permission": "admin"})))
				.respond_with(ResponseTemplate::new(status))
				.expect(1)
				.mount(&server)
				.await;

			let client = client_for(&server).await;
			let added = client
				.add_admin("alice", "octo-internal/widgets-mirror", &token())
				.await
				.unwrap();
			assert!(added, "status {status} should count as success");
		}
	}

	#[tokio::test]
	async fn test_add_admin_unauthorized() {
		let server = MockServer::start().await;
		Mock::given(method("PUT"))
			.respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Bad credentials"})))
			.mount(&server)
			.await;

		let client = client_for(&server).await;
		let err = client
			.add_admin("alice", "octo-internal/widgets-mirror", &token())
			.await
			.unwrap_err();
		assert_eq!(err.to_string(), "Failed to add admin: Bad credentials");
	}

	#[tokio::test]
	async fn test_add_admin_rejects_bare_repo() {
		let server = MockServer::start().await;
		let client = client_for(&server).await;

		let err = client
			.add_admin("alice", "widgets-mirror", &token())
			.await
			.unwrap_err();
		assert!(matches!(err, RepoClientError::InvalidFormat(_)));
		assert!(server.received_requests().await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_enterprise_base_url_prefix_is_kept() {
		let server = MockServer::start().await;
		Mock::given(method("POST"))
			.and(path("/api/v3/orgs/octo-internal/repos"))
			.respond_with(ResponseTemplate::new(201).set_body_json(json!({
				"full_name": "octo-internal/widgets-mirror"
			})))
			.expect(1)
			.mount(&server)
			.await;

		let config = GithubConfig::new().with_base_url(format!("{}/api/v3", server.uri()));
		let client = GithubClient::new(config).unwrap();
		client
			.create_private_repo("widgets-mirror", "octo-internal", &token())
			.await
			.unwrap();
	}
}
