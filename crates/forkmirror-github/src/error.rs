// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the GitHub client.

use thiserror::Error;

/// Errors that can occur when talking to the GitHub REST API.
#[derive(Debug, Error)]
pub enum GithubError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Token missing, expired or revoked.
	#[error("Bad credentials")]
	Unauthorized,

	/// Token lacks the scopes or organization permissions needed.
	#[error("Forbidden: {0}")]
	Forbidden(String),

	/// Rate limit exceeded.
	#[error("Rate limit exceeded")]
	RateLimited,

	/// GitHub API returned an error.
	#[error("GitHub API error: {status} - {message}")]
	ApiError { status: u16, message: String },

	/// Invalid or unparseable response.
	#[error("Invalid response from GitHub: {0}")]
	InvalidResponse(String),

	/// Configuration error.
	#[error("Configuration error: {0}")]
	Config(String),
}

impl GithubError {
	/// Create an API error from status code and message.
	pub fn api_error(status: u16, message: impl Into<String>) -> Self {
		Self::ApiError {
			status,
			message: message.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_api_error_display() {
		let err = GithubError::api_error(404, "Not Found");
		assert_eq!(err.to_string(), "GitHub API error: 404 - Not Found");
	}

	#[test]
	fn test_forbidden_display_carries_reason() {
		let err = GithubError::Forbidden("Resource not accessible by integration".to_string());
		assert_eq!(
			err.to_string(),
			"Forbidden: Resource not accessible by integration"
		);
	}
}
