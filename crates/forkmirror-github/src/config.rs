// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration for the GitHub client.

use std::time::Duration;

use reqwest::Url;
use tracing::warn;

use crate::error::GithubError;

const DEFAULT_BASE_URL: &str = "https://api.github.com/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct GithubConfig {
	/// Base URL for the REST API, always ending in `/`.
	base_url: Url,

	/// Per-request timeout.
	timeout: Duration,
}

impl Default for GithubConfig {
	fn default() -> Self {
		Self::new()
	}
}

impl GithubConfig {
	/// Validate and normalize a base URL.
	///
	/// Requirements:
	/// - Must be a valid URL
	/// - Must use the http or https scheme
	/// - Must have a host
	/// - The path gains a trailing slash so relative joins keep prefixes like
	///   `/api/v3`
	fn validate_and_normalize_base_url(raw: &str) -> Result<Url, GithubError> {
		let mut url = Url::parse(raw)
			.map_err(|e| GithubError::Config(format!("Invalid GitHub API URL '{raw}': {e}")))?;

		if url.scheme() != "https" && url.scheme() != "http" {
			return Err(GithubError::Config(format!(
				"GitHub API URL must use http or https, got '{}'",
				url.scheme()
			)));
		}

		if url.host_str().is_none() {
			return Err(GithubError::Config(
				"GitHub API URL must include a host".to_string(),
			));
		}

		if !url.path().ends_with('/') {
			let path = format!("{}/", url.path());
			url.set_path(&path);
		}

		Ok(url)
	}

	/// Configuration for github.com.
	pub fn new() -> Self {
		Self {
			base_url: Url::parse(DEFAULT_BASE_URL).expect("default URL is valid"),
			timeout: DEFAULT_TIMEOUT,
		}
	}

	/// Set a custom base URL (GitHub Enterprise Server or tests).
	///
	/// If validation fails, logs a warning and keeps the previous value.
	pub fn with_base_url(self, url: impl Into<String>) -> Self {
		let url_str = url.into();
		match self.clone().try_with_base_url(&url_str) {
			Ok(updated) => updated,
			Err(e) => {
				warn!(error = %e, url = %url_str, "Invalid base_url in with_base_url, keeping previous value");
				self
			}
		}
	}

	/// Like [`with_base_url`](Self::with_base_url) but reports an invalid URL
	/// instead of ignoring it.
	pub fn try_with_base_url(mut self, url: &str) -> Result<Self, GithubError> {
		self.base_url = Self::validate_and_normalize_base_url(url.trim())?;
		Ok(self)
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Get the validated base URL.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	pub fn timeout(&self) -> Duration {
		self.timeout
	}
}
