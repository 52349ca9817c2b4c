// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client builder with a consistent User-Agent header.

use reqwest::{Client, ClientBuilder};

/// Creates a client builder carrying the forkmirror User-Agent.
///
/// GitHub rejects API requests without a User-Agent, so every client talking
/// to it starts here.
///
/// # Example
/// ```ignore
/// let client = forkmirror_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Returns the User-Agent string, `forkmirror/{version}`.
pub fn user_agent() -> String {
	format!("forkmirror/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_has_product_and_version() {
		let ua = user_agent();
		let (product, version) = ua.split_once('/').unwrap();
		assert_eq!(product, "forkmirror");
		assert!(!version.is_empty());
	}

	#[test]
	fn builder_builds() {
		assert!(builder().build().is_ok());
	}
}
