// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use forkmirror_common_secret::SecretString;

use crate::error::RunError;

pub const UPSTREAM_REPO: &str = "upstream-repo";
pub const PRIVATE_MIRROR_NAME: &str = "private-mirror-name";
pub const ACTOR: &str = "actor";
pub const ADMIN_TOKEN: &str = "admin-token";
pub const ORGANIZATION: &str = "organization";

/// Inputs as the runner handed them over; any of them may be absent.
#[derive(Debug, Clone, Default)]
pub struct RawInputs {
	pub upstream_repo: Option<String>,
	pub private_mirror_name: Option<String>,
	pub actor: Option<String>,
	pub admin_token: Option<SecretString>,
	pub organization: Option<String>,
}

/// Inputs after presence checks, trimmed.
#[derive(Debug, Clone)]
pub struct ActionInputs {
	/// `owner/repo` to fork.
	pub upstream_repo: String,
	/// Bare name of the private repository to create.
	pub private_mirror_name: String,
	/// User granted admin on the mirror.
	pub actor: String,
	pub admin_token: SecretString,
	/// Organization that receives both the fork and the mirror.
	pub organization: String,
}

fn required(value: Option<String>, name: &'static str) -> Result<String, RunError> {
	match value.as_deref().map(str::trim) {
		Some(v) if !v.is_empty() => Ok(v.to_string()),
		_ => Err(RunError::MissingInput(name)),
	}
}

impl ActionInputs {
	/// Checks inputs in declaration order and reports the first missing one.
	pub fn from_raw(raw: RawInputs) -> Result<Self, RunError> {
		let upstream_repo = required(raw.upstream_repo, UPSTREAM_REPO)?;
		let private_mirror_name = required(raw.private_mirror_name, PRIVATE_MIRROR_NAME)?;
		let actor = required(raw.actor, ACTOR)?;
		let admin_token = match raw.admin_token {
			Some(token) if !token.is_blank() => SecretString::new(token.expose().trim().to_string()),
			_ => return Err(RunError::MissingInput(ADMIN_TOKEN)),
		};
		let organization = required(raw.organization, ORGANIZATION)?;

		Ok(Self {
			upstream_repo,
			private_mirror_name,
			actor,
			admin_token,
			organization,
		})
	}
}
