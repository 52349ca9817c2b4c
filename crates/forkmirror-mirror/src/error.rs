// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::fmt::Display;

use forkmirror_common_secret::SecretString;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MirrorError>;

#[derive(Error, Debug)]
pub enum MirrorError {
	#[error("Failed to sync fork to mirror: {0}")]
	SyncFailed(String),
}

impl MirrorError {
	/// Wrap `cause` with the credential scrubbed from its message.
	pub fn sync_failed(cause: impl Display, credential: &SecretString) -> Self {
		Self::SyncFailed(credential.scrub(&cause.to_string()))
	}
}
