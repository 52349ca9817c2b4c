// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use forkmirror_github::RepoClientError;
use forkmirror_mirror::MirrorError;
use thiserror::Error;

/// Why a run stopped. The message is what the workflow log shows.
#[derive(Debug, Error)]
pub enum RunError {
	#[error("Input required and not supplied: {0}")]
	MissingInput(&'static str),

	#[error(transparent)]
	Remote(#[from] RepoClientError),

	#[error(transparent)]
	Sync(#[from] MirrorError),
}
