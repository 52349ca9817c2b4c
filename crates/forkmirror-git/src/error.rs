// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::io;

use forkmirror_common_http::RetryableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
	/// Arguments are deliberately left out of the message: remote URLs carry
	/// credentials.
	#[error("git {subcommand} failed: {stderr}")]
	CommandFailed { subcommand: String, stderr: String },

	#[error("git is not installed or not in PATH")]
	GitNotInstalled,

	#[error("I/O error: {0}")]
	Io(#[from] io::Error),
}

impl GitError {
	pub fn command_failed(subcommand: impl Into<String>, stderr: impl Into<String>) -> Self {
		Self::CommandFailed {
			subcommand: subcommand.into(),
			stderr: stderr.into(),
		}
	}
}

impl RetryableError for GitError {
	fn is_retryable(&self) -> bool {
		match self {
			GitError::CommandFailed { .. } => true,
			GitError::Io(_) => true,
			GitError::GitNotInstalled => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_command_failure_is_retryable() {
		assert!(GitError::command_failed("clone", "Connection reset by peer").is_retryable());
	}

	#[test]
	fn test_missing_git_is_not_retryable() {
		assert!(!GitError::GitNotInstalled.is_retryable());
	}

	#[test]
	fn test_display_omits_arguments() {
		let err = GitError::command_failed("push", "remote: Repository not found.");
		assert_eq!(
			err.to_string(),
			"git push failed: remote: Repository not found."
		);
	}
}
