// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use crate::error::{ExpectedShape, ReferenceError};

/// A repository name including its owner, e.g. `octo-internal/widgets`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedRepo {
	owner: String,
	name: String,
}

/// A repository name without an owner, e.g. `widgets-mirror`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoName(String);

/// Word characters plus `-`: ASCII letters, digits, `_` and `-`.
fn is_name_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

fn is_segment(s: &str) -> bool {
	!s.is_empty() && s.chars().all(is_name_char)
}

/// Accepts exactly `^[\w-]+/[\w-]+$`.
pub fn validate_qualified_reference(s: &str) -> Result<QualifiedRepo, ReferenceError> {
	match s.split_once('/') {
		Some((owner, name)) if is_segment(owner) && is_segment(name) => Ok(QualifiedRepo {
			owner: owner.to_string(),
			name: name.to_string(),
		}),
		_ => Err(ReferenceError::invalid(s, ExpectedShape::Qualified)),
	}
}

/// Accepts exactly `^[\w-]+$`.
pub fn validate_bare_name(s: &str) -> Result<RepoName, ReferenceError> {
	if is_segment(s) {
		Ok(RepoName(s.to_string()))
	} else {
		Err(ReferenceError::invalid(s, ExpectedShape::Bare))
	}
}

impl QualifiedRepo {
	pub fn owner(&self) -> &str {
		&self.owner
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// `owner/name`, the form GitHub calls `full_name`.
	pub fn full_name(&self) -> String {
		format!("{}/{}", self.owner, self.name)
	}
}

impl RepoName {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for QualifiedRepo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.owner, self.name)
	}
}

impl fmt::Display for RepoName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for QualifiedRepo {
	type Err = ReferenceError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		validate_qualified_reference(s)
	}
}

impl FromStr for RepoName {
	type Err = ReferenceError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		validate_bare_name(s)
	}
}
