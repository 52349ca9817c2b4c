// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::fmt;

use thiserror::Error;

/// The shape a rejected identifier was expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedShape {
	/// `owner/repo`
	Qualified,
	/// `repo`
	Bare,
}

impl fmt::Display for ExpectedShape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ExpectedShape::Qualified => f.write_str("owner/repo"),
			ExpectedShape::Bare => f.write_str("repo"),
		}
	}
}

fn describe(value: &str, expected: &ExpectedShape) -> String {
	match expected {
		ExpectedShape::Qualified => {
			format!("Invalid repository reference: {value}. Expected format: {expected}.")
		}
		ExpectedShape::Bare => format!("Invalid repository name: {value}."),
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
	#[error("{}", describe(.value, .expected))]
	InvalidFormat {
		value: String,
		expected: ExpectedShape,
	},
}

impl ReferenceError {
	pub fn invalid(value: impl Into<String>, expected: ExpectedShape) -> Self {
		Self::InvalidFormat {
			value: value.into(),
			expected,
		}
	}
}
