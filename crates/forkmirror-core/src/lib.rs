// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Repository identifiers shared by every forkmirror crate.
//!
//! Everything that names a repository, whether it comes from workflow input
//! or from a GitHub API response, is turned into a [`QualifiedRepo`] or a
//! [`RepoName`] here before any network or git call uses it.

pub mod error;
pub mod reference;

pub use error::{ExpectedShape, ReferenceError};
pub use reference::{validate_bare_name, validate_qualified_reference, QualifiedRepo, RepoName};
