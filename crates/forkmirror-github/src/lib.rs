// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! GitHub client for forkmirror.
//!
//! This crate provides a typed client for the three GitHub REST operations
//! forkmirror performs (fork into an organization, create a private
//! organization repository, add a collaborator) behind the [`RepoClient`]
//! trait, plus a recording mock of that trait for tests.

pub mod client;
pub mod config;
pub mod error;
pub mod mock_client;
pub mod repo_client;
pub mod types;

pub use client::GithubClient;
pub use config::GithubConfig;
pub use error::GithubError;
pub use mock_client::{MockRepoCall, MockRepoClient};
pub use repo_client::{RemoteOperation, RepoClient, RepoClientError};
pub use types::{
	AddCollaboratorRequest, CreateForkRequest, CreateOrgRepoRequest, GitHubErrorResponse,
	Repository,
};
