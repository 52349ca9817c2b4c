// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

pub mod error;
pub mod sync;
pub mod url;

pub use error::{MirrorError, Result};
pub use sync::{sync_fork_to_mirror, SyncJob, SyncOptions, MIRROR_REMOTE};
pub use url::{build_authenticated_url, repo_url, DEFAULT_SERVER_URL};
