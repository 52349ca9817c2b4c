// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Runs the four steps of the action in order and stops at the first failure.
//!
//! ```text
//! Init -> Forking -> CreatingMirror -> Syncing -> AddingAdmin -> Done
//!   \________\___________\_______________\__________\______-> Failed
//! ```
//!
//! Nothing is rolled back: a fork created before a later failure stays.

use std::fmt;

use forkmirror_core::QualifiedRepo;
use forkmirror_git::GitClient;
use forkmirror_github::RepoClient;
use forkmirror_mirror::{sync_fork_to_mirror, SyncJob, SyncOptions, DEFAULT_SERVER_URL};
use tracing::{debug, error, info, instrument};

use crate::error::RunError;
use crate::inputs::{ActionInputs, RawInputs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
	Init,
	Forking,
	CreatingMirror,
	Syncing,
	AddingAdmin,
	Done,
	Failed,
}

impl fmt::Display for Stage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			Stage::Init => "init",
			Stage::Forking => "forking",
			Stage::CreatingMirror => "creating-mirror",
			Stage::Syncing => "syncing",
			Stage::AddingAdmin => "adding-admin",
			Stage::Done => "done",
			Stage::Failed => "failed",
		};
		f.write_str(s)
	}
}

#[derive(Debug)]
pub enum RunOutcome {
	Success {
		public_fork: QualifiedRepo,
		private_mirror: QualifiedRepo,
	},
	Failure {
		/// The stage that was running when the error occurred.
		stage: Stage,
		error: RunError,
	},
}

impl RunOutcome {
	/// Terminal state of the run.
	pub fn state(&self) -> Stage {
		match self {
			RunOutcome::Success { .. } => Stage::Done,
			RunOutcome::Failure { .. } => Stage::Failed,
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(self, RunOutcome::Success { .. })
	}
}

pub struct Orchestrator<R, G> {
	repos: R,
	git: G,
	server_url: String,
	sync_options: SyncOptions,
}

impl<R, G> Orchestrator<R, G>
where
	R: RepoClient,
	G: GitClient,
{
	pub fn new(repos: R, git: G) -> Self {
		Self {
			repos,
			git,
			server_url: DEFAULT_SERVER_URL.to_string(),
			sync_options: SyncOptions::default(),
		}
	}

	/// Git server the fork and mirror are cloned from and pushed to.
	pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
		self.server_url = server_url.into();
		self
	}

	pub fn with_sync_options(mut self, options: SyncOptions) -> Self {
		self.sync_options = options;
		self
	}

	#[instrument(skip(self, raw))]
	pub async fn run(&self, raw: RawInputs) -> RunOutcome {
		let mut stage = Stage::Init;
		match self.run_stages(raw, &mut stage).await {
			Ok((public_fork, private_mirror)) => {
				info!(%public_fork, %private_mirror, "fork and private mirror ready");
				RunOutcome::Success {
					public_fork,
					private_mirror,
				}
			}
			Err(error) => {
				error!(%stage, %error, "run failed");
				RunOutcome::Failure { stage, error }
			}
		}
	}

	async fn run_stages(
		&self,
		raw: RawInputs,
		stage: &mut Stage,
	) -> Result<(QualifiedRepo, QualifiedRepo), RunError> {
		let inputs = ActionInputs::from_raw(raw)?;
		let token = &inputs.admin_token;

		advance(stage, Stage::Forking);
		let fork = self
			.repos
			.fork_publicly(&inputs.upstream_repo, &inputs.organization, token)
			.await?;

		advance(stage, Stage::CreatingMirror);
		let mirror = self
			.repos
			.create_private_repo(&inputs.private_mirror_name, &inputs.organization, token)
			.await?;

		advance(stage, Stage::Syncing);
		let job = SyncJob::new(fork.clone(), mirror.clone(), token.clone())
			.with_server_url(self.server_url.as_str());
		sync_fork_to_mirror(&self.git, &job, &self.sync_options).await?;

		advance(stage, Stage::AddingAdmin);
		self
			.repos
			.add_admin(&inputs.actor, &mirror.full_name(), token)
			.await?;
		debug!(actor = %inputs.actor, "admin granted");

		advance(stage, Stage::Done);
		Ok((fork, mirror))
	}
}

fn advance(stage: &mut Stage, next: Stage) {
	debug!(from = %stage, to = %next, "stage transition");
	*stage = next;
}
