// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use forkmirror_action::logging::init_tracing;
use forkmirror_action::{report, Orchestrator, RawInputs, Workflow};
use forkmirror_common_secret::SecretString;
use forkmirror_git::CommandGitClient;
use forkmirror_github::{GithubClient, GithubConfig};
use forkmirror_mirror::{SyncOptions, DEFAULT_SERVER_URL};
use tracing::info;

/// Fork a repository into an organization and keep a private mirror of it.
///
/// Inputs are read from the `INPUT_*` variables the Actions runner sets, or
/// from the flags below when run by hand.
#[derive(Parser, Debug)]
#[command(name = "forkmirror", version, about, long_about = None)]
struct Args {
	/// Repository to fork, as owner/repo
	#[arg(long, env = "INPUT_UPSTREAM-REPO")]
	upstream_repo: Option<String>,

	/// Name of the private repository to create in the organization
	#[arg(long, env = "INPUT_PRIVATE-MIRROR-NAME")]
	private_mirror_name: Option<String>,

	/// User who becomes admin of the private mirror
	#[arg(long, env = "INPUT_ACTOR")]
	actor: Option<String>,

	/// Token used for every API call and git operation
	#[arg(long, env = "INPUT_ADMIN-TOKEN", hide_env_values = true)]
	admin_token: Option<String>,

	/// Organization that receives the fork and the mirror
	#[arg(long, env = "INPUT_ORGANIZATION")]
	organization: Option<String>,

	/// GitHub REST API base URL
	#[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
	api_url: String,

	/// Git server the repositories are cloned from and pushed to
	#[arg(long, env = "GITHUB_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
	server_url: String,

	/// File step outputs are appended to; printed to stdout when unset
	#[arg(long, env = "GITHUB_OUTPUT")]
	output_file: Option<PathBuf>,

	/// Directory the temporary clone is created in
	#[arg(long, env = "RUNNER_TEMP")]
	work_root: Option<PathBuf>,

	/// Set to 1 by the runner when step debug logging is enabled
	#[arg(long, env = "RUNNER_DEBUG", hide = true)]
	runner_debug: Option<String>,

	/// Output logs as JSON
	#[arg(long)]
	json_logs: bool,
}

impl Args {
	fn debug_enabled(&self) -> bool {
		self.runner_debug.as_deref().map(str::trim) == Some("1")
	}

	fn raw_inputs(&self) -> RawInputs {
		RawInputs {
			upstream_repo: self.upstream_repo.clone(),
			private_mirror_name: self.private_mirror_name.clone(),
			actor: self.actor.clone(),
			admin_token: self.admin_token.clone().map(SecretString::new),
			organization: self.organization.clone(),
		}
	}
}

#[tokio::main]
async fn main() -> ExitCode {
	let args = Args::parse();
	init_tracing(args.json_logs, args.debug_enabled());

	let mut workflow = Workflow::stdout(args.output_file.clone());
	match run(&args, &mut workflow).await {
		Ok(true) => ExitCode::SUCCESS,
		Ok(false) => ExitCode::FAILURE,
		Err(e) => {
			// Setup or reporting failed outside the orchestrated stages.
			let _ = workflow.error(&format!("{e:#}"));
			ExitCode::FAILURE
		}
	}
}

async fn run(args: &Args, workflow: &mut Workflow<std::io::Stdout>) -> Result<bool> {
	let raw = args.raw_inputs();
	if let Some(token) = raw.admin_token.as_ref().filter(|t| !t.is_blank()) {
		workflow
			.add_mask(token.expose().trim())
			.context("failed to mask admin token")?;
	}

	let config = GithubConfig::new()
		.try_with_base_url(&args.api_url)
		.context("invalid GITHUB_API_URL")?;
	let github = GithubClient::new(config).context("failed to create GitHub client")?;

	let options = SyncOptions {
		work_root: args.work_root.clone(),
		..SyncOptions::default()
	};
	let orchestrator = Orchestrator::new(github, CommandGitClient::new())
		.with_server_url(args.server_url.as_str())
		.with_sync_options(options);

	info!(version = env!("CARGO_PKG_VERSION"), "starting forkmirror");
	let outcome = orchestrator.run(raw).await;

	report(&outcome, workflow).context("failed to report result to the runner")
}
