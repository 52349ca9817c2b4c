// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Talking to the Actions runner: workflow commands on stdout and step
//! outputs in the `GITHUB_OUTPUT` file.

use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::orchestrator::RunOutcome;

pub const PUBLIC_FORK_OUTPUT: &str = "public-fork";
pub const PRIVATE_MIRROR_OUTPUT: &str = "private-mirror";

/// Escape a workflow command value so it stays on one line.
pub fn escape_data(value: &str) -> String {
	value
		.replace('%', "%25")
		.replace('\r', "%0D")
		.replace('\n', "%0A")
}

pub struct Workflow<W> {
	out: W,
	output_file: Option<PathBuf>,
}

impl Workflow<Stdout> {
	pub fn stdout(output_file: Option<PathBuf>) -> Self {
		Self::new(io::stdout(), output_file)
	}
}

impl<W: Write> Workflow<W> {
	/// Outputs go to `output_file` when set, otherwise to `out` alongside
	/// the workflow commands.
	pub fn new(out: W, output_file: Option<PathBuf>) -> Self {
		Self { out, output_file }
	}

	/// Ask the runner to hide `value` in all later log output.
	pub fn add_mask(&mut self, value: &str) -> io::Result<()> {
		writeln!(self.out, "::add-mask::{}", escape_data(value))?;
		self.out.flush()
	}

	pub fn error(&mut self, message: &str) -> io::Result<()> {
		writeln!(self.out, "::error::{}", escape_data(message))?;
		self.out.flush()
	}

	/// Write every `name=value` pair in one append, so a reader of the
	/// outputs file sees all of them or none.
	pub fn set_outputs(&mut self, outputs: &[(&str, &str)]) -> io::Result<()> {
		let block: String = outputs
			.iter()
			.map(|(name, value)| format!("{name}={value}\n"))
			.collect();
		match &self.output_file {
			Some(path) => {
				debug!(count = outputs.len(), path = %path.display(), "writing step outputs");
				let mut file = OpenOptions::new().create(true).append(true).open(path)?;
				file.write_all(block.as_bytes())
			}
			None => {
				self.out.write_all(block.as_bytes())?;
				self.out.flush()
			}
		}
	}

	pub fn into_inner(self) -> W {
		self.out
	}
}

/// Publish a finished run: both outputs on success, one error otherwise.
/// Returns whether the run succeeded.
pub fn report<W: Write>(outcome: &RunOutcome, workflow: &mut Workflow<W>) -> io::Result<bool> {
	match outcome {
		RunOutcome::Success {
			public_fork,
			private_mirror,
		} => {
			let public_fork = public_fork.full_name();
			let private_mirror = private_mirror.full_name();
			workflow.set_outputs(&[
				(PUBLIC_FORK_OUTPUT, public_fork.as_str()),
				(PRIVATE_MIRROR_OUTPUT, private_mirror.as_str()),
			])?;
			Ok(true)
		}
		RunOutcome::Failure { error, .. } => {
			workflow.error(&error.to_string())?;
			Ok(false)
		}
	}
}
