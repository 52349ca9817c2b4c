// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when `RUST_LOG` is unset.
pub fn default_directive(debug: bool) -> String {
	let level = if debug {
		tracing::Level::DEBUG
	} else {
		tracing::Level::INFO
	};
	format!("forkmirror={level}")
}

/// Install the global subscriber. Logs go to stderr; stdout carries workflow
/// commands.
pub fn init_tracing(json: bool, debug: bool) {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

	if json {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().json().with_writer(std::io::stderr))
			.init();
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().compact().with_writer(std::io::stderr))
			.init();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_directive() {
		assert_eq!(default_directive(false), "forkmirror=INFO");
		assert_eq!(default_directive(true), "forkmirror=DEBUG");
	}
}
