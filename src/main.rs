// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-msg-hook - conventional commit gate for git's commit-msg hook.

use clap::Parser;
use commit_msg_hook::cli::{run, Cli};
use commit_msg_hook::error::{GuardError, ValidationError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    setup_logging();

    match run(cli) {
        Ok(()) => {}
        // The diagnostic block has already been written.
        Err(GuardError::Validation(ValidationError::Rejected)) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Set up logging/tracing.
///
/// Output goes to stderr so an accepted commit stays silent on stdout.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    tracing::debug!(
        "commit-msg-hook {}",
        commit_msg_hook::version::version_string()
    );
}
