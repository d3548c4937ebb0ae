// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook execution.

use crate::commit::CommitMessage;
use crate::error::{GuardError, Result, ValidationError};
use crate::rules::{validate, Diagnostic, Verdict};

use super::args::Cli;

/// Run the hook with the given arguments.
///
/// A rejected message is printed to stderr and returned as
/// [`ValidationError::Rejected`].
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!("Running commit-msg hook with args: {:?}", cli);

    let message = CommitMessage::from_file(&cli.message_file)?;

    match validate(&message) {
        Verdict::Accepted(form) => {
            tracing::debug!("Accepted as {}", form);
            Ok(())
        }
        Verdict::Rejected => {
            if message.is_empty() {
                tracing::debug!("Rejected: message is empty");
            } else {
                tracing::debug!("Rejected: {:?}", message.first_line());
            }
            Diagnostic::new(&message).print()?;
            Err(GuardError::Validation(ValidationError::Rejected))
        }
    }
}
