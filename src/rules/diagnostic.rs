// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rejection diagnostic.

use console::{style, Term};

use crate::commit::CommitMessage;

use super::convention::{CommitType, EXAMPLES, EXAMPLE_SCOPES, TEMPLATE};

/// Explains the convention to the author of a rejected message.
pub struct Diagnostic<'a> {
    message: &'a CommitMessage,
}

impl<'a> Diagnostic<'a> {
    /// Create a diagnostic for a rejected message.
    pub fn new(message: &'a CommitMessage) -> Self {
        Self { message }
    }

    /// Print the diagnostic to stderr.
    pub fn print(&self) -> std::io::Result<()> {
        let term = Term::stderr();
        term.write_str(&self.render())?;
        term.flush()
    }

    /// Render the diagnostic block.
    ///
    /// The rejected message is echoed exactly as trimmed and never styled.
    pub fn render(&self) -> String {
        let types = CommitType::all()
            .iter()
            .map(CommitType::as_str)
            .collect::<Vec<_>>()
            .join(" | ");
        let scopes = EXAMPLE_SCOPES.join(" | ");

        let mut output = String::from("\n");

        output.push_str(&format!(
            "  {} {}\n\n",
            style("✗").red().bold().for_stderr(),
            style("Commit message does not follow the convention:")
                .bold()
                .for_stderr()
        ));
        output.push_str(&format!(
            "    {}\n\n",
            style(TEMPLATE).cyan().for_stderr()
        ));

        output.push_str(&format!(
            "  {}  {}\n",
            style("Types:").bold().for_stderr(),
            types
        ));
        output.push_str(&format!(
            "  {}  {}\n\n",
            style("Scope:").bold().for_stderr(),
            scopes
        ));

        output.push_str(&format!("  {}\n", style("Examples:").bold().for_stderr()));
        for example in EXAMPLES {
            output.push_str(&format!("    {}\n", style(example).green().for_stderr()));
        }

        output.push_str(&format!(
            "\n  {} \"{}\"\n\n",
            style("Your message:").bold().for_stderr(),
            self.message.text()
        ));

        output
    }
}
