// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-msg-hook - conventional commit gate for git.
//!
//! Reads the message git hands to the `commit-msg` hook and checks it against
//! a fixed convention:
//!
//! ```text
//! type(scope): description
//! ```
//!
//! Auto-generated merge messages (`Merge ... branch ... into ...`) are let
//! through unchanged.
//!
//! # Example
//!
//! ```
//! use commit_msg_hook::commit::CommitMessage;
//! use commit_msg_hook::rules::validate;
//!
//! let message = CommitMessage::new("feat(skills): add angular-signals skill\n");
//! assert!(validate(&message).is_accepted());
//!
//! let message = CommitMessage::new("updated stuff");
//! assert!(!validate(&message).is_accepted());
//! ```

pub mod cli;
pub mod commit;
pub mod error;
pub mod rules;

pub use error::{GuardError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-msg-hook.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_version_string_starts_with_pkg_version() {
            assert!(version_string().starts_with(VERSION));
        }
    }
}
