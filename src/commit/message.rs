// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit message under validation.

use crate::error::{GuardError, Result};
use std::path::Path;

/// A proposed commit message, trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    text: String,
}

impl CommitMessage {
    /// Create a commit message from raw text.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: text.as_ref().trim_matches(is_trimmed).to_string(),
        }
    }

    /// Read the message git wrote for the `commit-msg` hook.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Reading commit message from: {:?}", path);

        let bytes = std::fs::read(path).map_err(|source| GuardError::ReadMessage {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::new(String::from_utf8_lossy(&bytes)))
    }

    /// The trimmed message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if nothing is left after trimming.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the first line (header) of the message.
    pub fn first_line(&self) -> &str {
        self.text.lines().next().unwrap_or("")
    }
}

/// Characters stripped from both ends: Unicode whitespace and line
/// separators plus a byte order mark, but not NEL (U+0085).
fn is_trimmed(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

impl std::fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
