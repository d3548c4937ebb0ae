// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commit-msg-hook.
//!
//! A rejected message is an expected outcome and travels as
//! [`ValidationError::Rejected`]; everything else is environmental and ends
//! the process with a generic diagnostic.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commit-msg-hook operations.
#[derive(Error, Debug)]
pub enum GuardError {
    // Commit message file could not be read
    #[error("Failed to read commit message from {path}: {source}")]
    ReadMessage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation-related errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Commit message does not follow the convention")]
    Rejected,
}

/// Result type alias for commit-msg-hook operations.
pub type Result<T> = std::result::Result<T, GuardError>;
