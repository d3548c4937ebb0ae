// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// commit-msg-hook - conventional commit gate
///
/// Register as git's `commit-msg` hook; git passes the path of the file
/// holding the proposed message.
#[derive(Parser, Debug)]
#[command(name = "commit-msg-hook")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Reject commit messages that are not type(scope): description", long_about = None)]
pub struct Cli {
    /// File holding the proposed commit message (e.g. .git/COMMIT_EDITMSG)
    #[arg(value_name = "MESSAGE_FILE")]
    pub message_file: PathBuf,

    /// Anything after the message file is ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra_args: Vec<OsString>,
}
