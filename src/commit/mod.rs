// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message loading.

mod message;

pub use message::CommitMessage;
