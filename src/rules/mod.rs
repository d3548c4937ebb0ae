// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit convention and its enforcement.
//!
//! The convention is fixed at build time: a closed set of types, kebab-case
//! scopes, and an exemption for git's merge messages.

pub mod convention;
mod diagnostic;
mod validator;

pub use convention::CommitType;
pub use diagnostic::Diagnostic;
pub use validator::{validate, Form, Verdict};
