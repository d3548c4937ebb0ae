// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Matching a commit message against the convention.

use crate::commit::CommitMessage;
use lazy_static::lazy_static;
use regex::Regex;

use super::convention::{CommitType, SCOPE_CLASS};

/// Any character that does not end a line: `\r`, `\n`, U+2028 and U+2029
/// all break a header or merge line.
const LINE_CHAR: &str = r"[^\r\n\x{2028}\x{2029}]";

lazy_static! {
    /// `type(scope): description` anywhere in the message.
    static ref CONVENTIONAL_REGEX: Regex = Regex::new(&format!(
        r"(?P<type>{})\((?P<scope>{}+)\): {}+",
        CommitType::all()
            .iter()
            .map(CommitType::as_str)
            .collect::<Vec<_>>()
            .join("|"),
        SCOPE_CLASS,
        LINE_CHAR
    ))
    .unwrap();

    /// Git's generated merge messages, e.g.
    /// `Merge remote-tracking branch 'origin/main' into feature-x`.
    static ref MERGE_REGEX: Regex = Regex::new(&format!(
        "Merge{0}* branch {0}* into {0}*",
        LINE_CHAR
    ))
    .unwrap();
}

/// Which accepted shape a message matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Form {
    /// First `type(scope): ` header found in the message.
    Conventional {
        commit_type: CommitType,
        scope: String,
    },
    /// A merge commit announcement.
    Merge,
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Form::Conventional { commit_type, scope } => {
                write!(f, "conventional {}({})", commit_type, scope)
            }
            Form::Merge => write!(f, "merge commit"),
        }
    }
}

/// Outcome of validating one commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(Form),
    Rejected,
}

impl Verdict {
    /// Check if the message passed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }
}

/// Validate a commit message.
pub fn validate(message: &CommitMessage) -> Verdict {
    let text = message.text();

    if let Some(form) = match_conventional(text) {
        return Verdict::Accepted(form);
    }
    if MERGE_REGEX.is_match(text) {
        return Verdict::Accepted(Form::Merge);
    }

    Verdict::Rejected
}

fn match_conventional(text: &str) -> Option<Form> {
    let captures = CONVENTIONAL_REGEX.captures(text)?;
    let commit_type = captures.name("type")?.as_str().parse().ok()?;
    let scope = captures.name("scope")?.as_str().to_string();

    Some(Form::Conventional { commit_type, scope })
}
