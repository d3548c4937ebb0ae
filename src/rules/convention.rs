// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The compiled-in commit convention.
//!
//! Format: `type(scope): description`, optionally ending in an issue
//! reference such as `#12`. Nothing here is read at runtime.

/// The header template shown to authors.
pub const TEMPLATE: &str = "type(scope): description";

/// Scopes used in this repository. Shown as guidance only; any kebab-case
/// scope is accepted.
pub const EXAMPLE_SCOPES: &[&str] = &[
    "skills", "commands", "agents", "hooks", "docs", "plugin", "scripts", "readme",
];

/// Worked examples printed with every rejection.
pub const EXAMPLES: &[&str] = &[
    "feat(skills): add angular-signals skill",
    "fix(commands): correct generate path resolution",
    "docs(readme): update installation instructions",
    "chore(plugin): bump version to 1.0.0",
];

/// Character class a scope is built from.
pub const SCOPE_CLASS: &str = "[a-z0-9-]";

/// Commit type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Test,
    Chore,
    Perf,
    Ci,
    Build,
    Hotfix,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
            CommitType::Perf => "perf",
            CommitType::Ci => "ci",
            CommitType::Build => "build",
            CommitType::Hotfix => "hotfix",
        }
    }

    /// Get all commit types, in the order they are documented.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Docs,
            CommitType::Style,
            CommitType::Refactor,
            CommitType::Test,
            CommitType::Chore,
            CommitType::Perf,
            CommitType::Ci,
            CommitType::Build,
            CommitType::Hotfix,
        ]
    }
}

impl std::str::FromStr for CommitType {
    type Err = ();

    /// Case-sensitive: `Feat` is not a commit type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
