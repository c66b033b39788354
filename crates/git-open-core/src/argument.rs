//! Classification of the single user-supplied argument.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Abbreviated (7) up to SHA-256 length (64) hex object names.
static COMMIT_SHA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{7,64}$").expect("commit SHA pattern is valid")
});

/// What kind of page the argument points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentKind {
    /// The repository landing page.
    Root,
    /// A single commit.
    Commit,
    /// A file or directory in the working tree.
    Path,
}

/// Classify an argument. Total over all strings.
pub fn classify(arg: &str) -> ArgumentKind {
    if arg.is_empty() {
        return ArgumentKind::Root;
    }

    if COMMIT_SHA.is_match(arg) {
        return ArgumentKind::Commit;
    }

    ArgumentKind::Path
}
