//! Error kinds surfaced by the resolution pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Every way resolving or opening a URL can fail.
///
/// All variants are terminal for the current invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    #[error("not a git repository")]
    NotARepository,

    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("path is outside the repository: {} (repository root: {})", .path.display(), .root.display())]
    PathOutsideRepository { path: PathBuf, root: PathBuf },

    #[error("unable to read remote or ref: {0}")]
    RemoteUnavailable(String),

    #[error("unable to find provider for: \"{0}\"")]
    ProviderNotFound(String),

    #[error("received {0} args, accepts 1")]
    TooManyArguments(usize),

    #[error("unable to open in browser: {0}")]
    BrowserLaunchFailed(String),
}

pub type Result<T> = std::result::Result<T, OpenError>;
