//! Git access for the resolution pipeline.
//!
//! The pipeline only needs three repository queries plus read access to
//! the provider keys in git config. Both are expressed as narrow traits so
//! callers can substitute in-memory stand-ins; [`GitCli`] implements them by
//! shelling out to the `git` binary.

mod cli;

pub use cli::GitCli;

use std::path::{Path, PathBuf};

/// Repository queries consumed by the resolver.
pub trait GitAccessor {
    /// Git directory of the repository containing `dir`. May be relative
    /// to `dir`.
    fn git_dir(&self, dir: &Path) -> anyhow::Result<PathBuf>;

    /// URL of the repository's default remote.
    fn remote_url(&self, git_dir: &Path) -> anyhow::Result<String>;

    /// Current branch name, or `HEAD` when detached.
    fn current_ref(&self, git_dir: &Path) -> anyhow::Result<String>;
}

/// Read-only access to `open.<base-url>.<property>` config entries.
pub trait ProviderConfigSource {
    /// Matching entries as `key value` lines.
    fn provider_config_lines(&self) -> anyhow::Result<Vec<String>>;
}

impl<T: GitAccessor + ?Sized> GitAccessor for &T {
    fn git_dir(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        (**self).git_dir(dir)
    }

    fn remote_url(&self, git_dir: &Path) -> anyhow::Result<String> {
        (**self).remote_url(git_dir)
    }

    fn current_ref(&self, git_dir: &Path) -> anyhow::Result<String> {
        (**self).current_ref(git_dir)
    }
}
