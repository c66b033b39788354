//! Resolution of an argument to a forge URL.
//!
//! Pipeline: locate repository -> classify argument -> resolve path ->
//! read remote and ref -> parse remote -> match provider -> render URL.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::argument::{ArgumentKind, classify};
use crate::error::{OpenError, Result};
use crate::git::GitAccessor;
use crate::path::{normalize, resolve_path_from};
use crate::provider::ProviderRegistry;
use crate::remote::{Remote, parse_remote};

/// Everything gathered while resolving one argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionContext {
    /// Absolute git directory.
    pub git_dir: PathBuf,
    /// Working tree root.
    pub repo_root: PathBuf,
    pub remote_url: String,
    pub reference: String,
    pub kind: ArgumentKind,
    /// Repository-relative path, empty unless `kind` is `Path`.
    pub path: String,
    pub remote: Remote,
}

/// A rendered URL plus the context that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub url: String,
    /// Base URL of the matched provider.
    pub provider: String,
    pub context: ResolutionContext,
}

/// Resolves arguments against a repository using a provider registry.
///
/// Only the built-in providers are consulted unless a merged registry is
/// supplied with [`Resolver::with_registry`].
#[derive(Debug, Clone)]
pub struct Resolver<G> {
    git: G,
    registry: ProviderRegistry,
}

impl<G: GitAccessor> Resolver<G> {
    pub fn new(git: G) -> Self {
        Self {
            git,
            registry: ProviderRegistry::with_defaults(),
        }
    }

    pub fn with_registry(mut self, registry: ProviderRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Resolve `arg` from the process working directory.
    pub fn resolve(&self, arg: &str) -> Result<String> {
        let cwd = std::env::current_dir().map_err(|_| OpenError::NotARepository)?;
        self.resolve_in(&cwd, arg)
    }

    /// Resolve `arg` as if invoked from `working_dir`.
    pub fn resolve_in(&self, working_dir: &Path, arg: &str) -> Result<String> {
        self.resolve_context(working_dir, arg).map(|r| r.url)
    }

    /// Resolve `arg` and keep the intermediate context.
    pub fn resolve_context(&self, working_dir: &Path, arg: &str) -> Result<Resolution> {
        let git_dir = self.git.git_dir(working_dir).map_err(|e| {
            debug!(dir = %working_dir.display(), error = %e, "git dir lookup failed");
            OpenError::NotARepository
        })?;
        let git_dir = normalize(&working_dir.join(git_dir));
        let repo_root = repository_root(&git_dir);
        debug!(git_dir = %git_dir.display(), repo_root = %repo_root.display(), "located repository");

        let kind = classify(arg);
        let path = match kind {
            ArgumentKind::Path => resolve_path_from(arg, &repo_root, working_dir)?,
            ArgumentKind::Root | ArgumentKind::Commit => String::new(),
        };
        debug!(arg, ?kind, path = %path, "classified argument");

        let remote_url = self
            .git
            .remote_url(&git_dir)
            .map_err(|e| OpenError::RemoteUnavailable(format!("{e:#}")))?;
        let reference = self
            .git
            .current_ref(&git_dir)
            .map_err(|e| OpenError::RemoteUnavailable(format!("{e:#}")))?;

        let remote = parse_remote(&remote_url);
        debug!(%remote_url, host = %remote.host, repo = %remote.repo, %reference, "parsed remote");

        let provider = self.registry.find(&remote.host)?;

        let url = match kind {
            ArgumentKind::Root => provider.root_url(&remote.repo),
            ArgumentKind::Path => provider.path_url(&remote.repo, &reference, &path),
            ArgumentKind::Commit => provider.commit_url(&remote.repo, arg),
        };
        debug!(provider = provider.base_url(), %url, "rendered URL");

        Ok(Resolution {
            url,
            provider: provider.base_url().to_string(),
            context: ResolutionContext {
                git_dir,
                repo_root,
                remote_url,
                reference,
                kind,
                path,
                remote,
            },
        })
    }
}

/// Working tree root for a git directory: the directory path with a
/// trailing `.git` removed.
fn repository_root(git_dir: &Path) -> PathBuf {
    let raw = git_dir.to_string_lossy();
    match raw.strip_suffix(".git") {
        Some(root) if !root.is_empty() => normalize(Path::new(root)),
        _ => git_dir.to_path_buf(),
    }
}
