//! `git` subprocess implementation of the git traits.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use tracing::debug;

use crate::provider::CONFIG_KEY_PATTERN;

use super::{GitAccessor, ProviderConfigSource};

/// Talks to the `git` binary on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    config_file: Option<PathBuf>,
}

impl GitCli {
    /// Read provider config from the global git config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read provider config from `path` instead of the global git config.
    pub fn with_config_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_file: Some(path.into()),
        }
    }

    /// Run `git -C <dir> <args>` and return trimmed stdout.
    fn run_git_in(dir: &Path, args: &[&str]) -> anyhow::Result<String> {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(dir).args(args);
        let output = cmd
            .output()
            .with_context(|| format!("Failed to run git {:?}", args))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Git command failed {:?}: {}", args, stderr.trim());
        }
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(dir = %dir.display(), ?args, %stdout, "git");
        Ok(stdout)
    }
}

impl GitAccessor for GitCli {
    fn git_dir(&self, dir: &Path) -> anyhow::Result<PathBuf> {
        Self::run_git_in(dir, &["rev-parse", "--git-dir"]).map(PathBuf::from)
    }

    fn remote_url(&self, git_dir: &Path) -> anyhow::Result<String> {
        let url = Self::run_git_in(git_dir, &["ls-remote", "--get-url"])?;
        if url.is_empty() {
            anyhow::bail!("No remote configured");
        }
        Ok(url)
    }

    fn current_ref(&self, git_dir: &Path) -> anyhow::Result<String> {
        Self::run_git_in(git_dir, &["rev-parse", "--abbrev-ref", "HEAD"])
    }
}

impl ProviderConfigSource for GitCli {
    fn provider_config_lines(&self) -> anyhow::Result<Vec<String>> {
        let mut cmd = Command::new("git");
        cmd.arg("config");
        match &self.config_file {
            Some(path) => cmd.arg("--file").arg(path),
            None => cmd.arg("--global"),
        };
        cmd.args(["--get-regexp", CONFIG_KEY_PATTERN]);

        let output = cmd
            .output()
            .context("Failed to run git config --get-regexp")?;

        // Exit status 1 means no key matched.
        if output.status.code() == Some(1) {
            return Ok(Vec::new());
        }
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git config --get-regexp failed: {}", stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
