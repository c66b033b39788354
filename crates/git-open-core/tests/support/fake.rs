//! In-memory stand-ins for git.

use std::fs;
use std::path::{Path, PathBuf};

use git_open_core::git::{GitAccessor, ProviderConfigSource};
use tempfile::TempDir;

/// Answers git queries from fixed values.
#[derive(Debug, Clone, Default)]
pub struct FakeGit {
    pub git_dir: Option<PathBuf>,
    pub remote_url: Option<String>,
    pub reference: Option<String>,
    pub config_lines: Vec<String>,
}

impl GitAccessor for FakeGit {
    fn git_dir(&self, _dir: &Path) -> anyhow::Result<PathBuf> {
        self.git_dir
            .clone()
            .ok_or_else(|| anyhow::anyhow!("fatal: not a git repository"))
    }

    fn remote_url(&self, _git_dir: &Path) -> anyhow::Result<String> {
        self.remote_url
            .clone()
            .ok_or_else(|| anyhow::anyhow!("fatal: No remote configured to list refs from."))
    }

    fn current_ref(&self, _git_dir: &Path) -> anyhow::Result<String> {
        self.reference
            .clone()
            .ok_or_else(|| anyhow::anyhow!("fatal: ambiguous argument 'HEAD'"))
    }
}

impl ProviderConfigSource for FakeGit {
    fn provider_config_lines(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.config_lines.clone())
    }
}

/// A working tree on disk (no real git metadata beyond an empty `.git`).
pub struct FakeCheckout {
    _temp: TempDir,
    pub root: PathBuf,
}

impl FakeCheckout {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("git-open");
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::create_dir_all(root.join("open")).unwrap();
        fs::write(root.join("LICENSE"), "MIT").unwrap();
        fs::write(root.join("open").join("open_test.go"), "").unwrap();
        Self { _temp: temp, root }
    }

    pub fn git(&self, remote: &str, reference: &str) -> FakeGit {
        FakeGit {
            git_dir: Some(self.root.join(".git")),
            remote_url: Some(remote.to_string()),
            reference: Some(reference.to_string()),
            config_lines: Vec::new(),
        }
    }

    pub fn subdir(&self) -> PathBuf {
        self.root.join("open")
    }
}
