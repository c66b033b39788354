//! Real-repository fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use git2::{IndexAddOption, Repository, Signature};
use tempfile::TempDir;

const GIT_ENV_OVERRIDES: [&str; 4] = [
    "GIT_DIR",
    "GIT_WORK_TREE",
    "GIT_INDEX_FILE",
    "GIT_COMMON_DIR",
];

pub fn git_command() -> Command {
    let mut cmd = Command::new("git");
    for key in GIT_ENV_OVERRIDES {
        cmd.env_remove(key);
    }
    cmd
}

/// Tests driving the `git` binary skip themselves when it is missing.
pub fn git_available() -> bool {
    git_command()
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn commit_all(repo: &Repository, message: &str) -> git2::Oid {
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let sig = Signature::now("Test User", "test@example.com").unwrap();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
        .unwrap()
}

/// A committed repository on branch `main` with an `origin` remote:
///
/// ```text
/// repo/
///   LICENSE
///   open/
///     open.rs
///     file with a space.txt
/// ```
pub struct FixtureRepo {
    _temp: TempDir,
    pub root: PathBuf,
    pub head: git2::Oid,
}

impl FixtureRepo {
    pub fn new(remote: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap().join("repo");
        fs::create_dir_all(root.join("open")).unwrap();
        fs::write(root.join("LICENSE"), "MIT").unwrap();
        fs::write(root.join("open").join("open.rs"), "fn main() {}\n").unwrap();
        fs::write(root.join("open").join("file with a space.txt"), "").unwrap();

        let repo = Repository::init(&root).unwrap();
        repo.set_head("refs/heads/main").unwrap();
        repo.remote("origin", remote).unwrap();
        let head = commit_all(&repo, "init");

        Self {
            _temp: temp,
            root,
            head,
        }
    }

    pub fn subdir(&self) -> PathBuf {
        self.root.join("open")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn parent(&self) -> &Path {
        self.root.parent().unwrap()
    }
}
