//! Hosting providers and their URL conventions.
//!
//! This module provides:
//! - The built-in provider list (GitHub, GitLab, Bitbucket)
//! - Parsing of user-declared providers from `open.<base-url>.*` config keys
//! - Host matching and URL rendering

mod config;
mod registry;
mod render;

pub use config::{CONFIG_KEY_PATTERN, load_configured_providers, load_user_providers};
pub use registry::{ProviderRegistry, default_providers, find_provider};
pub use render::escape_path;

/// A hosting platform's base URL plus the path segments that precede a
/// commit SHA and a `<ref>/<path>` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    base_url: String,
    commit_segment: String,
    tree_segment: String,
}

impl Provider {
    /// Create a provider. A trailing `/` on `base_url` is dropped.
    pub fn new(
        base_url: impl Into<String>,
        commit_segment: impl Into<String>,
        tree_segment: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            commit_segment: commit_segment.into(),
            tree_segment: tree_segment.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn commit_segment(&self) -> &str {
        &self.commit_segment
    }

    pub fn tree_segment(&self) -> &str {
        &self.tree_segment
    }
}
