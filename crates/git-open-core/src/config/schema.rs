//! Configuration schema for config.toml

use serde::{Deserialize, Serialize};
use url::Url;

use crate::provider::Provider;

/// Root configuration structure for config.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenConfig {
    /// Providers added to (or overriding) the built-in ones
    #[serde(default)]
    pub providers: Vec<ProviderEntry>,
}

/// A provider declared in config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEntry {
    /// Base URL, e.g. `https://git.example.dev`
    pub base_url: String,

    /// Path segment before a commit SHA
    #[serde(default)]
    pub commit_segment: String,

    /// Path segment before `<ref>/<path>`
    #[serde(default)]
    pub tree_segment: String,
}

impl OpenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check every provider has an absolute http(s) base URL.
    pub fn validate(&self) -> anyhow::Result<()> {
        for entry in &self.providers {
            let url = Url::parse(&entry.base_url).map_err(|e| {
                anyhow::anyhow!("Invalid provider base_url '{}': {}", entry.base_url, e)
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                anyhow::bail!(
                    "Provider base_url '{}' must use http or https",
                    entry.base_url
                );
            }
            if url.host_str().is_none_or(str::is_empty) {
                anyhow::bail!("Provider base_url '{}' has no host", entry.base_url);
            }
        }
        Ok(())
    }

    /// Providers in declaration order.
    pub fn providers(&self) -> Vec<Provider> {
        self.providers.iter().map(Provider::from).collect()
    }
}

impl From<&ProviderEntry> for Provider {
    fn from(entry: &ProviderEntry) -> Self {
        Provider::new(
            entry.base_url.as_str(),
            entry.commit_segment.as_str(),
            entry.tree_segment.as_str(),
        )
    }
}
