//! Provider registry: built-in defaults, merging and host lookup.

use tracing::debug;

use crate::error::{OpenError, Result};

use super::Provider;

/// The built-in providers, in lookup order.
pub fn default_providers() -> Vec<Provider> {
    vec![
        Provider::new("https://github.com", "commit", "tree"),
        Provider::new("https://gitlab.com", "-/commit", "-/tree"),
        Provider::new("https://bitbucket.org", "commits", "src"),
    ]
}

/// Find the first provider whose base URL contains `host`.
///
/// Matching is substring containment, not host equality, so a base URL
/// with a path prefix still matches its host. Ties go to declaration order.
/// An empty host never matches.
pub fn find_provider<'a>(providers: &'a [Provider], host: &str) -> Result<&'a Provider> {
    if host.is_empty() {
        return Err(OpenError::ProviderNotFound(host.to_string()));
    }

    providers
        .iter()
        .find(|p| p.base_url().contains(host))
        .ok_or_else(|| OpenError::ProviderNotFound(host.to_string()))
}

/// Ordered list of providers consulted during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRegistry {
    providers: Vec<Provider>,
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Create a registry seeded with the built-in providers.
    pub fn with_defaults() -> Self {
        Self {
            providers: default_providers(),
        }
    }

    /// Merge providers into the registry.
    ///
    /// A provider whose base URL is already registered replaces that entry
    /// in place; any other provider is appended.
    pub fn merge(&mut self, providers: impl IntoIterator<Item = Provider>) {
        for provider in providers {
            match self
                .providers
                .iter()
                .position(|p| p.base_url() == provider.base_url())
            {
                Some(index) => {
                    debug!(base_url = provider.base_url(), "overriding provider");
                    self.providers[index] = provider;
                }
                None => {
                    debug!(base_url = provider.base_url(), "registering provider");
                    self.providers.push(provider);
                }
            }
        }
    }

    /// Builder-style [`merge`](Self::merge).
    pub fn merged(mut self, providers: impl IntoIterator<Item = Provider>) -> Self {
        self.merge(providers);
        self
    }

    /// Get all registered providers.
    pub fn all(&self) -> &[Provider] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// See [`find_provider`].
    pub fn find(&self, host: &str) -> Result<&Provider> {
        find_provider(&self.providers, host)
    }
}
