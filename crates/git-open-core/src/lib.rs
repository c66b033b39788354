//! git-open Core Library
//!
//! Resolves a path, commit SHA or nothing at all against the local git
//! checkout and renders the matching web URL on a hosted code forge.

pub mod argument;
pub mod browser;
pub mod config;
pub mod error;
pub mod git;
pub mod path;
pub mod provider;
pub mod remote;
pub mod resolve;

pub use error::{OpenError, Result};

/// Re-exports of commonly used types
pub mod prelude {
    // Classification
    pub use crate::argument::{ArgumentKind, classify};

    // Providers
    pub use crate::provider::{
        Provider, ProviderRegistry, default_providers, find_provider, load_configured_providers,
        load_user_providers,
    };

    // Pipeline
    pub use crate::path::{resolve_path, resolve_path_from};
    pub use crate::remote::{Remote, parse_remote};
    pub use crate::resolve::{Resolution, ResolutionContext, Resolver};

    // External collaborators
    pub use crate::browser::{Browser, SystemBrowser};
    pub use crate::git::{GitAccessor, GitCli, ProviderConfigSource};

    // Configuration
    pub use crate::config::{OpenConfig, ProviderEntry};

    // Errors
    pub use crate::error::{OpenError, Result};
}
