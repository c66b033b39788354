//! Configuration file for user-declared providers.
//!
//! Lives at `<config dir>/git-open/config.toml`:
//!
//! ```toml
//! [[providers]]
//! base_url = "https://git.example.dev"
//! commit_segment = "-/commit"
//! tree_segment = "-/tree"
//! ```

pub mod parser;
pub mod paths;
pub mod schema;

pub use parser::{load_config, parse_config_str};
pub use paths::default_config_path;
pub use schema::{OpenConfig, ProviderEntry};
