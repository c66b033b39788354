//! Config path resolution helpers.

use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = "git-open";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// `<config dir>/git-open/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| config_path_in(&dir))
}

pub fn config_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}
