//! Browser utilities
//!
//! Opening URLs in the system's default browser.

use tracing::debug;

use crate::error::{OpenError, Result};

/// Something that can show a URL to the user.
pub trait Browser {
    fn open(&self, url: &str) -> Result<()>;
}

/// Launches the platform's default browser through the `open` crate.
///
/// The launcher is detached and not waited on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        debug!(url, "launching browser");
        launch_result(open::that_detached(url))
    }
}

fn launch_result(result: std::io::Result<()>) -> Result<()> {
    result.map_err(|e| OpenError::BrowserLaunchFailed(e.to_string()))
}
