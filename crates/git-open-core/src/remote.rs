//! Git remote parsing.
//!
//! Splits a remote into the host and the repository path the forge serves
//! it under. Supports URL remotes (`https://`, `ssh://`, `git://`) and
//! SCP-like remotes (`git@github.com:owner/repo.git`).

use percent_encoding::percent_decode_str;
use url::Url;

/// Host and normalized repository path of a remote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Remote {
    /// Authority host, with `:port` when a non-default port is set.
    pub host: String,
    /// Repository path without leading/trailing slashes or `.git` suffix.
    pub repo: String,
}

/// Parse a remote string.
///
/// Never fails: input that cannot be parsed yields an empty host and repo,
/// which provider lookup later reports as unusable.
pub fn parse_remote(remote: &str) -> Remote {
    let remote = remote.trim();

    if let Some((host, path)) = split_scp_like(remote) {
        return Remote {
            host: host.to_string(),
            repo: normalize_repo(path),
        };
    }

    let Ok(url) = Url::parse(remote) else {
        return Remote::default();
    };

    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };

    // `Url::path` is still percent-encoded.
    let path = percent_decode_str(url.path()).decode_utf8_lossy();
    Remote {
        host,
        repo: normalize_repo(&path),
    }
}

/// Split `[user@]host:path`. Anything with a scheme, or a `/` before the
/// first `:`, is not SCP-like.
fn split_scp_like(remote: &str) -> Option<(&str, &str)> {
    if remote.contains("://") {
        return None;
    }

    let (authority, path) = remote.split_once(':')?;
    if authority.is_empty() || authority.contains('/') {
        return None;
    }

    let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    if host.is_empty() {
        return None;
    }
    Some((host, path))
}

fn normalize_repo(path: &str) -> String {
    let collapsed = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    collapsed
        .strip_suffix(".git")
        .unwrap_or(&collapsed)
        .trim_matches('/')
        .to_string()
}
