//! URL rendering for the three page shapes a provider serves.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::Provider;

/// Characters left literal when escaping a URL path segment: the unreserved
/// set plus the sub-delimiters that are legal inside a segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

impl Provider {
    /// URL of the repository landing page.
    pub fn root_url(&self, repo: &str) -> String {
        escape_path(&[self.base_url(), repo].join("/"))
    }

    /// URL of a file or directory at `reference`.
    pub fn path_url(&self, repo: &str, reference: &str, path: &str) -> String {
        escape_path(&[self.base_url(), repo, self.tree_segment(), reference, path].join("/"))
    }

    /// URL of a single commit.
    pub fn commit_url(&self, repo: &str, sha: &str) -> String {
        escape_path(&[self.base_url(), repo, self.commit_segment(), sha].join("/"))
    }
}

/// Percent-encode `url` as a path segment, keep `/` separators literal and
/// drop one trailing `/`.
pub fn escape_path(url: &str) -> String {
    let encoded = utf8_percent_encode(url, PATH_SEGMENT_ENCODE_SET)
        .to_string()
        .replace("%2F", "/");
    match encoded.strip_suffix('/') {
        Some(trimmed) => trimmed.to_string(),
        None => encoded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::default_providers;

    const REPO: &str = "arbourd/git-open";

    #[test]
    fn commit_urls() {
        let urls: Vec<String> = default_providers()
            .iter()
            .map(|p| p.commit_url(REPO, "7605d91"))
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://github.com/arbourd/git-open/commit/7605d91",
                "https://gitlab.com/arbourd/git-open/-/commit/7605d91",
                "https://bitbucket.org/arbourd/git-open/commits/7605d91",
            ]
        );
    }

    #[test]
    fn path_urls() {
        let urls: Vec<String> = default_providers()
            .iter()
            .map(|p| p.path_url(REPO, "main", "LICENSE"))
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://github.com/arbourd/git-open/tree/main/LICENSE",
                "https://gitlab.com/arbourd/git-open/-/tree/main/LICENSE",
                "https://bitbucket.org/arbourd/git-open/src/main/LICENSE",
            ]
        );
    }

    #[test]
    fn root_urls() {
        let urls: Vec<String> = default_providers()
            .iter()
            .map(|p| p.root_url(REPO))
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://github.com/arbourd/git-open",
                "https://gitlab.com/arbourd/git-open",
                "https://bitbucket.org/arbourd/git-open",
            ]
        );
    }

    #[test]
    fn encoded_remote_renders_single_escape() {
        let remote = crate::remote::parse_remote("https://github.com/my%20org/repo.git");
        assert_eq!(
            default_providers()[0].root_url(&remote.repo),
            "https://github.com/my%20org/repo"
        );
    }

    #[test]
    fn empty_path_drops_trailing_slash() {
        let github = &default_providers()[0];
        assert_eq!(
            github.path_url(REPO, "main", ""),
            "https://github.com/arbourd/git-open/tree/main"
        );
    }

    #[test]
    fn escape_leaves_plain_urls_alone() {
        assert_eq!(
            escape_path("https://github.com/arbourd/git-open"),
            "https://github.com/arbourd/git-open"
        );
    }

    #[test]
    fn escape_encodes_spaces_and_reserved_characters() {
        assert_eq!(
            escape_path("https://github.com/arbourd/git-open/tree/main/file with a space.txt"),
            "https://github.com/arbourd/git-open/tree/main/file%20with%20a%20space.txt"
        );
        assert_eq!(
            escape_path("https://github.com/o/r/tree/main/a?b#c;d,e"),
            "https://github.com/o/r/tree/main/a%3Fb%23c%3Bd%2Ce"
        );
        assert_eq!(
            escape_path("https://github.com/o/r/tree/main/café"),
            "https://github.com/o/r/tree/main/caf%C3%A9"
        );
    }
}
