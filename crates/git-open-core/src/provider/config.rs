//! Parser for providers declared in git config.
//!
//! The git config structure uses the base URL as the subsection name:
//!
//! ```text
//! [open "https://git.mydomain.dev"]
//!   commitprefix = -/commit
//!   pathprefix = -/tree
//! ```
//!
//! `git config --get-regexp` flattens that into `key value` lines such as
//! `open.https://git.mydomain.dev.commitprefix -/commit`.

use std::collections::BTreeMap;

use tracing::warn;

use crate::git::ProviderConfigSource;

use super::Provider;

/// Key pattern handed to `git config --get-regexp`.
pub const CONFIG_KEY_PATTERN: &str = r"^open\..*prefix$";

const KEY_PREFIX: &str = "open.";
const COMMIT_PROPERTY: &str = "commitprefix";
const TREE_PROPERTY: &str = "pathprefix";

#[derive(Debug, Default)]
struct PartialProvider {
    commit_segment: String,
    tree_segment: String,
}

/// Parse `key value` config lines into providers.
///
/// The last dot-separated segment of the key names the property; everything
/// before it is the base URL. A base URL missing one of the two properties
/// gets an empty segment for it. Output is sorted by base URL.
pub fn load_user_providers<I, S>(lines: I) -> Vec<Provider>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut partials: BTreeMap<String, PartialProvider> = BTreeMap::new();

    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        let rest = line.strip_prefix(KEY_PREFIX).unwrap_or(line);
        let (key, value) = match rest.split_once(' ') {
            Some((key, value)) => (key, value.trim()),
            None => (rest, ""),
        };

        let Some((base_url, property)) = key.rsplit_once('.') else {
            warn!(line, "ignoring provider config line without a property");
            continue;
        };
        let base_url = base_url.trim_end_matches('/');
        if base_url.is_empty() {
            warn!(line, "ignoring provider config line without a base URL");
            continue;
        }

        let property = property.to_ascii_lowercase();
        let slot = match property.as_str() {
            COMMIT_PROPERTY => {
                &mut partials
                    .entry(base_url.to_string())
                    .or_default()
                    .commit_segment
            }
            TREE_PROPERTY => {
                &mut partials
                    .entry(base_url.to_string())
                    .or_default()
                    .tree_segment
            }
            _ => {
                warn!(line, property = %property, "ignoring unknown provider property");
                continue;
            }
        };
        *slot = value.to_string();
    }

    partials
        .into_iter()
        .map(|(base_url, p)| Provider::new(base_url, p.commit_segment, p.tree_segment))
        .collect()
}

/// Read and parse providers from a config source.
///
/// An unreadable source is logged and treated as declaring no providers.
pub fn load_configured_providers<S>(source: &S) -> Vec<Provider>
where
    S: ProviderConfigSource + ?Sized,
{
    match source.provider_config_lines() {
        Ok(lines) => load_user_providers(lines),
        Err(e) => {
            warn!(error = %e, "unable to read provider config");
            Vec::new()
        }
    }
}
