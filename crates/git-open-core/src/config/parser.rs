//! TOML parser with helpful error messages

use super::schema::OpenConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Load config.toml. A missing file is an empty config.
pub fn load_config(path: &Path) -> Result<OpenConfig> {
    if !path.exists() {
        return Ok(OpenConfig::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse config.toml content from string
pub fn parse_config_str(content: &str) -> Result<OpenConfig> {
    let config: OpenConfig =
        toml::from_str(content).map_err(|e| enhance_toml_error(e, content))?;

    config.validate()?;

    Ok(config)
}

/// Enhance TOML parsing errors with the offending line
fn enhance_toml_error(error: toml::de::Error, content: &str) -> anyhow::Error {
    let message = error.message().to_string();

    match error.span() {
        Some(span) => {
            let line_num = content[..span.start.min(content.len())]
                .matches('\n')
                .count()
                + 1;
            let line = content.lines().nth(line_num - 1).unwrap_or_default();
            anyhow::anyhow!(
                "TOML parsing error at line {}: {} ({})",
                line_num,
                message,
                line.trim()
            )
        }
        None => anyhow::anyhow!("TOML parsing error: {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_valid_config() {
        let toml = r#"
[[providers]]
base_url = "https://git.example.dev/"
commit_segment = "-/commit"
tree_segment = "-/tree"

[[providers]]
base_url = "https://gitea.example.org"
tree_segment = "src/branch"
"#;

        let config = parse_config_str(toml).unwrap();
        let providers = config.providers();
        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].base_url(), "https://git.example.dev");
        assert_eq!(providers[0].commit_segment(), "-/commit");
        assert_eq!(providers[1].commit_segment(), "");
        assert_eq!(providers[1].tree_segment(), "src/branch");
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("").unwrap();
        assert!(config.providers.is_empty());
    }

    #[test]
    fn test_parse_invalid_toml_reports_line() {
        let toml = "[[providers]]\nbase_url = \n";
        let err = parse_config_str(toml).unwrap_err().to_string();
        assert!(err.contains("TOML parsing error"), "unexpected error: {err}");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let toml = "[[providers]]\nbase_url = \"ssh://git.example.dev\"\n";
        let err = parse_config_str(toml).unwrap_err().to_string();
        assert!(err.contains("http or https"), "unexpected error: {err}");
    }

    #[test]
    fn test_rejects_missing_base_url() {
        let toml = "[[providers]]\ncommit_segment = \"commit\"\n";
        assert!(parse_config_str(toml).is_err());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = load_config(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, OpenConfig::new());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[providers]]\nbase_url = \"https://git.example.dev\"\ncommit_segment = \"commit\"\ntree_segment = \"tree\""
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.providers.len(), 1);
    }
}
