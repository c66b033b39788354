//! git-open - open the current repository on its code forge
//!
//! Usage:
//!   git-open              # Repository landing page
//!   git-open <path>       # File or directory at the current branch
//!   git-open <sha>        # Commit page
//!   git-open -p <path>    # Print the URL only

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use git_open_core::OpenError;
use git_open_core::argument::ArgumentKind;
use git_open_core::browser::{Browser, SystemBrowser};
use git_open_core::config::{default_config_path, load_config};
use git_open_core::git::{GitCli, ProviderConfigSource};
use git_open_core::provider::{ProviderRegistry, load_configured_providers};
use git_open_core::resolve::{Resolution, Resolver};

#[derive(Parser)]
#[command(name = "git-open")]
#[command(about = "Open the repository, a path, or a commit in your browser", long_about = None)]
#[command(version)]
struct Cli {
    /// Path or commit SHA to open (defaults to the repository root)
    #[arg(value_name = "TARGET")]
    targets: Vec<String>,

    /// Print the URL without launching a browser
    #[arg(short, long)]
    print: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Provider config file (defaults to <config dir>/git-open/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Only use the built-in providers
    #[arg(long)]
    no_user_providers: bool,

    /// Log every resolution step to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum, Default, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable message
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    url: &'a str,
    kind: ArgumentKind,
    provider: &'a str,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the URL
    let fallback = if cli.verbose {
        "git_open_core=debug,git_open=debug,warn"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli, &SystemBrowser) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, browser: &dyn Browser) -> Result<()> {
    let target = single_target(&cli.targets)?;

    let git = GitCli::new();
    let registry = if cli.no_user_providers {
        ProviderRegistry::with_defaults()
    } else {
        build_registry(cli.config.as_deref(), &git)?
    };

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let resolution = Resolver::new(&git)
        .with_registry(registry)
        .resolve_context(&cwd, target)?;

    let stdout = std::io::stdout();
    deliver(&resolution, cli.format, cli.print, browser, &mut stdout.lock())
}

/// The single optional target; more than one is a usage error.
fn single_target(targets: &[String]) -> Result<&str, OpenError> {
    match targets {
        [] => Ok(""),
        [target] => Ok(target.as_str()),
        _ => Err(OpenError::TooManyArguments(targets.len())),
    }
}

/// Built-in providers, then config.toml providers, then git config
/// providers. Later sources override earlier ones with the same base URL.
fn build_registry(
    config_path: Option<&Path>,
    source: &dyn ProviderConfigSource,
) -> Result<ProviderRegistry> {
    let mut registry = ProviderRegistry::with_defaults();

    let path = match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Some(path.to_path_buf())
        }
        None => default_config_path(),
    };
    if let Some(path) = path {
        let config = load_config(&path)?;
        tracing::debug!(path = %path.display(), providers = config.providers.len(), "loaded config file");
        registry.merge(config.providers());
    }

    registry.merge(load_configured_providers(source));
    Ok(registry)
}

fn deliver(
    resolution: &Resolution,
    format: OutputFormat,
    print_only: bool,
    browser: &dyn Browser,
    out: &mut dyn Write,
) -> Result<()> {
    let url = resolution.url.as_str();

    match format {
        OutputFormat::Json => {
            let output = JsonOutput {
                url,
                kind: resolution.context.kind,
                provider: &resolution.provider,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Text if print_only => writeln!(out, "{url}")?,
        OutputFormat::Text => writeln!(out, "Opening {url} in your browser.")?,
    }

    if !print_only {
        browser.open(url)?;
    }
    Ok(())
}
