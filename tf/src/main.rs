use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info, warn};

use templatefinder::TemplateFileCollector;
use templatefinder::cli::{Cli, OutputFormat};
use templatefinder::config::Config;

fn parse_level(level: &str) -> tracing::Level {
    match level.to_uppercase().as_str() {
        "TRACE" => tracing::Level::TRACE,
        "DEBUG" => tracing::Level::DEBUG,
        "INFO" => tracing::Level::INFO,
        "WARN" | "WARNING" => tracing::Level::WARN,
        "ERROR" => tracing::Level::ERROR,
        _ => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", level);
            tracing::Level::WARN
        }
    }
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > default (WARN)
    let level = cli_log_level
        .or(config_log_level)
        .map(parse_level)
        .unwrap_or(tracing::Level::WARN);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize tracing: {}", e))?;

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    let roots = cli.effective_roots(&config.roots);
    debug!(root_count = roots.len(), from_cli = !cli.roots.is_empty(), "Resolved roots");
    if roots.is_empty() {
        warn!("No roots given on the command line or in the config file");
    }

    let collector = TemplateFileCollector::new(config.rules());
    let report = collector.scan(&roots);

    for diagnostic in &report.diagnostics {
        warn!(path = %diagnostic.path().display(), "Skipped subtree: {}", diagnostic);
    }
    info!(
        files = report.files.len(),
        skipped = report.diagnostics.len(),
        "Scan complete"
    );

    let paths = if cli.absolute {
        report.absolute_paths()
    } else {
        report.relative_paths()
    };

    match cli.format {
        OutputFormat::Text => {
            for path in &paths {
                println!("{}", path);
            }
            eprintln!(
                "{} Found {} template files",
                "✓".green(),
                paths.len().to_string().cyan()
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&paths).context("Failed to render JSON output")?;
            println!("{}", json);
        }
    }

    Ok(())
}
