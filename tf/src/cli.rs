//! CLI argument parsing for templatefinder

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tf")]
#[command(
    author,
    version,
    about = "Find source and archive files inside template directory trees",
    long_about = None
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print full paths instead of paths relative to their root
    #[arg(long)]
    pub absolute: bool,

    /// Root directories to scan (overrides `roots` from the config file)
    #[arg(value_name = "ROOT")]
    pub roots: Vec<PathBuf>,
}

/// Output format for the collected paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One path per line
    Text,
    /// JSON array of paths
    Json,
}

impl Cli {
    /// Roots given on the command line win over the configured ones
    pub fn effective_roots(&self, configured: &[PathBuf]) -> Vec<PathBuf> {
        if self.roots.is_empty() {
            configured.to_vec()
        } else {
            self.roots.clone()
        }
    }
}
