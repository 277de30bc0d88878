//! CLI argument parsing

use clap::builder::PossibleValuesParser;
use clap::Parser;
use std::path::PathBuf;

use crate::config::{credentials, defaults};
use crate::hcp::QueryMode;

/// Workspace audit CLI
#[derive(Parser, Debug)]
#[command(name = "tfe-ws-audit")]
#[command(version)]
#[command(
    about = "Audit TFE organizations for workspaces and write a CSV report",
    long_about = "Audit TFE organizations for workspaces and write a CSV report.\n\n\
                  Organization selection precedence:\n  \
                  1. --orgs (file with one name per line, or comma-separated list)\n  \
                  2. 'organizations' in the config file\n  \
                  3. every organization visible to the token"
)]
pub struct Cli {
    /// Path to YAML config file (must define tfe_url)
    #[arg(short, long)]
    pub config: PathBuf,

    /// File with org names (one per line) or comma-separated list of org names
    #[arg(long)]
    pub orgs: Option<String>,

    /// Operation mode [default: count, or 'mode' from the config file]
    #[arg(short, long, value_enum)]
    pub mode: Option<QueryMode>,

    /// Number of organizations processed concurrently
    /// [default: 5, or 'max_workers' from the config file]
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u16).range(1..))]
    pub max_workers: Option<u16>,

    /// Admin API token (prompted for when not found anywhere)
    #[arg(short = 't', long, env = credentials::ADMIN_TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Exact path of the CSV report
    #[arg(short, long, conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Directory for the timestamped CSV report
    #[arg(long, default_value = defaults::OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Log level
    #[arg(
        short,
        long,
        default_value = defaults::LOG_LEVEL,
        value_parser = PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"])
    )]
    pub log_level: String,

    /// Also append log output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Batch mode: no progress bar and no interactive token prompt
    #[arg(short, long, default_value_t = false)]
    pub batch: bool,
}
