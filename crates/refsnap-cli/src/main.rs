//! Refsnap CLI - Before/after snapshot extraction for commit lists
//!
//! Provides:
//! - Extraction of changed-file snapshots for every commit in a manifest
//! - Dry-run inspection of a manifest without network access

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use refsnap_core::CloneSource;
use std::path::PathBuf;

use commands::{cmd_extract, cmd_plan};

#[derive(Parser)]
#[command(name = "refsnap")]
#[command(about = "Extracts before/after file snapshots for a list of GitHub commits", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extracts snapshots for every commit in the manifest
    Extract {
        /// Manifest file: a JSON array of commit URLs, or one URL per line
        #[arg(short, long)]
        manifest: PathBuf,

        /// Root directory for the extracted snapshot tree
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Directory for bare clones, reused across runs.
        /// Default is a temporary directory deleted at process exit.
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// Host to clone mirrored repositories from
        #[arg(long, default_value = CloneSource::DEFAULT_HOST)]
        clone_host: String,

        /// Org that owns the mirrored repositories
        #[arg(long, default_value = CloneSource::DEFAULT_ORG)]
        clone_org: String,
    },

    /// Parses the manifest and lists commits without cloning anything
    Plan {
        /// Manifest file: a JSON array of commit URLs, or one URL per line
        #[arg(short, long)]
        manifest: PathBuf,

        /// Host to clone mirrored repositories from
        #[arg(long, default_value = CloneSource::DEFAULT_HOST)]
        clone_host: String,

        /// Org that owns the mirrored repositories
        #[arg(long, default_value = CloneSource::DEFAULT_ORG)]
        clone_org: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&cli.log_level)
    ).init();

    match cli.command {
        Commands::Extract { manifest, output, cache_dir, clone_host, clone_org } => {
            cmd_extract(manifest, output, cache_dir, CloneSource::new(clone_host, clone_org))?;
        }
        Commands::Plan { manifest, clone_host, clone_org } => {
            cmd_plan(manifest, CloneSource::new(clone_host, clone_org))?;
        }
    }

    Ok(())
}
