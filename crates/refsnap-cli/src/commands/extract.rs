//! Extract command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use refsnap_core::{load_manifest, CloneSource};
use refsnap_extract::{Extractor, RepoCache, RunStats};
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Color, Modify, Style},
    Table,
};
use tempfile::TempDir;

use crate::output::CommitRow;

/// Runs the full pipeline: load manifest, clone/open repos, write snapshots
pub fn cmd_extract(
    manifest: PathBuf,
    output: PathBuf,
    cache_dir: Option<PathBuf>,
    source: CloneSource,
) -> Result<()> {
    let references = load_manifest(&manifest)?;
    log::info!("Loaded {} commit references from {:?}", references.len(), manifest);
    log::info!("Clone source: {}/{}", source.host, source.org);

    // Clone cache: a user-supplied directory persists clones across runs.
    // Without one, clones live in a scoped temp dir deleted at process exit
    // (best effort on abnormal termination).
    let (tmp_guard, cache_base) = match cache_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create cache directory {:?}", dir))?;
            (None, dir)
        }
        None => {
            let tmp = TempDir::new().context("Failed to create temporary cache directory")?;
            let path = tmp.path().to_path_buf();
            (Some(tmp), path)
        }
    };
    log::info!("Clone cache: {:?}", cache_base);

    let cache = RepoCache::new(&cache_base, source);
    let mut extractor = Extractor::new(cache, &output);
    let stats = extractor.run(&references)?;

    print_summary(&stats);

    drop(tmp_guard);
    Ok(())
}

fn print_summary(stats: &RunStats) {
    let rows: Vec<CommitRow> = stats.commits.iter().map(CommitRow::from).collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Color::FG_BRIGHT_CYAN));
    println!("{}", table);

    println!("{} {}", "Summary:".bright_cyan().bold(), stats);
}
