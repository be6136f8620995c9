//! Main extractor structure and the sequential driver loop

use anyhow::{Context, Result};
use refsnap_core::CommitRef;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cache::RepoCache;
use crate::formatting::{format_duration, format_number};
use crate::processing::snapshot_commit;
use crate::stats::RunStats;

/// Main extractor structure
///
/// Owns the bare-clone cache and the output root, and drives the strictly
/// sequential extraction loop: one commit is fully processed (cloned or
/// opened, diffed, files written) before the next reference is considered.
pub struct Extractor {
    /// Bare clone cache, shared across all commits of a run
    cache: RepoCache,

    /// Root of the output tree (`<root>/<project>/<sha>/{before,after}/...`)
    output_root: PathBuf,
}

impl Extractor {
    /// Creates a new extractor writing under `output_root`
    pub fn new<P: AsRef<Path>>(cache: RepoCache, output_root: P) -> Self {
        Self {
            cache,
            output_root: output_root.as_ref().to_path_buf(),
        }
    }

    /// Processes every commit reference in order
    ///
    /// A commit whose output directory already exists is skipped without
    /// touching the repository (idempotency check). Any error other than a
    /// per-file extraction failure aborts the run, leaving later references
    /// unprocessed.
    pub fn run(&mut self, references: &[CommitRef]) -> Result<RunStats> {
        let start_time = Instant::now();
        let mut stats = RunStats::default();

        log::info!("Extracting snapshots for {} commits", references.len());

        for reference in references {
            let commit_dir = self.output_root.join(reference.relative_dir());

            // Idempotency: a fully processed commit is never reprocessed.
            // Existence of the directory is the only completion marker.
            if commit_dir.exists() {
                log::info!("Skipping {} (output already exists)", reference);
                stats.record_skipped(reference);
                continue;
            }

            let repo = self.cache.open_or_clone(&reference.project)?;
            let commit_stats = snapshot_commit(repo, reference, &commit_dir)
                .with_context(|| format!("Failed to snapshot {}", reference))?;

            log::info!(
                "{}: {} files written, {} skipped",
                reference,
                commit_stats.files_written,
                commit_stats.files_skipped
            );
            stats.record_processed(reference, &commit_stats);
        }

        stats.elapsed_time = start_time.elapsed();

        log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        log::info!("Extraction completed!");
        log::info!("   • Total time:       {}", format_duration(stats.elapsed_time));
        log::info!(
            "   • Commits:          {} processed, {} skipped",
            format_number(stats.commits_processed),
            format_number(stats.commits_skipped)
        );
        log::info!(
            "   • Files:            {} written, {} skipped",
            format_number(stats.files_written),
            format_number(stats.files_skipped)
        );

        Ok(stats)
    }
}
