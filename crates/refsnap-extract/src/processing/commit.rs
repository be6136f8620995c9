//! Commit snapshot logic

use anyhow::{Context, Result};
use git2::{Oid, Repository};
use refsnap_core::CommitRef;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::file::{extract_side, ExtractOutcome};
use crate::formatting::format_unix_timestamp;
use crate::stats::CommitStats;

/// Snapshots one commit: writes every changed file's before/after content
/// under `commit_dir/{before,after}/`
///
/// The "before" baseline is the first parent; a root commit is a hard error
/// that aborts the whole run. Per-file failures on either side are folded
/// into skip counts and never propagate.
pub(crate) fn snapshot_commit(
    repo: &Repository,
    reference: &CommitRef,
    commit_dir: &Path,
) -> Result<CommitStats> {
    let oid = Oid::from_str(&reference.sha)
        .with_context(|| format!("Invalid commit SHA: {}", reference.sha))?;
    let commit = repo
        .find_commit(oid)
        .with_context(|| format!("Failed to find commit {}", reference))?;
    let parent = commit
        .parent(0)
        .with_context(|| format!("Commit {} has no parent (root commit)", reference))?;

    let tree = commit.tree().context("Failed to get commit tree")?;
    let parent_tree = parent.tree().context("Failed to get parent tree")?;

    let commit_date = format_unix_timestamp(commit.time().seconds() as u64);
    log::info!("Processing {} ({})", reference, commit_date);

    // Top-level output directories are a hard error if they cannot be created
    let before_dir = commit_dir.join("before");
    let after_dir = commit_dir.join("after");
    std::fs::create_dir_all(&before_dir)
        .with_context(|| format!("Failed to create output directory {:?}", before_dir))?;
    std::fs::create_dir_all(&after_dir)
        .with_context(|| format!("Failed to create output directory {:?}", after_dir))?;

    let paths = changed_paths(repo, &parent_tree, &tree)?;
    log::debug!("{}: {} changed paths", reference, paths.len());

    let mut stats = CommitStats::default();
    for path in &paths {
        record(&mut stats, path, "before", extract_side(repo, &parent_tree, path, &before_dir));
        record(&mut stats, path, "after", extract_side(repo, &tree, path, &after_dir));
    }

    Ok(stats)
}

/// Union of old and new paths across all deltas between the two trees
///
/// A rename therefore contributes both its old path (present in the parent
/// tree only) and its new path (present in the commit tree only).
fn changed_paths(
    repo: &Repository,
    parent_tree: &git2::Tree<'_>,
    tree: &git2::Tree<'_>,
) -> Result<Vec<PathBuf>> {
    let diff = repo
        .diff_tree_to_tree(Some(parent_tree), Some(tree), None)
        .context("Failed to diff commit against its parent")?;

    let mut paths = BTreeSet::new();
    for delta in diff.deltas() {
        if let Some(path) = delta.old_file().path() {
            paths.insert(path.to_path_buf());
        }
        if let Some(path) = delta.new_file().path() {
            paths.insert(path.to_path_buf());
        }
    }

    Ok(paths.into_iter().collect())
}

fn record(stats: &mut CommitStats, path: &Path, side: &str, outcome: ExtractOutcome) {
    match outcome {
        ExtractOutcome::Written => stats.files_written += 1,
        ExtractOutcome::Skipped(reason) => {
            log::debug!("Skipped {}/{:?}: {}", side, path, reason);
            stats.files_skipped += 1;
        }
    }
}
