//! Single-file extraction logic

use git2::{Repository, Tree};
use std::fmt;
use std::path::Path;

/// Why one side of a file was not written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The path does not exist in this tree (added or deleted file)
    MissingInTree,

    /// The path resolves to something other than a blob (e.g. a submodule)
    NotAFile,

    /// The blob content is not valid UTF-8
    NotUtf8,

    /// Filesystem write failed for this file only
    Io(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingInTree => write!(f, "missing in tree"),
            SkipReason::NotAFile => write!(f, "not a file"),
            SkipReason::NotUtf8 => write!(f, "not valid UTF-8"),
            SkipReason::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

/// Result of attempting to materialize one side of one changed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// Content was decoded and written to disk
    Written,

    /// This side was skipped; the other side is unaffected
    Skipped(SkipReason),
}

/// Extracts `rel_path` from `tree` and writes it under `dest_root`
///
/// Never fails the run: every per-file error is folded into a
/// [`SkipReason`]. Partial snapshots are acceptable output by contract —
/// a renamed or added/deleted file legitimately produces one side only.
pub fn extract_side(
    repo: &Repository,
    tree: &Tree<'_>,
    rel_path: &Path,
    dest_root: &Path,
) -> ExtractOutcome {
    let entry = match tree.get_path(rel_path) {
        Ok(entry) => entry,
        Err(_) => return ExtractOutcome::Skipped(SkipReason::MissingInTree),
    };

    let object = match entry.to_object(repo) {
        Ok(object) => object,
        Err(e) => return ExtractOutcome::Skipped(SkipReason::Io(e.to_string())),
    };

    let blob = match object.as_blob() {
        Some(blob) => blob,
        None => return ExtractOutcome::Skipped(SkipReason::NotAFile),
    };

    let content = match std::str::from_utf8(blob.content()) {
        Ok(content) => content,
        Err(_) => return ExtractOutcome::Skipped(SkipReason::NotUtf8),
    };

    let dest = dest_root.join(rel_path);
    if let Some(parent) = dest.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            return ExtractOutcome::Skipped(SkipReason::Io(e.to_string()));
        }
    }
    if let Err(e) = std::fs::write(&dest, content) {
        return ExtractOutcome::Skipped(SkipReason::Io(e.to_string()));
    }

    ExtractOutcome::Written
}
