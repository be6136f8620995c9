//! Commit snapshot logic
//!
//! This module handles the core extraction work:
//! - Snapshotting a single commit against its first parent (commit.rs)
//! - Materializing one file from one tree (file.rs)

mod commit;
mod file;

pub(crate) use commit::snapshot_commit;
pub use file::{extract_side, ExtractOutcome, SkipReason};
