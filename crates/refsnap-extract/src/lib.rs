//! Refsnap Extract - Commit snapshot engine
//!
//! This crate is responsible for:
//! - Maintaining a cache of bare clones, one per project
//! - Resolving each commit and diffing it against its first parent
//! - Writing before/after versions of every changed file to disk
//! - Collecting run statistics

mod cache;
mod extractor;
mod formatting;
mod processing;
mod stats;

pub use cache::RepoCache;
pub use extractor::Extractor;
pub use processing::{extract_side, ExtractOutcome, SkipReason};
pub use stats::{CommitStats, CommitSummary, RunStats};
