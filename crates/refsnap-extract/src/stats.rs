//! Statistics and data structures for extraction runs

use refsnap_core::CommitRef;
use std::time::Duration;

use crate::formatting::{format_duration, format_number};

/// Counters for snapshotting a single commit
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommitStats {
    pub files_written: usize,
    pub files_skipped: usize,
}

/// Per-commit record kept for the end-of-run summary
#[derive(Debug, Clone)]
pub struct CommitSummary {
    pub reference: CommitRef,
    pub files_written: usize,
    pub files_skipped: usize,
    /// True when the output directory already existed and the commit was
    /// skipped without touching the repository
    pub already_done: bool,
}

/// Run statistics
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    pub commits_processed: usize,
    pub commits_skipped: usize,
    pub files_written: usize,
    pub files_skipped: usize,
    pub elapsed_time: Duration,
    pub commits: Vec<CommitSummary>,
}

impl RunStats {
    pub(crate) fn record_processed(&mut self, reference: &CommitRef, stats: &CommitStats) {
        self.commits_processed += 1;
        self.files_written += stats.files_written;
        self.files_skipped += stats.files_skipped;
        self.commits.push(CommitSummary {
            reference: reference.clone(),
            files_written: stats.files_written,
            files_skipped: stats.files_skipped,
            already_done: false,
        });
    }

    pub(crate) fn record_skipped(&mut self, reference: &CommitRef) {
        self.commits_skipped += 1;
        self.commits.push(CommitSummary {
            reference: reference.clone(),
            files_written: 0,
            files_skipped: 0,
            already_done: true,
        });
    }
}

impl std::fmt::Display for RunStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Commits: {} processed, {} skipped | Files: {} written, {} skipped | Time: {}",
            format_number(self.commits_processed),
            format_number(self.commits_skipped),
            format_number(self.files_written),
            format_number(self.files_skipped),
            format_duration(self.elapsed_time)
        )
    }
}
