//! Output formatting structures for CLI display

use refsnap_extract::CommitSummary;
use tabled::Tabled;

/// Table row for the end-of-run extraction summary
#[derive(Tabled)]
pub struct CommitRow {
    #[tabled(rename = "Project")]
    pub project: String,
    #[tabled(rename = "Commit")]
    pub commit: String,
    #[tabled(rename = "Written")]
    pub written: String,
    #[tabled(rename = "Skipped")]
    pub skipped: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl From<&CommitSummary> for CommitRow {
    fn from(summary: &CommitSummary) -> Self {
        if summary.already_done {
            Self {
                project: summary.reference.project.clone(),
                commit: summary.reference.short_sha().to_string(),
                written: "-".to_string(),
                skipped: "-".to_string(),
                status: "exists".to_string(),
            }
        } else {
            Self {
                project: summary.reference.project.clone(),
                commit: summary.reference.short_sha().to_string(),
                written: summary.files_written.to_string(),
                skipped: summary.files_skipped.to_string(),
                status: "extracted".to_string(),
            }
        }
    }
}

/// Table row for the dry-run plan listing
#[derive(Tabled)]
pub struct PlanRow {
    #[tabled(rename = "Project")]
    pub project: String,
    #[tabled(rename = "Commit")]
    pub commit: String,
    #[tabled(rename = "Clone URL")]
    pub clone_url: String,
    #[tabled(rename = "Output Dir")]
    pub output_dir: String,
}
