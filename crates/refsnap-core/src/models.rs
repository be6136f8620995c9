//! Core data models for refsnap

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::error::CoreError;

/// Matches commit URLs of the form `https://<host>/<org>/<project>/commit/<hash>`
fn commit_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^https?://[^/\s]+/([^/\s]+)/([^/\s]+)/commit/([0-9a-fA-F]{6,40})/?$")
            .expect("commit URL regex is valid")
    })
}

/// Reference to a single commit to snapshot
///
/// Parsed from a GitHub commit URL. The org segment is kept for display but
/// is not used when cloning — the clone org comes from [`CloneSource`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitRef {
    /// Org segment of the input URL (e.g. "facebook")
    pub org: String,

    /// Project name (e.g. "react")
    pub project: String,

    /// Commit hash, lowercase hex
    pub sha: String,
}

impl CommitRef {
    /// Parses a commit URL into a `CommitRef`
    pub fn parse_url(url: &str) -> Result<Self, CoreError> {
        let caps = commit_url_regex()
            .captures(url.trim())
            .ok_or_else(|| CoreError::MalformedUrl(url.to_string()))?;

        Ok(Self {
            org: caps[1].to_string(),
            project: caps[2].to_string(),
            sha: caps[3].to_ascii_lowercase(),
        })
    }

    /// Output directory for this commit, relative to the output root
    /// Format: `<project>/<sha>`
    pub fn relative_dir(&self) -> PathBuf {
        PathBuf::from(&self.project).join(&self.sha)
    }

    /// Abbreviated hash for log output
    pub fn short_sha(&self) -> &str {
        &self.sha[..self.sha.len().min(8)]
    }
}

impl fmt::Display for CommitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.project, self.short_sha())
    }
}

/// Clone URL template for fetching project repositories
///
/// The original evaluation dataset lives under a fixed mirror org
/// (`refdiff-study`), independent of the org in the input URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneSource {
    /// Host including scheme (e.g. "https://github.com")
    pub host: String,

    /// Org that owns the mirrored repositories
    pub org: String,
}

impl CloneSource {
    pub const DEFAULT_HOST: &'static str = "https://github.com";
    pub const DEFAULT_ORG: &'static str = "refdiff-study";

    pub fn new(host: impl Into<String>, org: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            org: org.into(),
        }
    }

    /// Clone URL for a project
    /// Format: `<host>/<org>/<project>.git`
    pub fn url_for(&self, project: &str) -> String {
        format!("{}/{}/{}.git", self.host.trim_end_matches('/'), self.org, project)
    }
}

impl Default for CloneSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOST, Self::DEFAULT_ORG)
    }
}
