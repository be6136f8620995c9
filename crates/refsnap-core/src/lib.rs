//! Refsnap Core - Shared data models and manifest parsing
//!
//! This crate defines the core data structures used throughout the project:
//! commit references parsed from GitHub URLs, the clone-source URL template,
//! and loading of the input manifest.

mod error;
mod manifest;
mod models;

pub use error::CoreError;
pub use manifest::load_manifest;
pub use models::{CloneSource, CommitRef};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commit_url() {
        let r = CommitRef::parse_url(
            "https://github.com/facebook/react/commit/24a83a5eeb1ccf4da1bdd97166d6c7c94d821bd8",
        )
        .unwrap();
        assert_eq!(r.org, "facebook");
        assert_eq!(r.project, "react");
        assert_eq!(r.sha, "24a83a5eeb1ccf4da1bdd97166d6c7c94d821bd8");
    }

    #[test]
    fn test_clone_url_uses_fixed_org() {
        let source = CloneSource::default();
        assert_eq!(
            source.url_for("react"),
            "https://github.com/refdiff-study/react.git"
        );
    }
}
