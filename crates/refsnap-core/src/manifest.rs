//! Manifest loading — the ordered list of commit URLs to snapshot
//!
//! Two formats are accepted:
//! - `.json`: a JSON array of commit URL strings
//! - anything else: one URL per line, blank lines and `#` comments skipped

use anyhow::{Context, Result};
use std::path::Path;

use crate::error::CoreError;
use crate::models::CommitRef;

/// Loads and parses a manifest file into an ordered list of commit references
///
/// Order is preserved exactly; a single malformed URL fails the whole load.
pub fn load_manifest(path: &Path) -> Result<Vec<CommitRef>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest at {:?}", path))?;

    let urls = if path.extension().is_some_and(|ext| ext == "json") {
        parse_json_manifest(&content)?
    } else {
        parse_text_manifest(&content)
    };

    if urls.is_empty() {
        anyhow::bail!(CoreError::InvalidManifest(format!(
            "no commit URLs found in {:?}",
            path
        )));
    }

    urls.iter()
        .map(|url| {
            CommitRef::parse_url(url).with_context(|| format!("In manifest {:?}", path))
        })
        .collect()
}

fn parse_json_manifest(content: &str) -> Result<Vec<String>> {
    serde_json::from_str::<Vec<String>>(content)
        .context("Manifest is not a JSON array of commit URL strings")
}

fn parse_text_manifest(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
