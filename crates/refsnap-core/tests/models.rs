//! Tests for commit reference parsing and manifest loading

use anyhow::Result;
use refsnap_core::{load_manifest, CloneSource, CommitRef, CoreError};
use std::io::Write;
use tempfile::TempDir;

// ── URL parsing ──────────────────────────────────────────────────────────────

#[test]
fn test_parse_full_url() {
    let r = CommitRef::parse_url(
        "https://github.com/webpack/webpack/commit/b50d4cf7c370dc0f9fa2c39ea0e73e28ca8918ac",
    )
    .unwrap();
    assert_eq!(r.org, "webpack");
    assert_eq!(r.project, "webpack");
    assert_eq!(r.sha, "b50d4cf7c370dc0f9fa2c39ea0e73e28ca8918ac");
}

#[test]
fn test_parse_normalizes_sha_to_lowercase() {
    let r = CommitRef::parse_url("https://github.com/org/proj/commit/ABCDEF0123").unwrap();
    assert_eq!(r.sha, "abcdef0123");
}

#[test]
fn test_parse_tolerates_trailing_slash_and_whitespace() {
    let r = CommitRef::parse_url("  https://github.com/org/proj/commit/abcdef01/  ").unwrap();
    assert_eq!(r.project, "proj");
}

#[test]
fn test_parse_rejects_non_commit_urls() {
    for url in [
        "https://github.com/org/proj",
        "https://github.com/org/proj/pull/123",
        "https://github.com/org/proj/commit/",
        "https://github.com/org/proj/commit/nothex",
        "not a url at all",
    ] {
        let err = CommitRef::parse_url(url).unwrap_err();
        assert!(matches!(err, CoreError::MalformedUrl(_)), "url: {}", url);
    }
}

#[test]
fn test_relative_dir_and_display() {
    let r = CommitRef::parse_url("https://github.com/org/proj/commit/abcdef0123456789").unwrap();
    assert_eq!(r.relative_dir(), std::path::PathBuf::from("proj/abcdef0123456789"));
    assert_eq!(r.to_string(), "proj@abcdef01");
}

// ── clone source ─────────────────────────────────────────────────────────────

#[test]
fn test_default_clone_source_ignores_input_org() {
    let r = CommitRef::parse_url("https://github.com/facebook/react/commit/abcdef01").unwrap();
    let source = CloneSource::default();
    // The URL's org segment (facebook) does not appear in the clone URL
    assert_eq!(source.url_for(&r.project), "https://github.com/refdiff-study/react.git");
}

#[test]
fn test_custom_clone_source() {
    let source = CloneSource::new("https://example.org/", "mirror");
    assert_eq!(source.url_for("proj"), "https://example.org/mirror/proj.git");
}

// ── manifest loading ─────────────────────────────────────────────────────────

fn write_manifest(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    path
}

#[test]
fn test_load_text_manifest_skips_comments_and_blanks() -> Result<()> {
    let tmp = TempDir::new()?;
    let path = write_manifest(
        &tmp,
        "commits.txt",
        "# Move Function\n\
         https://github.com/webpack/webpack/commit/b50d4cf7c370dc0f9fa2c39ea0e73e28ca8918ac\n\
         \n\
         # Extract Function\n\
         https://github.com/facebook/react/commit/24a83a5eeb1ccf4da1bdd97166d6c7c94d821bd8\n",
    );

    let refs = load_manifest(&path)?;
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0].project, "webpack");
    assert_eq!(refs[1].project, "react");
    Ok(())
}

#[test]
fn test_load_json_manifest_preserves_order() -> Result<()> {
    let tmp = TempDir::new()?;
    let path = write_manifest(
        &tmp,
        "commits.json",
        r#"[
            "https://github.com/meteor/meteor/commit/ec3341e7adb89889deadc1d3ecd8d8a181b958f1",
            "https://github.com/facebook/react-native/commit/57daad98f01b59fce9cb9bf663fd0b191c56b232"
        ]"#,
    );

    let refs = load_manifest(&path)?;
    assert_eq!(refs.len(), 2);
    assert_eq!(refs[0].project, "meteor");
    assert_eq!(refs[1].project, "react-native");
    Ok(())
}

#[test]
fn test_load_manifest_fails_on_malformed_url() {
    let tmp = TempDir::new().unwrap();
    let path = write_manifest(&tmp, "commits.txt", "https://github.com/org/proj/tree/main\n");
    assert!(load_manifest(&path).is_err());
}

#[test]
fn test_load_manifest_fails_on_empty_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_manifest(&tmp, "commits.txt", "# nothing but comments\n");
    assert!(load_manifest(&path).is_err());
}

#[test]
fn test_load_manifest_fails_on_invalid_json() {
    let tmp = TempDir::new().unwrap();
    let path = write_manifest(&tmp, "commits.json", r#"{"not": "an array"}"#);
    assert!(load_manifest(&path).is_err());
}
