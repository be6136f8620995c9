//! Error types for refsnap-core

/// Errors specific to refsnap-core
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Malformed commit URL: {0}")]
    MalformedUrl(String),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),
}
