//! Error types for decal-io.

use thiserror::Error;

/// Result type for decal-io operations.
pub type Result<T> = std::result::Result<T, IoError>;

/// Errors raised while loading zone catalogs or writing exports.
#[derive(Debug, Error)]
pub enum IoError {
    /// Malformed JSON or a document of the wrong shape.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A zone id that the catalog does not contain.
    #[error("unknown placement zone: {0}")]
    UnknownZone(String),

    /// A zone that cannot serve as a container.
    #[error("invalid placement zone {id}: {reason}")]
    InvalidZone { id: String, reason: String },
}

impl IoError {
    pub(crate) fn invalid_zone(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidZone {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
