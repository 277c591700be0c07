//! Error types for notice extraction.
//!
//! This module provides the [`NoticeError`] type and the [`Result`] convenience
//! type. Missing fields and unusable date tokens are not errors: every
//! extraction step has a defined fallback. Only a document that cannot be
//! parsed at all surfaces as [`NoticeError::MalformedDocument`].

use thiserror::Error;

/// Error type for all notice extraction operations.
#[derive(Error, Debug)]
pub enum NoticeError {
    /// The exchange-format document is not well-formed XML, so no field
    /// extraction is possible.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// A notice could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A record could not be written back as XML.
    #[error("XML serialization error: {0}")]
    XmlSerialization(String),

    /// A collaborator (record source or notice sink) failed.
    #[error("Collaborator error: {0}")]
    Source(String),

    /// IO error from the underlying destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<anyhow::Error> for NoticeError {
    fn from(err: anyhow::Error) -> Self {
        NoticeError::Source(format!("{err:#}"))
    }
}

/// Convenience type alias for [`std::result::Result`] with [`NoticeError`].
pub type Result<T> = std::result::Result<T, NoticeError>;
