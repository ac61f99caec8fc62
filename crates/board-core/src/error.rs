//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type BoardResult<T> = std::result::Result<T, BoardError>;

/// Malformed data URL handed to the file codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The string does not start with the `data:` scheme
    #[error("missing data URL scheme")]
    MissingScheme,

    /// No `;` after the media type
    #[error("missing media type delimiter ';'")]
    MissingMediaType,

    /// No `,` before the payload
    #[error("missing payload delimiter ','")]
    MissingPayload,

    /// Only base64 payloads are produced and accepted
    #[error("unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Payload contains characters outside the base64 alphabet
    #[error("invalid base64 payload: {0}")]
    InvalidPayload(String),
}

/// Failure of the underlying key-value storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Storage could not be reached (e.g. disabled by the browser)
    #[error("storage unavailable")]
    Unavailable,

    /// The write was rejected, e.g. quota exceeded
    #[error("write to '{key}' rejected: {message}")]
    WriteRejected { key: String, message: String },

    /// Snapshot could not be serialized
    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// Errors surfaced by board operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}
