//! File Codec
//!
//! Attachments are persisted as data URLs (`data:<media-type>;base64,<payload>`),
//! the same text-safe form a browser `FileReader` produces.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::CodecError;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = "base64";

/// Media type written when nothing better is known
pub const OCTET_STREAM: &str = "application/octet-stream";

/// A decoded data URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            bytes,
        }
    }
}

/// Encode raw bytes into a self-describing data URL
pub fn encode(media_type: &str, bytes: &[u8]) -> String {
    format!("{SCHEME}{media_type};{BASE64_MARKER},{}", STANDARD.encode(bytes))
}

/// Parse a data URL back into its media type and bytes.
///
/// The media type runs from the `:` to the first `;`, the payload starts after
/// the first `,`. Anything else is malformed and reported, never skipped.
pub fn decode(encoded: &str) -> Result<DataUrl, CodecError> {
    let rest = encoded
        .strip_prefix(SCHEME)
        .ok_or(CodecError::MissingScheme)?;

    let (header, payload) = rest.split_once(',').ok_or(CodecError::MissingPayload)?;
    let (media_type, params) = header.split_once(';').ok_or(CodecError::MissingMediaType)?;

    // Parameters such as charset may precede the encoding marker
    let encoding = params.rsplit(';').next().unwrap_or(params);
    if !encoding.eq_ignore_ascii_case(BASE64_MARKER) {
        return Err(CodecError::UnsupportedEncoding(encoding.to_string()));
    }

    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| CodecError::InvalidPayload(e.to_string()))?;

    Ok(DataUrl::new(media_type, bytes))
}

/// Pick the media type recorded for an upload.
///
/// Browsers report an empty type for unknown extensions; fall back to a guess
/// from the file name and finally to `application/octet-stream`.
pub fn media_type_for(file_name: &str, reported: &str) -> String {
    let reported = reported.trim();
    if !reported.is_empty() {
        return reported.to_string();
    }
    mime_guess::from_path(file_name)
        .first()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| OCTET_STREAM.to_string())
}
