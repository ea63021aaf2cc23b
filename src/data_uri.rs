//! Inline file encoding as base64 data URIs.
//!
//! File inputs are carried in the result record as `data:` URIs so the
//! record stays a plain string-valued mapping that can be JSON-encoded and
//! shipped anywhere without a side channel for binary content.

use crate::control::FormFile;
use crate::error::Result;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Media type used when a file does not declare one.
pub const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// Encode a file as a `data:<media-type>;base64,<payload>` URI.
///
/// Reads the file content (a suspension point for path-backed files) and
/// resolves with the encoded URI. Fails with the underlying read error if
/// the content cannot be read; nothing is retried.
pub async fn encode(file: &FormFile) -> Result<String> {
    let content = file.read().await?;
    let media_type = if file.media_type.is_empty() {
        DEFAULT_MEDIA_TYPE
    } else {
        file.media_type.as_str()
    };
    Ok(format!("data:{};base64,{}", media_type, BASE64.encode(&content)))
}
