//! Product image codec.
//!
//! Images travel to the admin as base64 strings and leave it as binary
//! multipart parts. Uploads arrive as data-URLs (`data:<mime>;base64,<payload>`)
//! whose prefix is stripped before the payload is stored.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::CatalogError;

/// Number of base64 characters decoded per iteration.
pub const SLICE_SIZE: usize = 512;

/// MIME type used in display URLs.
pub const DISPLAY_MIME: &str = "image/jpg";

/// Content type and file name attached to uploaded image parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOptions {
    pub content_type: String,
    pub file_name: String,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            content_type: "image/jpeg".to_string(),
            file_name: "image.jpg".to_string(),
        }
    }
}

/// Decoded image bytes tagged with a content type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageBlob {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl ImageBlob {
    /// Reassemble decoded slices into one blob.
    pub fn from_chunks(chunks: Vec<Vec<u8>>, content_type: impl Into<String>) -> Self {
        let total = chunks.iter().map(Vec::len).sum();
        let mut bytes = Vec::with_capacity(total);
        for chunk in chunks {
            bytes.extend_from_slice(&chunk);
        }
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Encode raw bytes as standard padded base64.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a base64 payload into raw bytes.
pub fn decode(payload: &str) -> Result<Vec<u8>, CatalogError> {
    Ok(base64_to_blob(payload, "")?.bytes)
}

/// A string is base64 iff decoding then re-encoding it gives it back exactly.
/// Empty and whitespace-only strings are not base64.
pub fn is_base64(s: &str) -> bool {
    if s.trim().is_empty() {
        return false;
    }
    match STANDARD.decode(s) {
        Ok(bytes) => STANDARD.encode(bytes) == s,
        Err(_) => false,
    }
}

/// Decode a base64 payload into a blob, [`SLICE_SIZE`] characters at a time.
pub fn base64_to_blob(payload: &str, content_type: &str) -> Result<ImageBlob, CatalogError> {
    base64_to_blob_sliced(payload, content_type, SLICE_SIZE)
}

/// Decode with an explicit slice size.
///
/// The slice size is rounded down to a multiple of 4 (minimum 4) so every
/// slice decodes on its own. Padding is only accepted in the final slice.
pub fn base64_to_blob_sliced(
    payload: &str,
    content_type: &str,
    slice_size: usize,
) -> Result<ImageBlob, CatalogError> {
    let slice_size = (slice_size.max(4) / 4) * 4;
    let input = payload.as_bytes();
    if input.len() % 4 != 0 {
        return Err(CatalogError::InvalidImage(format!(
            "base64 length {} is not a multiple of 4",
            input.len()
        )));
    }

    let slice_count = input.len().div_ceil(slice_size);
    let mut chunks = Vec::with_capacity(slice_count);
    for (index, slice) in input.chunks(slice_size).enumerate() {
        if index + 1 < slice_count && slice.contains(&b'=') {
            return Err(CatalogError::InvalidImage(
                "padding before end of payload".to_string(),
            ));
        }
        chunks.push(STANDARD.decode(slice)?);
    }

    Ok(ImageBlob::from_chunks(chunks, content_type))
}

/// Build a data-URL for raw bytes.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, encode(bytes))
}

/// Display URL for a stored base64 payload.
pub fn display_url(payload: &str) -> String {
    format!("data:{};base64,{}", DISPLAY_MIME, payload)
}

/// Strip the data-URL prefix and validate what is left.
///
/// Everything after the first comma is the payload. A missing comma or a
/// payload that fails [`is_base64`] is rejected.
pub fn payload_from_data_url(data_url: &str) -> Result<String, CatalogError> {
    match data_url.split_once(',') {
        Some((_, payload)) if is_base64(payload) => Ok(payload.to_string()),
        _ => Err(CatalogError::InvalidImage(
            "The selected file is not a valid base64 encoded string.".to_string(),
        )),
    }
}

/// MIME type declared by a data-URL prefix, if any.
pub fn data_url_mime(data_url: &str) -> Option<&str> {
    let header = data_url.strip_prefix("data:")?.split_once(',')?.0;
    let mime = header.split(';').next()?;
    (!mime.is_empty()).then_some(mime)
}

/// Guess an image MIME type from a file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
