// Data URI encoding for image payloads
// Author: kelexine (https://github.com/kelexine)

use crate::error::{NodeError, Result};
use base64::Engine;

/// Prefix of every image data URI sent upstream.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encode raw image bytes as a `data:image/png;base64,...` URI.
pub fn encode_data_uri(data: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(data);
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + encoded.len());
    uri.push_str(DATA_URI_PREFIX);
    uri.push_str(&encoded);
    uri
}

/// Decode a base64 data URI back into raw bytes.
///
/// Any declared MIME type is accepted; only base64 payloads are supported.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| NodeError::InvalidInput("Data URI must start with 'data:'".to_string()))?;

    let (_, payload) = rest.split_once(";base64,").ok_or_else(|| {
        NodeError::InvalidInput("Data URI is missing the ';base64,' marker".to_string())
    })?;

    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| NodeError::InvalidInput(format!("Invalid base64 image data: {}", e)))
}
