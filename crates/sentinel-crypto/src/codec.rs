use crate::error::CryptoError;

/// Encode bytes as lowercase hex, two characters per byte, no separators.
pub fn encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string back into bytes.
///
/// Lossless inverse of [`encode`]. Odd-length input and non-hex digits fail
/// with [`CryptoError::InvalidHexEncoding`].
pub fn decode(s: &str) -> Result<Vec<u8>, CryptoError> {
    hex::decode(s).map_err(|e| CryptoError::InvalidHexEncoding(e.to_string()))
}
