use base64::Engine;

const CID_PREFIX: &str = "bafybei";
const BODY_LEN: usize = 32;

/// Derive a demo-grade content identifier from textual content.
///
/// Base64-encodes the content, keeps only ASCII alphanumerics, truncates to
/// 32 characters, lowercases, and prepends `bafybei`. The same input always
/// yields the same token.
///
/// Known weakness: this is not a cryptographic hash. Inputs whose base64
/// encodings share a 32-character alphanumeric prefix collide, which is
/// acceptable for a placeholder identifier and nothing else.
///
/// Note that the result is at most 39 characters and therefore never passes
/// [`validate_cid`], which matches real 56-character CID shapes. Both
/// behaviors are kept as observed in production; callers that need a
/// validating identifier must mint a real IPFS CID upstream.
pub fn generate_cid(content: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(content.as_bytes());
    let body: String = encoded
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(BODY_LEN)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    format!("{CID_PREFIX}{body}")
}

/// Validate a string against the two accepted CID shapes.
///
/// Accepts `bafy` followed by exactly 52 lowercase alphanumerics (CIDv1,
/// 56 characters total) or `Qm` followed by exactly 44 alphanumerics
/// (CIDv0, 46 characters total). Everything else, including the output of
/// [`generate_cid`], is rejected.
pub fn validate_cid(cid: &str) -> bool {
    if let Some(body) = cid.strip_prefix("bafy") {
        return body.len() == 52
            && body
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    }
    if let Some(body) = cid.strip_prefix("Qm") {
        return body.len() == 44 && body.chars().all(|c| c.is_ascii_alphanumeric());
    }
    false
}
