use thiserror::Error;

/// Errors from signing and codec operations.
///
/// These all indicate malformed input. Verification of well-typed inputs
/// that merely fail cryptographically never errors; it returns `false`, so
/// callers can tell a forged signature from a programming mistake.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("invalid key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("invalid signature length: expected 64 bytes, got {0}")]
    InvalidSignatureLength(usize),

    #[error("invalid hex encoding: {0}")]
    InvalidHexEncoding(String),

    #[error("malformed public key: not a valid curve point")]
    MalformedPublicKey,
}
