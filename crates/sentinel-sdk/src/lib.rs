//! High-level facade for the CID Sentinel core.
//!
//! Re-exports the signing, CID, formatting, and type surfaces, and provides
//! pack-reference signing and verification on top of them. This is the entry
//! point for applications embedding the sentinel core.

pub mod verifier;

pub use verifier::{sign_pack_ref, verify_pack_ref};

// Re-export key types
pub use sentinel_cid::{generate_cid, validate_cid};
pub use sentinel_crypto::{verify, CryptoError, Message, Signature, SigningKey, VerifyingKey};
pub use sentinel_format::{format_bytes, format_duration};
pub use sentinel_types::{DashboardMetrics, PackRef, Slo, Timestamp, VerificationResult};
