//! Cryptographic primitives for CID Sentinel.
//!
//! Provides Ed25519 signing/verification over pack payloads and the
//! lowercase hex codec used to store signatures in records.
//!
//! All crypto operations wrap established libraries; no custom cryptography.

pub mod codec;
pub mod error;
pub mod message;
pub mod signer;

pub use error::CryptoError;
pub use message::Message;
pub use signer::{verify, Signature, SigningKey, VerifyingKey};
