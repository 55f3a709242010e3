use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Outcome of checking a pack reference against a publisher key.
///
/// Three shapes occur in practice:
/// - valid: `is_valid` true, `signature` carries the checked hex
/// - forged: `is_valid` false, `error` empty (the inputs were well-formed)
/// - malformed: `is_valid` false, `error` says what was structurally wrong
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub cid: String,
    pub is_valid: bool,
    pub timestamp: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationResult {
    /// A successful verification.
    pub fn valid(
        cid: impl Into<String>,
        timestamp: Timestamp,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            cid: cid.into(),
            is_valid: true,
            timestamp,
            signature: Some(signature.into()),
            error: None,
        }
    }

    /// Well-formed inputs that failed cryptographic verification.
    pub fn invalid(cid: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            cid: cid.into(),
            is_valid: false,
            timestamp,
            signature: None,
            error: None,
        }
    }

    /// Structurally broken input (bad CID shape, missing or undecodable
    /// signature).
    pub fn failed(
        cid: impl Into<String>,
        timestamp: Timestamp,
        error: impl Into<String>,
    ) -> Self {
        Self {
            cid: cid.into(),
            is_valid: false,
            timestamp,
            signature: None,
            error: Some(error.into()),
        }
    }
}
