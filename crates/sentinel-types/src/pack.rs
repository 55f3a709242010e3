use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TypeError;
use crate::time::Timestamp;

/// A versioned, optionally signed package artifact reference.
///
/// Passive record: this layer enforces no uniqueness or ordering between
/// refs. `signature` is `None` until a publisher key has covered the
/// canonical bytes; `metadata` is free-form display data and is never part
/// of the signed payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackRef {
    /// Content identifier for the artifact.
    pub cid: String,
    /// Package name.
    pub name: String,
    /// Package version string.
    pub version: String,
    /// Hex-encoded content hash.
    pub hash: String,
    /// Artifact size in bytes.
    pub size: u64,
    /// When the artifact was published.
    pub timestamp: Timestamp,
    /// Lowercase hex signature over [`PackRef::signing_bytes`].
    /// `None` means the ref has not been signed yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Free-form metadata, excluded from the signed payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, Value>>,
}

impl PackRef {
    /// Create an unsigned ref with no metadata.
    pub fn new(
        cid: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        hash: impl Into<String>,
        size: u64,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            cid: cid.into(),
            name: name.into(),
            version: version.into(),
            hash: hash.into(),
            size,
            timestamp,
            signature: None,
            metadata: None,
        }
    }

    /// Returns `true` if a signature is present.
    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// Decode the hex content hash into raw bytes.
    ///
    /// The hash arrives as an externally supplied string, so decoding can
    /// fail even on an otherwise well-formed ref.
    pub fn hash_bytes(&self) -> Result<Vec<u8>, TypeError> {
        hex::decode(&self.hash).map_err(|e| TypeError::InvalidHex(e.to_string()))
    }

    /// Canonical byte string covered by a signature.
    ///
    /// The immutable fields, newline-separated, in declaration order.
    /// `signature` and `metadata` never feed back into the payload, so
    /// signing and later attaching metadata cannot invalidate a ref.
    pub fn signing_bytes(&self) -> Vec<u8> {
        format!(
            "{}\n{}\n{}\n{}\n{}\n{}",
            self.cid,
            self.name,
            self.version,
            self.hash,
            self.size,
            self.timestamp.as_millis()
        )
        .into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PackRef {
        PackRef::new(
            "bafybeiexample",
            "react",
            "18.3.1",
            "deadbeef",
            2048,
            Timestamp::from_millis(1_700_000_000_000),
        )
    }

    #[test]
    fn new_refs_are_unsigned() {
        let pack = sample();
        assert!(!pack.is_signed());
        assert!(pack.metadata.is_none());
    }

    #[test]
    fn signing_bytes_are_deterministic() {
        assert_eq!(sample().signing_bytes(), sample().signing_bytes());
    }

    #[test]
    fn signing_bytes_ignore_signature_and_metadata() {
        let unsigned = sample();
        let mut signed = sample();
        signed.signature = Some("ab".repeat(64));
        signed.metadata = Some(BTreeMap::from([(
            "registry".to_string(),
            Value::String("npm".to_string()),
        )]));
        assert_eq!(unsigned.signing_bytes(), signed.signing_bytes());
    }

    #[test]
    fn signing_bytes_cover_every_immutable_field() {
        let base = sample();
        let mut variants = vec![base.clone(); 5];
        variants[0].cid = "bafybeiother".into();
        variants[1].name = "vue".into();
        variants[2].version = "18.3.2".into();
        variants[3].hash = "cafebabe".into();
        variants[4].size = 4096;
        for variant in &variants {
            assert_ne!(base.signing_bytes(), variant.signing_bytes());
        }
    }

    #[test]
    fn hash_bytes_decodes_hex() {
        assert_eq!(
            sample().hash_bytes().unwrap(),
            vec![0xDE, 0xAD, 0xBE, 0xEF]
        );
    }

    #[test]
    fn hash_bytes_rejects_non_hex() {
        let mut pack = sample();
        pack.hash = "not-hex".into();
        assert!(matches!(
            pack.hash_bytes().unwrap_err(),
            TypeError::InvalidHex(_)
        ));
    }

    #[test]
    fn hash_bytes_rejects_odd_length() {
        let mut pack = sample();
        pack.hash = "abc".into();
        assert!(matches!(
            pack.hash_bytes().unwrap_err(),
            TypeError::InvalidHex(_)
        ));
    }

    #[test]
    fn serde_skips_absent_optionals() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("signature"));
        assert!(!json.contains("metadata"));
    }

    #[test]
    fn serde_roundtrip() {
        let mut pack = sample();
        pack.signature = Some("00ff".to_string());
        pack.metadata = Some(BTreeMap::from([(
            "license".to_string(),
            Value::String("MIT".to_string()),
        )]));
        let json = serde_json::to_string(&pack).unwrap();
        let parsed: PackRef = serde_json::from_str(&json).unwrap();
        assert_eq!(pack, parsed);
    }
}
