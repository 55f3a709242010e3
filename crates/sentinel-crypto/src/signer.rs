use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::CryptoError;
use crate::message::Message;

/// Ed25519 signing key (private).
pub struct SigningKey(ed25519_dalek::SigningKey);

/// Ed25519 verifying key (public).
#[derive(Clone, PartialEq, Eq)]
pub struct VerifyingKey(ed25519_dalek::VerifyingKey);

/// Ed25519 signature.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature(#[serde(with = "signature_serde")] ed25519_dalek::Signature);

impl SigningKey {
    /// Generate a new random signing key from the process CSPRNG.
    pub fn generate() -> Self {
        let mut csprng = rand::thread_rng();
        Self::generate_with(&mut csprng)
    }

    /// Generate from a caller-supplied entropy source.
    ///
    /// Tests pass a seeded generator here to get reproducible keys.
    pub fn generate_with<R: rand::CryptoRng + rand::RngCore>(csprng: &mut R) -> Self {
        Self(ed25519_dalek::SigningKey::generate(csprng))
    }

    /// Create from a raw 32-byte secret.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(ed25519_dalek::SigningKey::from_bytes(&bytes))
    }

    /// Create from a byte slice, rejecting anything but exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidKeyLength(bytes.len()))?;
        Ok(Self::from_bytes(arr))
    }

    /// The corresponding public verifying key.
    ///
    /// Pure function of the private key: repeated calls return identical
    /// bytes.
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey(self.0.verifying_key())
    }

    /// Sign a message.
    ///
    /// Deterministic per EdDSA: the same (key, message) pair always produces
    /// the same 64 signature bytes.
    pub fn sign<'a>(&self, message: impl Into<Message<'a>>) -> Signature {
        use ed25519_dalek::Signer;
        Signature(self.0.sign(message.into().as_bytes()))
    }

    /// Raw secret key bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }
}

impl VerifyingKey {
    /// Verify a signature on a message.
    ///
    /// Returns `false` for any well-typed signature that does not validate;
    /// never errors.
    pub fn verify<'a>(&self, message: impl Into<Message<'a>>, signature: &Signature) -> bool {
        use ed25519_dalek::Verifier;
        self.0.verify(message.into().as_bytes(), &signature.0).is_ok()
    }

    /// Create from a raw 32-byte public key.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let key = ed25519_dalek::VerifyingKey::from_bytes(&bytes)
            .map_err(|_| CryptoError::MalformedPublicKey)?;
        Ok(Self(key))
    }

    /// Create from a byte slice, rejecting anything but exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidKeyLength(bytes.len()))?;
        Self::from_bytes(arr)
    }

    /// Parse from lowercase hex (64 characters).
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let bytes = codec::decode(s)?;
        Self::from_slice(&bytes)
    }

    /// Raw public key bytes.
    pub fn as_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Hex-encoded public key.
    pub fn to_hex(&self) -> String {
        codec::encode(&self.0.to_bytes())
    }
}

impl Signature {
    /// Signature length in bytes.
    pub const LENGTH: usize = 64;

    /// Create from raw 64 signature bytes.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(ed25519_dalek::Signature::from_bytes(&bytes))
    }

    /// Create from a byte slice, rejecting anything but exactly 64 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; 64] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidSignatureLength(bytes.len()))?;
        Ok(Self::from_bytes(arr))
    }

    /// Raw 64-byte signature.
    pub fn to_bytes(&self) -> [u8; 64] {
        self.0.to_bytes()
    }

    /// Lowercase hex, two characters per byte, 128 characters total.
    pub fn to_hex(&self) -> String {
        codec::encode(&self.to_bytes())
    }

    /// Parse from hex produced by [`Signature::to_hex`].
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let bytes = codec::decode(s)?;
        Self::from_slice(&bytes)
    }
}

/// Verify a detached signature without constructing typed wrappers first.
///
/// Length errors come back as `Err` so callers can distinguish a programming
/// mistake from a forged signature. Everything well-typed that merely fails
/// cryptographically, including a 32-byte value that is not a valid curve
/// point, comes back as `Ok(false)`.
pub fn verify<'a>(
    signature: &[u8],
    message: impl Into<Message<'a>>,
    public_key: &[u8],
) -> Result<bool, CryptoError> {
    let sig: [u8; 64] = signature
        .try_into()
        .map_err(|_| CryptoError::InvalidSignatureLength(signature.len()))?;
    let pk: [u8; 32] = public_key
        .try_into()
        .map_err(|_| CryptoError::InvalidKeyLength(public_key.len()))?;
    let key = match ed25519_dalek::VerifyingKey::from_bytes(&pk) {
        Ok(key) => key,
        Err(_) => return Ok(false),
    };
    use ed25519_dalek::Verifier;
    Ok(key
        .verify(message.into().as_bytes(), &ed25519_dalek::Signature::from_bytes(&sig))
        .is_ok())
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SigningKey(<redacted>)")
    }
}

impl std::fmt::Debug for VerifyingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VerifyingKey({})", self.to_hex())
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({}...)", codec::encode(&self.to_bytes()[..8]))
    }
}

mod signature_serde {
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(sig: &ed25519_dalek::Signature, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&sig.to_bytes())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ed25519_dalek::Signature, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes: Vec<u8> = Vec::deserialize(deserializer)?;
        let arr: [u8; 64] = bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("expected 64-byte signature"))?;
        Ok(ed25519_dalek::Signature::from_bytes(&arr))
    }
}
