use sentinel_cid::validate_cid;
use sentinel_crypto::{Signature, SigningKey, VerifyingKey};
use sentinel_types::{PackRef, Timestamp, VerificationResult};

/// Sign a pack reference, storing the signature as lowercase hex.
///
/// Covers the canonical bytes from [`PackRef::signing_bytes`]; re-signing an
/// already-signed ref overwrites the previous signature.
pub fn sign_pack_ref(key: &SigningKey, pack: &mut PackRef) {
    let signature = key.sign(pack.signing_bytes().as_slice());
    pack.signature = Some(signature.to_hex());
    tracing::debug!(cid = %pack.cid, "signed pack ref");
}

/// Check a pack reference against a publisher key.
///
/// Outcomes map onto [`VerificationResult`] as follows: a structural problem
/// (unrecognized CID shape, missing signature, undecodable signature hex)
/// fills `error`; a signature that decodes but fails cryptographic
/// verification yields `is_valid: false` with no error. Callers can thus
/// tell a forged ref from a misassembled one.
pub fn verify_pack_ref(pack: &PackRef, public_key: &VerifyingKey) -> VerificationResult {
    let now = Timestamp::now();
    if !validate_cid(&pack.cid) {
        return VerificationResult::failed(&pack.cid, now, "unrecognized CID shape");
    }
    let Some(sig_hex) = pack.signature.as_deref() else {
        return VerificationResult::failed(&pack.cid, now, "pack ref is unsigned");
    };
    let signature = match Signature::from_hex(sig_hex) {
        Ok(signature) => signature,
        Err(e) => return VerificationResult::failed(&pack.cid, now, e.to_string()),
    };
    let is_valid = public_key.verify(pack.signing_bytes().as_slice(), &signature);
    tracing::debug!(cid = %pack.cid, is_valid, "verified pack ref");
    if is_valid {
        VerificationResult::valid(&pack.cid, now, sig_hex)
    } else {
        VerificationResult::invalid(&pack.cid, now)
    }
}
