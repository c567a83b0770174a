use {
    crate::{CryptoError, CryptoResult, utils::to_sized},
    k256::ecdsa::{RecoveryId, Signature, VerifyingKey},
};

const SECP256K1_DIGEST_LEN: usize = 32;
const SECP256K1_SIGNATURE_LEN: usize = 64;

/// Recover the signer's public key from a 64-byte `r || s` signature.
/// High-S signatures are rejected.
///
/// NOTE: This function takes the hash of the message, not the prehash.
pub fn secp256k1_pubkey_recover(
    msg_hash: &[u8],
    sig: &[u8],
    recovery_id: u8,
    compressed: bool,
) -> CryptoResult<Vec<u8>> {
    let msg_hash = to_sized::<SECP256K1_DIGEST_LEN>(msg_hash)?;
    let sig = to_sized::<SECP256K1_SIGNATURE_LEN>(sig)?;

    let sig = Signature::from_slice(&sig).map_err(|err| CryptoError::InvalidSignature {
        reason: err.to_string(),
    })?;

    // Ethereum verifiers only accept the low-S form.
    if sig.normalize_s().is_some() {
        return Err(CryptoError::HighS);
    }

    // Recovery ids 2 and 3 are only possible if `r` overflowed the curve
    // order, which Ethereum signers never produce.
    let recovery_id = match recovery_id {
        0 | 1 => RecoveryId::new(recovery_id == 1, false),
        _ => return Err(CryptoError::InvalidRecoveryId { recovery_id }),
    };

    VerifyingKey::recover_from_prehash(&msg_hash, &sig, recovery_id)
        .map(|vk| vk.to_encoded_point(compressed).as_bytes().to_vec())
        .map_err(|err| CryptoError::RecoveryFailed {
            reason: err.to_string(),
        })
}

// ----------------------------------- tests -----------------------------------
