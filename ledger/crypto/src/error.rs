#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    #[error("data is of incorrect length! expecting: {expect}, got: {actual}")]
    IncorrectLength { expect: usize, actual: usize },

    #[error("invalid recovery id: {recovery_id}; must be 0 or 1")]
    InvalidRecoveryId { recovery_id: u8 },

    #[error("invalid signature v value: {v}; must be 27 or 28")]
    InvalidV { v: u8 },

    #[error("signature is not normalized: s is in the upper half of the curve order")]
    HighS,

    #[error("malformed signature: {reason}")]
    InvalidSignature { reason: String },

    #[error("failed to recover public key: {reason}")]
    RecoveryFailed { reason: String },

    #[error("invalid private key: {reason}")]
    InvalidPrivateKey { reason: String },

    #[error("failed to sign: {reason}")]
    SigningFailed { reason: String },
}

pub type CryptoResult<T> = core::result::Result<T, CryptoError>;
