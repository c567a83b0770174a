use {data_encoding::BASE64, ledger_crypto::CryptoError, std::any::type_name};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StdError {
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("data not found! type: {ty}, storage key: {key}")]
    DataNotFound { ty: &'static str, key: String },

    #[error("integer overflow! type: {ty}, value: {value}")]
    Overflow { ty: &'static str, value: String },

    #[error("failed to serialize! codec: {codec}, type: {ty}, reason: {reason}")]
    Serialize {
        codec: &'static str,
        ty: &'static str,
        reason: String,
    },

    #[error("failed to deserialize! codec: {codec}, type: {ty}, reason: {reason}")]
    Deserialize {
        codec: &'static str,
        ty: &'static str,
        reason: String,
    },
}

impl StdError {
    pub fn data_not_found<T>(key: &[u8]) -> Self {
        Self::DataNotFound {
            ty: type_name::<T>(),
            key: BASE64.encode(key),
        }
    }

    pub fn overflow<T>(value: T) -> Self
    where
        T: ToString,
    {
        Self::Overflow {
            ty: type_name::<T>(),
            value: value.to_string(),
        }
    }

    pub fn serialize<T, R>(codec: &'static str, reason: R) -> Self
    where
        R: ToString,
    {
        Self::Serialize {
            codec,
            ty: type_name::<T>(),
            reason: reason.to_string(),
        }
    }

    pub fn deserialize<T, R>(codec: &'static str, reason: R) -> Self
    where
        R: ToString,
    {
        Self::Deserialize {
            codec,
            ty: type_name::<T>(),
            reason: reason.to_string(),
        }
    }
}

pub type StdResult<T> = core::result::Result<T, StdError>;
