use {
    hyperlane_types::mailbox::Domain,
    ledger_types::{Addr, StdError},
    thiserror::Error,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("validator announce already initialized! admin: {admin}")]
    AlreadyInitialized { admin: Addr },

    #[error("admin capability was not issued for this registry! owner: {owner}")]
    ForeignCapability { owner: Addr },

    #[error("sender is not the owner of the admin capability! sender: {sender}, owner: {owner}")]
    Unauthorized { sender: Addr, owner: Addr },

    #[error("validator announce already created! mailbox: {mailbox}, domain: {domain}")]
    AlreadyCreated { mailbox: Addr, domain: Domain },

    #[error("replay protection triggered! validator: {validator}, storage location: {storage_location}")]
    ReplayRejected {
        validator: Addr,
        storage_location: String,
    },

    #[error("invalid signature for validator {validator}: {reason}")]
    InvalidSignature { validator: Addr, reason: String },

    #[error("registry storage is unavailable; a previous call panicked mid-transaction")]
    Unavailable,
}

pub type Result<T> = core::result::Result<T, Error>;
