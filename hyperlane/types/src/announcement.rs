use {
    crate::{
        Addr32, announcement_hash, domain_hash, eip191_hash, mailbox::Domain, recover_eth_address,
        replay_hash, va::VA_DOMAIN_KEY,
    },
    ledger_crypto::CryptoResult,
    ledger_types::{Addr, Hash256},
    serde::{Deserialize, Serialize},
};

/// A validator's claim that its signed checkpoints for one mailbox can be
/// found at `storage_location`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub validator: Addr,
    pub mailbox: Addr32,
    pub domain: Domain,
    pub storage_location: String,
}

impl Announcement {
    pub fn new(validator: Addr, mailbox: Addr, domain: Domain, storage_location: &str) -> Self {
        Self {
            validator,
            mailbox: mailbox.into(),
            domain,
            storage_location: storage_location.to_string(),
        }
    }

    /// The announcement hash, before the EIP-191 prefix is applied.
    pub fn signing_hash(&self) -> Hash256 {
        announcement_hash(
            domain_hash(self.domain, self.mailbox, VA_DOMAIN_KEY),
            &self.storage_location,
        )
    }

    /// The hash the validator's key actually signs.
    pub fn digest(&self) -> Hash256 {
        eip191_hash(self.signing_hash())
    }

    pub fn replay_id(&self) -> Hash256 {
        replay_hash(self.validator, &self.storage_location)
    }

    pub fn recover_signer(&self, signature: &[u8]) -> CryptoResult<Addr> {
        recover_eth_address(self.digest(), signature)
    }

    /// Whether `signature` was produced by the announced validator.
    pub fn is_signed_by_validator(&self, signature: &[u8]) -> bool {
        self.recover_signer(signature)
            .is_ok_and(|signer| signer == self.validator)
    }
}

// ----------------------------------- tests -----------------------------------
