use {
    borsh::{BorshDeserialize, BorshSerialize},
    ledger_types::{Addr, HexByteArray, Inner},
    serde::{Deserialize, Serialize},
};

/// Hyperlane addresses are left-padded to 32 bytes. See:
/// <https://docs.hyperlane.xyz/docs/reference/messaging/send#:~:text=Recipient%20addresses%20are%20left%2Dpadded>
#[derive(
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(transparent)]
pub struct Addr32(HexByteArray<32>);

impl Addr32 {
    pub const fn from_inner(inner: [u8; 32]) -> Self {
        Self(HexByteArray::from_inner(inner))
    }
}

impl Inner for Addr32 {
    type U = [u8; 32];

    fn inner(&self) -> &Self::U {
        self.0.inner()
    }

    fn into_inner(self) -> Self::U {
        self.0.into_inner()
    }
}

impl From<Addr> for Addr32 {
    fn from(addr: Addr) -> Self {
        let mut addr32 = [0; 32];
        addr32[12..].copy_from_slice(addr.inner());
        Self::from_inner(addr32)
    }
}

// ----------------------------------- tests -----------------------------------
