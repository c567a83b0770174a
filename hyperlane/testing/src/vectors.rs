use {
    hyperlane_types::{Announcement, mailbox::Domain},
    ledger_types::{Addr, Hash256, HexBinary},
    serde::Deserialize,
};

const ANNOUNCEMENTS_JSON: &str = include_str!("../testdata/announcements.json");

/// A signed announcement, together with every intermediate hash a
/// conforming verifier must reproduce. Vectors with a `rejection` carry a
/// non-canonical signature encoding that every verifier must refuse.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct AnnouncementVector {
    pub name: String,
    pub mailbox: Addr,
    pub domain: Domain,
    pub validator: Addr,
    pub storage_location: String,
    pub signature: HexBinary,
    pub domain_hash: Hash256,
    pub announcement_hash: Hash256,
    pub digest: Hash256,
    pub replay_id: Hash256,
    /// Part of the error message the signature must be rejected with.
    #[serde(default)]
    pub rejection: Option<String>,
}

impl AnnouncementVector {
    pub fn announcement(&self) -> Announcement {
        Announcement::new(
            self.validator,
            self.mailbox,
            self.domain,
            &self.storage_location,
        )
    }
}

pub fn announcement_vectors() -> Vec<AnnouncementVector> {
    serde_json::from_str(ANNOUNCEMENTS_JSON).expect("malformed announcement vectors")
}

/// The announcement of an Ethereum mainnet validator, as published on chain.
pub fn mainnet_vector() -> AnnouncementVector {
    announcement_vectors()
        .into_iter()
        .next()
        .expect("no announcement vectors")
}
