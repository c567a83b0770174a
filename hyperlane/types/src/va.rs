use {
    crate::mailbox::Domain,
    ledger_types::{Addr, EventName, HexBinary},
    serde::{Deserialize, Serialize},
};

pub const VA_DOMAIN_KEY: &str = "HYPERLANE_ANNOUNCEMENT";

// --------------------------------- messages ----------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InstantiateMsg {
    pub mailbox: Addr,
    pub domain: Domain,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Publish a storage location for a validator's signed checkpoints.
    Announce {
        validator: Addr,
        // Recoverable secp256k1 signature, 65 bytes. Kept variable-length so
        // a malformed signature reaches the verifier instead of failing at
        // deserialization.
        signature: HexBinary,
        storage_location: String,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum QueryMsg {
    /// Storage locations announced by each of the given validators, in the
    /// order of the input. Returns `Vec<Vec<String>>`.
    AnnouncedStorageLocations { validators: Vec<Addr> },
    /// Validators that have announced, in order of first announcement.
    /// Returns `Vec<Addr>`.
    AnnouncedValidators {},
    /// Returns `Addr`.
    Mailbox {},
    /// Returns `Domain`.
    LocalDomain {},
}

// ---------------------------------- events -----------------------------------

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtInitialize {
    pub creator: Addr,
    pub mailbox: Addr,
    pub domain: Domain,
}

impl EventName for EvtInitialize {
    const EVENT_NAME: &'static str = "init_validator_announce";
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvtAnnouncement {
    pub sender: Addr,
    pub validator: Addr,
    pub storage_location: String,
}

impl EventName for EvtAnnouncement {
    const EVENT_NAME: &'static str = "validator_announcement";
}

// ----------------------------------- tests -----------------------------------
