use {
    hyperlane_types::mailbox::Domain,
    ledger_storage::{Counter, Item, Map, Set},
    ledger_types::{Addr, Hash256},
};

// Holder of the admin capability, recorded when the capability is issued.
pub const ADMIN: Item<Addr> = Item::new("admin");

pub const MAILBOX: Item<Addr> = Item::new("mailbox");

pub const LOCAL_DOMAIN: Item<Domain> = Item::new("local_domain");

pub const NEXT_VALIDATOR_INDEX: Counter<u32> = Counter::new("next_validator_index", 0, 1);

// Index -> validator. Indexes are assigned on first announcement, so iterating
// in ascending order yields validators in the order they first announced.
pub const VALIDATORS: Map<u32, Addr> = Map::new("validators");

pub const STORAGE_LOCATIONS: Map<Addr, Vec<String>> = Map::new("storage_locations");

pub const REPLAY_PROTECTIONS: Set<Hash256> = Set::new("replay_protections");
