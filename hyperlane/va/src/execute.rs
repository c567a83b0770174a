use {
    crate::{
        ADMIN, Error, LOCAL_DOMAIN, MAILBOX, NEXT_VALIDATOR_INDEX, REPLAY_PROTECTIONS, Result,
        STORAGE_LOCATIONS, VALIDATORS,
    },
    hyperlane_types::{
        announcement_digest, recover_eth_address, replay_hash,
        va::{EvtAnnouncement, EvtInitialize, ExecuteMsg, InstantiateMsg},
    },
    ledger_types::{Addr, HexBinary, MutableCtx, Response, StdResult, Storage},
};

/// Authority to create the registry. Issued once per store when the registry
/// is deployed, and only constructible inside this crate.
#[derive(Debug, PartialEq, Eq)]
pub struct AdminCap {
    owner: Addr,
}

impl AdminCap {
    pub fn owner(&self) -> Addr {
        self.owner
    }
}

/// Issue the admin capability to `deployer`, recording them as the store's
/// admin. A store is initialized at most once.
pub(crate) fn init_module(storage: &mut dyn Storage, deployer: Addr) -> Result<AdminCap> {
    if let Some(admin) = ADMIN.may_load(storage)? {
        return Err(Error::AlreadyInitialized { admin });
    }

    ADMIN.save(storage, &deployer)?;

    Ok(AdminCap { owner: deployer })
}

pub fn create(ctx: MutableCtx, cap: &AdminCap, msg: InstantiateMsg) -> Result<Response> {
    if ctx.sender != cap.owner {
        return Err(Error::Unauthorized {
            sender: ctx.sender,
            owner: cap.owner,
        });
    }

    // The capability must be the one issued for this store.
    if ADMIN.may_load(ctx.storage)? != Some(cap.owner) {
        return Err(Error::ForeignCapability { owner: cap.owner });
    }

    // The binding parameters are immutable once written.
    if let Some(mailbox) = MAILBOX.may_load(ctx.storage)? {
        return Err(Error::AlreadyCreated {
            mailbox,
            domain: LOCAL_DOMAIN.load(ctx.storage)?,
        });
    }

    MAILBOX.save(ctx.storage, &msg.mailbox)?;
    LOCAL_DOMAIN.save(ctx.storage, &msg.domain)?;

    Ok(Response::new().add_event(EvtInitialize {
        creator: ctx.sender,
        mailbox: msg.mailbox,
        domain: msg.domain,
    })?)
}

pub fn execute(ctx: MutableCtx, msg: ExecuteMsg) -> Result<Response> {
    match msg {
        ExecuteMsg::Announce {
            validator,
            signature,
            storage_location,
        } => announce(ctx, validator, signature, storage_location),
    }
}

/// Record a storage location for `validator`.
///
/// The replay id is written before the signature is checked. On a failed
/// check the caller must discard the call's writes, which also discards the
/// replay id.
pub fn announce(
    ctx: MutableCtx,
    validator: Addr,
    signature: HexBinary,
    storage_location: String,
) -> Result<Response> {
    // Check replay protection.
    let replay_id = replay_hash(validator, &storage_location);

    if REPLAY_PROTECTIONS.has(ctx.storage, &replay_id) {
        return Err(Error::ReplayRejected {
            validator,
            storage_location,
        });
    }

    REPLAY_PROTECTIONS.insert(ctx.storage, &replay_id)?;

    // Make announcement digest.
    let mailbox = MAILBOX.load(ctx.storage)?;
    let local_domain = LOCAL_DOMAIN.load(ctx.storage)?;
    let message_hash = announcement_digest(mailbox.into(), local_domain, &storage_location);

    // Recover the signer & verify.
    let signer = recover_eth_address(message_hash, &signature).map_err(|err| {
        Error::InvalidSignature {
            validator,
            reason: err.to_string(),
        }
    })?;

    if signer != validator {
        return Err(Error::InvalidSignature {
            validator,
            reason: format!("pubkey mismatch, recovered: {signer}"),
        });
    }

    // Index the validator on its first announcement.
    if !STORAGE_LOCATIONS.has(ctx.storage, &validator) {
        let (index, _) = NEXT_VALIDATOR_INDEX.increment(ctx.storage)?;
        VALIDATORS.save(ctx.storage, &index, &validator)?;
    }

    // Append storage location.
    STORAGE_LOCATIONS.may_update(
        ctx.storage,
        &validator,
        |maybe_storage_locations| -> StdResult<_> {
            let mut storage_locations = maybe_storage_locations.unwrap_or_default();
            storage_locations.push(storage_location.clone());
            Ok(storage_locations)
        },
    )?;

    Ok(Response::new().add_event(EvtAnnouncement {
        sender: ctx.sender,
        validator,
        storage_location,
    })?)
}

// ----------------------------------- tests -----------------------------------
