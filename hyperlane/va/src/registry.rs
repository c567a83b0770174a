use {
    crate::{
        AdminCap, Error, Result, create, execute, execute::init_module, query,
        query_announced_storage_locations, query_announced_validators, query_local_domain,
        query_mailbox,
    },
    hyperlane_types::{
        mailbox::Domain,
        va::{ExecuteMsg, InstantiateMsg, QueryMsg},
    },
    ledger_types::{
        Addr, Buffer, HexBinary, ImmutableCtx, Json, MutableCtx, Response, StdResult, Storage,
    },
    std::sync::{Mutex, MutexGuard},
    tracing::{debug, info, warn},
};

/// Host handle over a validator announce registry.
///
/// Calls are serialized through a single lock. Each write runs in a buffer
/// layered over the committed store: the buffer is flushed if the call
/// succeeds and dropped if it fails, so a failed call leaves no trace.
#[derive(Debug)]
pub struct Registry<S> {
    store: Mutex<Option<S>>,
}

impl<S> Registry<S>
where
    S: Storage,
{
    /// Wrap a store that has already been deployed.
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(Some(store)),
        }
    }

    /// Deploy a registry over `store`, issuing the admin capability to
    /// `deployer`. Fails if the store was deployed before.
    pub fn deploy(mut store: S, deployer: Addr) -> Result<(Self, AdminCap)> {
        let cap = init_module(&mut store, deployer)?;

        info!(%deployer, "Registry deployed");

        Ok((Self::new(store), cap))
    }

    /// Consume the handle, returning the committed store.
    pub fn into_inner(self) -> Result<S> {
        self.store
            .into_inner()
            .map_err(|_| Error::Unavailable)?
            .ok_or(Error::Unavailable)
    }

    pub fn create(&self, sender: Addr, cap: &AdminCap, msg: InstantiateMsg) -> Result<Response> {
        self.transact("create", sender, |ctx| create(ctx, cap, msg))
    }

    pub fn execute(&self, sender: Addr, msg: ExecuteMsg) -> Result<Response> {
        self.transact("execute", sender, |ctx| execute(ctx, msg))
    }

    pub fn announce(
        &self,
        sender: Addr,
        validator: Addr,
        signature: HexBinary,
        storage_location: &str,
    ) -> Result<Response> {
        self.execute(sender, ExecuteMsg::Announce {
            validator,
            signature,
            storage_location: storage_location.to_string(),
        })
    }

    pub fn query(&self, msg: QueryMsg) -> Result<Json> {
        self.read(|ctx| query(ctx, msg))
    }

    pub fn announced_storage_locations(&self, validators: &[Addr]) -> Result<Vec<Vec<String>>> {
        self.read(|ctx| query_announced_storage_locations(ctx, validators.to_vec()))
    }

    pub fn announced_validators(&self) -> Result<Vec<Addr>> {
        self.read(query_announced_validators)
    }

    pub fn mailbox(&self) -> Result<Addr> {
        self.read(query_mailbox)
    }

    pub fn local_domain(&self) -> Result<Domain> {
        self.read(query_local_domain)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<S>>> {
        // A poisoned lock means a call panicked while holding the store, in
        // which case the store is gone anyway.
        self.store.lock().map_err(|_| Error::Unavailable)
    }

    fn transact<F>(&self, call: &'static str, sender: Addr, action: F) -> Result<Response>
    where
        F: FnOnce(MutableCtx) -> Result<Response>,
    {
        let mut guard = self.lock()?;
        let store = guard.take().ok_or(Error::Unavailable)?;

        let mut buffer = Buffer::new(store, None, Some("va"));
        let result = action(MutableCtx {
            storage: &mut buffer,
            sender,
        });

        match &result {
            Ok(res) => {
                *guard = Some(buffer.consume());
                info!(call, %sender, events = res.events.len(), "Call committed");

                for event in &res.events {
                    debug!(ty = event.ty.as_str(), data = %event.data, "Event emitted");
                }
            },
            Err(err) => {
                let (store, pending) = buffer.disassemble();
                *guard = Some(store);
                warn!(call, %sender, discarded = pending.len(), %err, "Call reverted");
            },
        }

        result
    }

    fn read<F, T>(&self, action: F) -> Result<T>
    where
        F: FnOnce(ImmutableCtx) -> StdResult<T>,
    {
        let guard = self.lock()?;
        let store = guard.as_ref().ok_or(Error::Unavailable)?;

        Ok(action(ImmutableCtx { storage: store })?)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{ADMIN, MAILBOX, REPLAY_PROTECTIONS},
        hyperlane_types::{ValidatorSigner, replay_hash},
        k256::ecdsa::SigningKey,
        ledger_types::{MockStorage, ResultExt},
        rand::rngs::OsRng,
    };

    const DEPLOYER: Addr = Addr::mock(1);
    const RELAYER: Addr = Addr::mock(2);
    const MAILBOX_ADDR: Addr = Addr::mock(3);
    const DOMAIN: Domain = 1;

    fn setup() -> Registry<MockStorage> {
        let (registry, cap) = Registry::deploy(MockStorage::new(), DEPLOYER).should_succeed();

        registry
            .create(DEPLOYER, &cap, InstantiateMsg {
                mailbox: MAILBOX_ADDR,
                domain: DOMAIN,
            })
            .should_succeed();

        registry
    }

    #[test]
    fn reverting_failed_announcement() {
        let registry = setup();
        let signer = ValidatorSigner::new(SigningKey::random(&mut OsRng));
        let location = "s3://bucket/region";

        // Signed for the wrong domain. The replay id written before the
        // signature check must not survive.
        let bad_signature = signer
            .sign_announcement(MAILBOX_ADDR, DOMAIN + 1, location)
            .should_succeed();
        registry
            .announce(RELAYER, signer.address(), bad_signature, location)
            .should_fail_with_error("invalid signature");

        registry
            .announced_validators()
            .should_succeed_and_equal(Vec::<Addr>::new());

        // So the same pair can still be announced.
        let signature = signer
            .sign_announcement(MAILBOX_ADDR, DOMAIN, location)
            .should_succeed();
        registry
            .announce(RELAYER, signer.address(), signature, location)
            .should_succeed();

        let store = registry.into_inner().should_succeed();
        assert!(REPLAY_PROTECTIONS.has(&store, &replay_hash(signer.address(), location)));
    }

    #[test]
    fn reverting_failed_creation() {
        let (registry, cap) = Registry::deploy(MockStorage::new(), DEPLOYER).should_succeed();

        registry
            .create(RELAYER, &cap, InstantiateMsg {
                mailbox: MAILBOX_ADDR,
                domain: DOMAIN,
            })
            .should_fail_with_error("not the owner of the admin capability");

        registry.mailbox().should_fail_with_error("data not found");

        // The capability survives a failed call.
        registry
            .create(DEPLOYER, &cap, InstantiateMsg {
                mailbox: MAILBOX_ADDR,
                domain: DOMAIN,
            })
            .should_succeed();
        registry.mailbox().should_succeed_and_equal(MAILBOX_ADDR);
    }

    #[test]
    fn deploying_once() {
        let store = setup().into_inner().should_succeed();

        Registry::deploy(store.clone(), RELAYER)
            .should_fail_with_error(Error::AlreadyInitialized { admin: DEPLOYER });

        ADMIN.load(&store).should_succeed_and_equal(DEPLOYER);
        MAILBOX.load(&store).should_succeed_and_equal(MAILBOX_ADDR);
    }

    #[test]
    fn querying_binding_parameters() {
        let registry = setup();

        registry.mailbox().should_succeed_and_equal(MAILBOX_ADDR);
        registry.local_domain().should_succeed_and_equal(DOMAIN);
        registry
            .query(QueryMsg::LocalDomain {})
            .should_succeed_and_equal(Json::from(DOMAIN));
    }
}
