use {
    hyperlane_types::{ValidatorSigner, mailbox::Domain, va::InstantiateMsg},
    hyperlane_va::Registry,
    k256::ecdsa::SigningKey,
    ledger_types::{Addr, HexBinary, MockStorage},
    rand::rngs::OsRng,
};

/// The account that deploys the registry and holds its admin capability.
pub const DEPLOYER: Addr = Addr::mock(1);

/// An account that submits announcements on validators' behalf.
pub const RELAYER: Addr = Addr::mock(2);

/// Create a registry over in-memory storage, bound to the given mailbox and
/// domain.
pub fn setup_registry(mailbox: Addr, domain: Domain) -> Registry<MockStorage> {
    let (registry, cap) =
        Registry::deploy(MockStorage::new(), DEPLOYER).expect("failed to deploy registry");

    registry
        .create(DEPLOYER, &cap, InstantiateMsg { mailbox, domain })
        .expect("failed to create registry");

    registry
}

/// A validator with a throwaway key.
#[derive(Debug)]
pub struct MockValidator {
    pub signer: ValidatorSigner,
}

impl MockValidator {
    pub fn random() -> Self {
        Self {
            signer: ValidatorSigner::new(SigningKey::random(&mut OsRng)),
        }
    }

    pub fn address(&self) -> Addr {
        self.signer.address()
    }

    pub fn sign(&self, mailbox: Addr, domain: Domain, storage_location: &str) -> HexBinary {
        self.signer
            .sign_announcement(mailbox, domain, storage_location)
            .expect("failed to sign announcement")
    }

    pub fn random_many(count: usize) -> Vec<Self> {
        (0..count).map(|_| Self::random()).collect()
    }
}
