use {
    crate::{Announcement, SIGNATURE_LENGTH, eth_address, mailbox::Domain, va::ExecuteMsg},
    k256::ecdsa::SigningKey,
    ledger_crypto::{CryptoError, CryptoResult},
    ledger_types::{Addr, Hash256, HexBinary, Inner},
    std::fmt,
};

/// A validator's secp256k1 key, producing Ethereum-style recoverable
/// signatures.
pub struct ValidatorSigner {
    sk: SigningKey,
    address: Addr,
}

impl ValidatorSigner {
    pub fn new(sk: SigningKey) -> Self {
        let pubkey = sk.verifying_key().to_encoded_point(false);
        let address = eth_address(pubkey.as_bytes());

        Self { sk, address }
    }

    pub fn from_bytes(sk_bytes: &[u8]) -> CryptoResult<Self> {
        let sk = SigningKey::from_slice(sk_bytes).map_err(|err| CryptoError::InvalidPrivateKey {
            reason: err.to_string(),
        })?;

        Ok(Self::new(sk))
    }

    pub fn address(&self) -> Addr {
        self.address
    }

    /// Sign a prehashed digest, returning `r || s || v` with `v` in {27, 28}.
    pub fn sign_digest(&self, digest: Hash256) -> CryptoResult<[u8; SIGNATURE_LENGTH]> {
        let (sig, recovery_id) = self
            .sk
            .sign_prehash_recoverable(digest.inner())
            .map_err(|err| CryptoError::SigningFailed {
                reason: err.to_string(),
            })?;

        let mut bytes = [0; SIGNATURE_LENGTH];
        bytes[..64].copy_from_slice(&sig.to_bytes());
        bytes[64] = 27 + recovery_id.to_byte();

        Ok(bytes)
    }

    pub fn sign_announcement(
        &self,
        mailbox: Addr,
        domain: Domain,
        storage_location: &str,
    ) -> CryptoResult<HexBinary> {
        let announcement = Announcement::new(self.address, mailbox, domain, storage_location);

        self.sign_digest(announcement.digest()).map(HexBinary::from)
    }

    /// Build the message that announces `storage_location` to the registry
    /// bound to `mailbox` on `domain`.
    pub fn announce_msg(
        &self,
        mailbox: Addr,
        domain: Domain,
        storage_location: &str,
    ) -> CryptoResult<ExecuteMsg> {
        Ok(ExecuteMsg::Announce {
            validator: self.address,
            signature: self.sign_announcement(mailbox, domain, storage_location)?,
            storage_location: storage_location.to_string(),
        })
    }
}

impl fmt::Debug for ValidatorSigner {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ValidatorSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::recover_eth_address,
        hex_literal::hex,
        ledger_types::ResultExt,
        rand::rngs::OsRng,
    };

    // The first development account of anvil and hardhat.
    const DEV_KEY: [u8; 32] =
        hex!("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80");
    const DEV_ADDRESS: Addr = Addr::from_inner(hex!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"));
    const MAILBOX: Addr = Addr::from_inner(hex!("35231d4c2d8b8adcb5617a638a0c4548684c7c70"));
    const STORAGE_LOCATION: &str = "file:///tmp/hyperlane/validator-0";

    #[test]
    fn deriving_address() {
        let signer = ValidatorSigner::from_bytes(&DEV_KEY).should_succeed();
        assert_eq!(signer.address(), DEV_ADDRESS);

        // The key must never show up in logs.
        let debug = format!("{signer:?}");
        assert!(debug.contains("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"));
        assert!(!debug.contains("ac0974be"));
    }

    #[test]
    fn recovering_dev_announcement() {
        let announcement = Announcement::new(DEV_ADDRESS, MAILBOX, 1, STORAGE_LOCATION);
        assert_eq!(
            announcement.digest().inner(),
            &hex!("421761e5e05d1b424622a77ae807ef99c81de148f5995b836049a276c1324cb6")
        );

        let signature = hex!(
            "3009139ad709d445d82a458dafc005586743b24da144e20b86fcef85722b8c79"
            "2a80b8f4d2f2e4e9436349fc2285f4b85a4a3a605f0baca2adee75dde2d40387"
            "1b"
        );
        announcement
            .recover_signer(&signature)
            .should_succeed_and_equal(DEV_ADDRESS);
    }

    #[test]
    fn signing_announcement() {
        let signer = ValidatorSigner::new(SigningKey::random(&mut OsRng));
        let signature = signer
            .sign_announcement(MAILBOX, 1, STORAGE_LOCATION)
            .should_succeed();

        assert_eq!(signature.len(), SIGNATURE_LENGTH);
        assert!(matches!(signature[64], 27 | 28));

        let announcement = Announcement::new(signer.address(), MAILBOX, 1, STORAGE_LOCATION);
        recover_eth_address(announcement.digest(), &signature)
            .should_succeed_and_equal(signer.address());
    }

    #[test]
    fn building_announce_msg() {
        let signer = ValidatorSigner::from_bytes(&DEV_KEY).should_succeed();

        let ExecuteMsg::Announce {
            validator,
            signature,
            storage_location,
        } = signer
            .announce_msg(MAILBOX, 1, STORAGE_LOCATION)
            .should_succeed();

        assert_eq!(validator, DEV_ADDRESS);
        assert_eq!(storage_location, STORAGE_LOCATION);
        assert!(
            Announcement::new(validator, MAILBOX, 1, &storage_location)
                .is_signed_by_validator(&signature)
        );
    }

    #[test]
    fn rejecting_invalid_key() {
        for sk_bytes in [&[0; 32][..], &[1; 33]] {
            ValidatorSigner::from_bytes(sk_bytes)
                .should_fail_and(|err| matches!(err, CryptoError::InvalidPrivateKey { .. }));
        }
    }
}
