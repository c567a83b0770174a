use {
    crate::{Addr32, mailbox::Domain, va::VA_DOMAIN_KEY},
    ledger_crypto::{CryptoError, CryptoResult, keccak256, secp256k1_pubkey_recover, to_sized, truncate},
    ledger_types::{Addr, Hash256, HashExt, Inner},
};

/// Length of a recoverable secp256k1 signature: `r (32) || s (32) || v (1)`.
pub const SIGNATURE_LENGTH: usize = 65;

pub fn domain_hash(domain: Domain, address: Addr32, key: &str) -> Hash256 {
    // domain: 4
    // address: 32
    let mut preimage = vec![0u8; 36 + key.len()];
    preimage[..4].copy_from_slice(&domain.to_be_bytes());
    preimage[4..36].copy_from_slice(address.inner());
    preimage[36..].copy_from_slice(key.as_bytes());
    preimage.keccak256()
}

pub fn announcement_hash(domain_hash: Hash256, storage_location: &str) -> Hash256 {
    let mut bz = Vec::with_capacity(Hash256::LENGTH + storage_location.len());
    bz.extend(domain_hash.inner());
    bz.extend(storage_location.as_bytes());
    bz.keccak256()
}

// https://docs.rs/web3/latest/src/web3/signing.rs.html#226-236
pub fn eip191_hash<T>(message: T) -> Hash256
where
    T: AsRef<[u8]>,
{
    let mut preimage = b"\x19Ethereum Signed Message:\n".to_vec();
    preimage.extend(message.as_ref().len().to_string().as_bytes());
    preimage.extend(message.as_ref());
    preimage.keccak256()
}

/// The digest a validator signs to announce a storage location, binding the
/// location to one mailbox on one domain.
pub fn announcement_digest(mailbox: Addr32, domain: Domain, storage_location: &str) -> Hash256 {
    eip191_hash(announcement_hash(
        domain_hash(domain, mailbox, VA_DOMAIN_KEY),
        storage_location,
    ))
}

/// Fingerprint of an announcement, used to reject duplicates.
pub fn replay_hash(validator: Addr, storage_location: &str) -> Hash256 {
    [validator.as_slice(), storage_location.as_bytes()]
        .concat()
        .keccak256()
}

/// Recover the Ethereum address that produced a recoverable signature over
/// the given hash. Accepts `r || s || v` with low `s` and `v` in {27, 28},
/// the encoding every Hyperlane validator announce contract accepts.
pub fn recover_eth_address(message_hash: Hash256, signature: &[u8]) -> CryptoResult<Addr> {
    let signature = to_sized::<SIGNATURE_LENGTH>(signature)?;

    // We subs 27 according to this - https://eips.ethereum.org/EIPS/eip-155
    let recovery_id = match signature[64] {
        v @ (27 | 28) => v - 27,
        v => return Err(CryptoError::InvalidV { v }),
    };

    let pubkey =
        secp256k1_pubkey_recover(message_hash.inner(), &signature[..64], recovery_id, false)?;

    Ok(eth_address(&pubkey))
}

/// Derive the Ethereum address of an uncompressed secp256k1 public key: the
/// last 20 bytes of the Keccak-256 hash of the key, without the `0x04` tag.
pub fn eth_address(uncompressed_pubkey: &[u8]) -> Addr {
    let pk_hash = keccak256(&uncompressed_pubkey[1..]);

    Addr::from_inner(truncate::<20>(&pk_hash))
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        hex_literal::hex,
        ledger_types::ResultExt,
        test_case::test_case,
    };

    // Announcement of a mainnet validator, as signed by the validator agent.
    const MAILBOX: Addr = Addr::from_inner(hex!("35231d4c2d8b8adcb5617a638a0c4548684c7c70"));
    const VALIDATOR: Addr = Addr::from_inner(hex!("4c327ccb881a7542be77500b2833dc84c839e7b7"));
    const STORAGE_LOCATION: &str = "s3://hyperlane-mainnet2-ethereum-validator-0/us-east-1";
    const SIGNATURE: [u8; 65] = hex!(
        "20ac937917284eaa3d67287278fc51875874241fffab5eb5fd8ae899a7074c56"
        "79be15f0bdb5b4f7594cefc5cba17df59b68ba3c55836053a23307db5a95610d"
        "1b"
    );

    #[test]
    fn hashing_announcement() {
        let domain_hash = domain_hash(1, MAILBOX.into(), VA_DOMAIN_KEY);
        assert_eq!(
            domain_hash.inner(),
            &hex!("695a984507aa5d16ff4add0b13e3b388974787edf80feae9c397e783b90e9bb1")
        );

        let announcement_hash = announcement_hash(domain_hash, STORAGE_LOCATION);
        assert_eq!(
            announcement_hash.inner(),
            &hex!("71ba1b9622a18339790a40bafc858a34329c763bd8c0de424d5a836969e30714")
        );

        let digest = eip191_hash(announcement_hash);
        assert_eq!(
            digest.inner(),
            &hex!("d758cb9d934d7a015b04ea0f1433cf1a09bcbb59732eea56545946ea0ef25407")
        );

        assert_eq!(announcement_digest(MAILBOX.into(), 1, STORAGE_LOCATION), digest);
    }

    #[test]
    fn hashing_replay_id() {
        assert_eq!(
            replay_hash(VALIDATOR, STORAGE_LOCATION).inner(),
            &hex!("93df0d0ebaab97462741b0cec196ab58f2e53b9ec1f69f5fd908260bc9514bce")
        );
    }

    #[test]
    fn recovering_validator() {
        let digest = announcement_digest(MAILBOX.into(), 1, STORAGE_LOCATION);

        recover_eth_address(digest, &SIGNATURE).should_succeed_and_equal(VALIDATOR);
    }

    #[test_case(
        MAILBOX,
        2;
        "different domain"
    )]
    #[test_case(
        Addr::from_inner(hex!("35231d4c2d8b8adcb5617a638a0c4548684c7c71")),
        1;
        "different mailbox"
    )]
    fn recovering_under_different_binding(mailbox: Addr, domain: Domain) {
        let digest = announcement_digest(mailbox.into(), domain, STORAGE_LOCATION);

        // Recovery itself may succeed, but must never yield the validator.
        if let Ok(recovered) = recover_eth_address(digest, &SIGNATURE) {
            assert_ne!(recovered, VALIDATOR);
        }
    }

    #[test]
    fn rejecting_malformed_signature() {
        let digest = announcement_digest(MAILBOX.into(), 1, STORAGE_LOCATION);

        recover_eth_address(digest, &SIGNATURE[..64]).should_fail_and(|err| {
            *err == CryptoError::IncorrectLength {
                expect: 65,
                actual: 64,
            }
        });

        for v in [0, 1, 26, 29] {
            let mut bad_v = SIGNATURE;
            bad_v[64] = v;
            recover_eth_address(digest, &bad_v)
                .should_fail_and(|err| *err == CryptoError::InvalidV { v });
        }
    }

    #[test]
    fn rejecting_high_s_signature() {
        let digest = announcement_digest(MAILBOX.into(), 1, STORAGE_LOCATION);

        // The mainnet signature as `(r, n - s)` with the recovery id flipped,
        // which recovers the same key but is not the canonical encoding.
        let high_s = hex!(
            "20ac937917284eaa3d67287278fc51875874241fffab5eb5fd8ae899a7074c56"
            "8641ea0f424a4b08a6b3103a345e82091f4622aa59c53fe81d9f56b175a0e034"
            "1c"
        );

        recover_eth_address(digest, &high_s).should_fail_and(|err| *err == CryptoError::HighS);
    }
}
