use ledger_types::{HexByteArray, StdError, StdResult};

/// Types that can be used as keys in a [`Map`](crate::Map) or
/// [`Set`](crate::Set).
///
/// The raw key must sort in the same order as the key itself, so that
/// iterating a map yields its entries in key order.
pub trait PrimaryKey: Sized {
    fn raw_key(&self) -> Vec<u8>;

    fn from_raw_key(bytes: &[u8]) -> StdResult<Self>;
}

impl PrimaryKey for u32 {
    fn raw_key(&self) -> Vec<u8> {
        self.to_be_bytes().to_vec()
    }

    fn from_raw_key(bytes: &[u8]) -> StdResult<Self> {
        bytes
            .try_into()
            .map(u32::from_be_bytes)
            .map_err(|err| StdError::deserialize::<Self, _>("key", err))
    }
}

impl<const N: usize> PrimaryKey for HexByteArray<N> {
    fn raw_key(&self) -> Vec<u8> {
        self.to_vec()
    }

    fn from_raw_key(bytes: &[u8]) -> StdResult<Self> {
        bytes.try_into()
    }
}

impl PrimaryKey for String {
    fn raw_key(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn from_raw_key(bytes: &[u8]) -> StdResult<Self> {
        String::from_utf8(bytes.to_vec()).map_err(|err| StdError::deserialize::<Self, _>("key", err))
    }
}

/// Prefix the namespace with its length as a 2-byte big-endian integer, then
/// append the key. The length prefix keeps one namespace from being a prefix
/// of another's keys.
pub fn namespace_with_key(namespace: &[u8], key: &[u8]) -> Vec<u8> {
    debug_assert!(
        namespace.len() <= u16::MAX as usize,
        "namespace too long: {}",
        namespace.len()
    );

    let mut out = Vec::with_capacity(2 + namespace.len() + key.len());
    out.extend_from_slice(&(namespace.len() as u16).to_be_bytes());
    out.extend_from_slice(namespace);
    out.extend_from_slice(key);
    out
}

/// The smallest byte string that is greater than every string starting with
/// the given prefix, or `None` if no such string exists.
pub(crate) fn increment_last_byte(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut bound = prefix.to_vec();

    while let Some(last) = bound.pop() {
        if last < u8::MAX {
            bound.push(last + 1);
            return Some(bound);
        }
    }

    None
}

// ----------------------------------- tests -----------------------------------
