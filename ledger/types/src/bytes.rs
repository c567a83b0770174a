use {
    crate::{StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    std::{
        fmt::{self, Debug, Display},
        io,
        ops::Deref,
        str::FromStr,
    },
};

/// A 20-byte Ethereum-style address.
pub type Addr = HexByteArray<20>;

/// A 32-byte hash.
pub type Hash256 = HexByteArray<32>;

/// Types that wrap a single inner value.
pub trait Inner {
    type U;

    fn inner(&self) -> &Self::U;

    fn into_inner(self) -> Self::U;
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").unwrap_or(s)
}

// ------------------------------ fixed length ---------------------------------

/// A fixed-length byte array, serialized as a `0x`-prefixed lowercase hex
/// string in JSON and as raw bytes in Borsh.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexByteArray<const N: usize>([u8; N]);

impl<const N: usize> HexByteArray<N> {
    pub const LENGTH: usize = N;

    pub const fn from_inner(inner: [u8; N]) -> Self {
        Self(inner)
    }

    /// A deterministic placeholder value, for use in tests.
    pub const fn mock(index: u8) -> Self {
        Self([index; N])
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl<const N: usize> Inner for HexByteArray<N> {
    type U = [u8; N];

    fn inner(&self) -> &Self::U {
        &self.0
    }

    fn into_inner(self) -> Self::U {
        self.0
    }
}

impl<const N: usize> Deref for HexByteArray<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> AsRef<[u8]> for HexByteArray<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for HexByteArray<N> {
    fn from(inner: [u8; N]) -> Self {
        Self(inner)
    }
}

impl<const N: usize> TryFrom<&[u8]> for HexByteArray<N> {
    type Error = StdError;

    fn try_from(bytes: &[u8]) -> StdResult<Self> {
        ledger_crypto::to_sized::<N>(bytes)
            .map(Self)
            .map_err(Into::into)
    }
}

impl<const N: usize> FromStr for HexByteArray<N> {
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        let bytes = hex::decode(strip_hex_prefix(s))
            .map_err(|err| StdError::deserialize::<Self, _>("hex", err))?;

        Self::try_from(bytes.as_slice())
    }
}

impl<const N: usize> Display for HexByteArray<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl<const N: usize> Debug for HexByteArray<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HexByteArray({self})")
    }
}

impl<const N: usize> ser::Serialize for HexByteArray<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, const N: usize> de::Deserialize<'de> for HexByteArray<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = <String as de::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// The array is written as-is, without a length prefix, as its length is
// known at compile time.
impl<const N: usize> BorshSerialize for HexByteArray<N> {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.0)
    }
}

impl<const N: usize> BorshDeserialize for HexByteArray<N> {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let mut inner = [0; N];
        reader.read_exact(&mut inner)?;
        Ok(Self(inner))
    }
}

// ----------------------------- variable length -------------------------------

/// A byte vector of arbitrary length, serialized as a `0x`-prefixed
/// lowercase hex string in JSON.
#[derive(BorshSerialize, BorshDeserialize, Default, Clone, PartialEq, Eq, Hash)]
pub struct HexBinary(Vec<u8>);

impl Inner for HexBinary {
    type U = Vec<u8>;

    fn inner(&self) -> &Self::U {
        &self.0
    }

    fn into_inner(self) -> Self::U {
        self.0
    }
}

impl Deref for HexBinary {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for HexBinary {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for HexBinary {
    fn from(inner: Vec<u8>) -> Self {
        Self(inner)
    }
}

impl From<&[u8]> for HexBinary {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for HexBinary {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl FromStr for HexBinary {
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        hex::decode(strip_hex_prefix(s))
            .map(Self)
            .map_err(|err| StdError::deserialize::<Self, _>("hex", err))
    }
}

impl Display for HexBinary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(&self.0))
    }
}

impl Debug for HexBinary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HexBinary({self})")
    }
}

impl ser::Serialize for HexBinary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for HexBinary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = <String as de::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ----------------------------------- tests -----------------------------------
