use {
    borsh::{BorshDeserialize, BorshSerialize},
    ledger_types::{BorshDeExt, BorshSerExt, JsonDeExt, JsonSerExt, StdResult},
    serde::{de::DeserializeOwned, ser::Serialize},
};

/// A marker that designates encoding/decoding schemes.
pub trait Codec<T> {
    fn encode(data: &T) -> StdResult<Vec<u8>>;

    fn decode(data: &[u8]) -> StdResult<T>;
}

// ----------------------------------- borsh -----------------------------------

/// Represents the Borsh encoding scheme.
pub struct Borsh;

impl<T> Codec<T> for Borsh
where
    T: BorshSerialize + BorshDeserialize,
{
    fn encode(data: &T) -> StdResult<Vec<u8>> {
        data.to_borsh_vec()
    }

    fn decode(data: &[u8]) -> StdResult<T> {
        data.deserialize_borsh()
    }
}

// -------------------------------- serde json ---------------------------------

/// Represents the JSON encoding scheme.
pub struct Serde;

impl<T> Codec<T> for Serde
where
    T: Serialize + DeserializeOwned,
{
    fn encode(data: &T) -> StdResult<Vec<u8>> {
        data.to_json_vec()
    }

    fn decode(data: &[u8]) -> StdResult<T> {
        data.deserialize_json()
    }
}
