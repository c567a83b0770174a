mod error;
mod hashers;
mod secp256k1;
mod utils;

pub use crate::{
    error::{CryptoError, CryptoResult},
    hashers::keccak256,
    secp256k1::secp256k1_pubkey_recover,
    utils::{to_sized, truncate},
};
