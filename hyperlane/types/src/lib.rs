mod address;
mod announcement;
mod crypto;
pub mod mailbox;
mod signer;
pub mod va;

pub use {address::*, announcement::*, crypto::*, signer::*};
