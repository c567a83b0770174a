mod buffer;
mod bytes;
mod context;
mod encoders;
mod error;
mod mock;
mod response;
mod result;
mod storage;

pub use crate::{
    buffer::Buffer,
    bytes::{Addr, Hash256, HexBinary, HexByteArray, Inner},
    context::{ImmutableCtx, MutableCtx},
    encoders::{BorshDeExt, BorshSerExt, HashExt, Json, JsonDeExt, JsonSerExt},
    error::{StdError, StdResult},
    mock::MockStorage,
    response::{ContractEvent, EventName, Response},
    result::ResultExt,
    storage::{Batch, Op, Order, Record, Storage},
};
