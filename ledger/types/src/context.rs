use crate::{Addr, Storage};

/// Context for calls that may mutate state.
pub struct MutableCtx<'a> {
    pub storage: &'a mut dyn Storage,
    /// The account that submitted the call.
    pub sender: Addr,
}

impl MutableCtx<'_> {
    pub fn as_immutable(&self) -> ImmutableCtx<'_> {
        ImmutableCtx {
            storage: &*self.storage,
        }
    }
}

/// Context for read-only calls.
#[derive(Clone, Copy)]
pub struct ImmutableCtx<'a> {
    pub storage: &'a dyn Storage,
}
