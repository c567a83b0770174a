use {
    crate::{Borsh, Codec, Item},
    ledger_types::{StdError, StdResult, Storage},
};

/// Integers that a [`Counter`] can hold.
pub trait Number: Sized + Copy + ToString {
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_number {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Number for $t {
                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )+
    };
}

impl_number!(u32, u64);

/// A single number that is monotonically incremented by the given step size.
///
/// Internally, this is an abstraction over an [`Item`](crate::Item).
pub struct Counter<'a, T, C = Borsh>
where
    C: Codec<T>,
{
    item: Item<'a, T, C>,
    base: T,
    step: T,
}

impl<'a, T, C> Counter<'a, T, C>
where
    T: Number,
    C: Codec<T>,
{
    pub const fn new(storage_key: &'a str, base: T, step: T) -> Self {
        Self {
            item: Item::new(storage_key),
            base,
            step,
        }
    }

    /// Load the current counter value.
    pub fn current(&self, storage: &dyn Storage) -> StdResult<T> {
        self.item
            .may_load(storage)
            .map(|maybe_value| maybe_value.unwrap_or(self.base))
    }

    /// Increment the value by the step size; return the values before and after
    /// incrementing.
    pub fn increment(&self, storage: &mut dyn Storage) -> StdResult<(T, T)> {
        let old_value = self.current(storage)?;
        let new_value = old_value
            .checked_add(self.step)
            .ok_or_else(|| StdError::overflow(old_value))?;

        self.item.save(storage, &new_value)?;

        Ok((old_value, new_value))
    }
}

// ----------------------------------- tests -----------------------------------
