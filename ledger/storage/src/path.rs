use {
    crate::Codec,
    ledger_types::{StdError, StdResult, Storage},
    std::{borrow::Cow, marker::PhantomData},
};

/// A typed pointer to a single value in the storage.
pub struct Path<'a, T, C> {
    storage_key: Cow<'a, [u8]>,
    data: PhantomData<T>,
    codec: PhantomData<C>,
}

impl<'a, T, C> Path<'a, T, C>
where
    C: Codec<T>,
{
    pub fn new(storage_key: Vec<u8>) -> Self {
        Self {
            storage_key: Cow::Owned(storage_key),
            data: PhantomData,
            codec: PhantomData,
        }
    }

    pub const fn from_raw(storage_key: &'a [u8]) -> Self {
        Self {
            storage_key: Cow::Borrowed(storage_key),
            data: PhantomData,
            codec: PhantomData,
        }
    }

    #[inline]
    pub fn storage_key(&self) -> &[u8] {
        self.storage_key.as_ref()
    }

    pub fn exists(&self, storage: &dyn Storage) -> bool {
        storage.read(self.storage_key()).is_some()
    }

    pub fn may_load(&self, storage: &dyn Storage) -> StdResult<Option<T>> {
        storage
            .read(self.storage_key())
            .map(|val| C::decode(&val))
            .transpose()
    }

    pub fn load(&self, storage: &dyn Storage) -> StdResult<T> {
        storage
            .read(self.storage_key())
            .ok_or_else(|| StdError::data_not_found::<T>(self.storage_key()))
            .and_then(|val| C::decode(&val))
    }

    pub fn save(&self, storage: &mut dyn Storage, data: &T) -> StdResult<()> {
        let data_raw = C::encode(data)?;
        storage.write(self.storage_key(), &data_raw);
        Ok(())
    }

    pub fn remove(&self, storage: &mut dyn Storage) {
        storage.remove(self.storage_key());
    }

    pub fn may_update<F, E>(&self, storage: &mut dyn Storage, action: F) -> Result<T, E>
    where
        F: FnOnce(Option<T>) -> Result<T, E>,
        E: From<StdError>,
    {
        let data = action(self.may_load(storage)?)?;

        self.save(storage, &data)?;

        Ok(data)
    }

    pub fn update<F, E>(&self, storage: &mut dyn Storage, action: F) -> Result<T, E>
    where
        F: FnOnce(T) -> Result<T, E>,
        E: From<StdError>,
    {
        let data = action(self.load(storage)?)?;

        self.save(storage, &data)?;

        Ok(data)
    }
}
