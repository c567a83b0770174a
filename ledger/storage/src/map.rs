use {
    crate::{
        Borsh, Codec, Path, PrimaryKey,
        key::{increment_last_byte, namespace_with_key},
    },
    ledger_types::{Order, Record, StdError, StdResult, Storage},
    std::marker::PhantomData,
};

/// A collection of values indexed by key, iterable in key order.
pub struct Map<'a, K, T, C = Borsh>
where
    C: Codec<T>,
{
    namespace: &'a [u8],
    key: PhantomData<K>,
    data: PhantomData<T>,
    codec: PhantomData<C>,
}

impl<'a, K, T, C> Map<'a, K, T, C>
where
    C: Codec<T>,
{
    pub const fn new(namespace: &'a str) -> Self {
        Self {
            namespace: namespace.as_bytes(),
            key: PhantomData,
            data: PhantomData,
            codec: PhantomData,
        }
    }
}

impl<K, T, C> Map<'_, K, T, C>
where
    K: PrimaryKey,
    C: Codec<T>,
{
    pub fn path(&self, key: &K) -> Path<'static, T, C> {
        Path::new(namespace_with_key(self.namespace, &key.raw_key()))
    }

    pub fn has(&self, storage: &dyn Storage, key: &K) -> bool {
        self.path(key).exists(storage)
    }

    pub fn may_load(&self, storage: &dyn Storage, key: &K) -> StdResult<Option<T>> {
        self.path(key).may_load(storage)
    }

    pub fn load(&self, storage: &dyn Storage, key: &K) -> StdResult<T> {
        self.path(key).load(storage)
    }

    pub fn save(&self, storage: &mut dyn Storage, key: &K, data: &T) -> StdResult<()> {
        self.path(key).save(storage, data)
    }

    pub fn remove(&self, storage: &mut dyn Storage, key: &K) {
        self.path(key).remove(storage)
    }

    pub fn may_update<F, E>(&self, storage: &mut dyn Storage, key: &K, action: F) -> Result<T, E>
    where
        F: FnOnce(Option<T>) -> Result<T, E>,
        E: From<StdError>,
    {
        self.path(key).may_update(storage, action)
    }

    pub fn range<'b>(
        &self,
        storage: &'b dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<(K, T)>> + 'b>
    where
        K: 'b,
        T: 'b,
        C: 'b,
    {
        Box::new(
            scan_namespace(storage, self.namespace, order).map(|(k, v)| -> StdResult<_> {
                Ok((K::from_raw_key(&k)?, <C as Codec<T>>::decode(&v)?))
            }),
        )
    }

    pub fn keys<'b>(
        &self,
        storage: &'b dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<K>> + 'b>
    where
        K: 'b,
        T: 'b,
        C: 'b,
    {
        Box::new(
            scan_namespace(storage, self.namespace, order).map(|(k, _)| K::from_raw_key(&k)),
        )
    }

    pub fn values<'b>(
        &self,
        storage: &'b dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<T>> + 'b>
    where
        K: 'b,
        T: 'b,
        C: 'b,
    {
        Box::new(
            scan_namespace(storage, self.namespace, order)
                .map(|(_, v)| <C as Codec<T>>::decode(&v)),
        )
    }
}

/// Iterate the raw key-value pairs under a namespace, with the namespace
/// stripped from the keys.
fn scan_namespace<'b>(
    storage: &'b dyn Storage,
    namespace: &[u8],
    order: Order,
) -> Box<dyn Iterator<Item = Record> + 'b> {
    let min = namespace_with_key(namespace, &[]);
    let max = increment_last_byte(&min);
    let prefix_len = min.len();

    Box::new(
        storage
            .scan(Some(&min), max.as_deref(), order)
            .map(move |(k, v)| (k[prefix_len..].to_vec(), v)),
    )
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        ledger_types::{MockStorage, ResultExt},
    };

    const FOOS: Map<u32, String> = Map::new("foo");
    const FOOBARS: Map<u32, String> = Map::new("foobar");

    #[test]
    fn iterating_in_key_order() {
        let mut storage = MockStorage::new();

        for (key, value) in [(300, "c"), (2, "a"), (20, "b")] {
            FOOS.save(&mut storage, &key, &value.to_string())
                .should_succeed();
        }

        // A sibling namespace sharing a prefix must not leak into the range.
        FOOBARS
            .save(&mut storage, &1, &"x".to_string())
            .should_succeed();

        let records = FOOS
            .range(&storage, Order::Ascending)
            .collect::<StdResult<Vec<_>>>()
            .should_succeed();
        assert_eq!(records, vec![
            (2, "a".to_string()),
            (20, "b".to_string()),
            (300, "c".to_string()),
        ]);

        let keys = FOOS
            .keys(&storage, Order::Descending)
            .collect::<StdResult<Vec<_>>>()
            .should_succeed();
        assert_eq!(keys, vec![300, 20, 2]);

        let values = FOOBARS
            .values(&storage, Order::Ascending)
            .collect::<StdResult<Vec<_>>>()
            .should_succeed();
        assert_eq!(values, vec!["x".to_string()]);
    }

    #[test]
    fn has_and_remove_work() {
        let mut storage = MockStorage::new();

        assert!(!FOOS.has(&storage, &1));

        FOOS.save(&mut storage, &1, &"a".to_string())
            .should_succeed();
        assert!(FOOS.has(&storage, &1));
        FOOS.load(&storage, &1)
            .should_succeed_and_equal("a".to_string());

        FOOS.remove(&mut storage, &1);
        assert!(!FOOS.has(&storage, &1));
        FOOS.load(&storage, &1)
            .should_fail_with_error("data not found!");
    }
}
