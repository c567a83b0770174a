use {
    crate::{Borsh, Map, PrimaryKey},
    ledger_types::{Order, StdResult, Storage},
};

/// Mimic the behavior of HashSet or BTreeSet.
///
/// Internally, this is basicaly a `Map<T, ()>`. The unit type serializes to
/// empty bytes when using borsh.
pub struct Set<'a, T> {
    map: Map<'a, T, (), Borsh>,
}

impl<'a, T> Set<'a, T> {
    pub const fn new(namespace: &'a str) -> Self {
        Self {
            map: Map::new(namespace),
        }
    }
}

impl<T> Set<'_, T>
where
    T: PrimaryKey,
{
    pub fn has(&self, storage: &dyn Storage, item: &T) -> bool {
        self.map.has(storage, item)
    }

    pub fn insert(&self, storage: &mut dyn Storage, item: &T) -> StdResult<()> {
        self.map.save(storage, item, &())
    }

    pub fn remove(&self, storage: &mut dyn Storage, item: &T) {
        self.map.remove(storage, item)
    }

    pub fn range<'b>(
        &self,
        storage: &'b dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<T>> + 'b>
    where
        T: 'b,
    {
        self.map.keys(storage, order)
    }
}

// ----------------------------------- tests -----------------------------------
