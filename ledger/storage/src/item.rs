use {
    crate::{Borsh, Codec, Path},
    std::ops::Deref,
};

/// A single value stored under a fixed key.
pub struct Item<'a, T, C = Borsh>
where
    C: Codec<T>,
{
    path: Path<'a, T, C>,
}

impl<'a, T, C> Item<'a, T, C>
where
    C: Codec<T>,
{
    pub const fn new(storage_key: &'a str) -> Self {
        Self {
            path: Path::from_raw(storage_key.as_bytes()),
        }
    }

    pub fn path(&self) -> &Path<'a, T, C> {
        &self.path
    }
}

// `Item` is effectively a wrapper over a `Path`, so instead of implementing
// methods (`load`, `save`, ...) manually, we simply implement `Deref<Target = Path>`
// so that users can access those methods on `Path`.
impl<'a, T, C> Deref for Item<'a, T, C>
where
    C: Codec<T>,
{
    type Target = Path<'a, T, C>;

    fn deref(&self) -> &Self::Target {
        &self.path
    }
}

// ----------------------------------- test ------------------------------------

#[cfg(test)]
mod test {
    use {
        super::Item,
        borsh::{BorshDeserialize, BorshSerialize},
        ledger_types::{MockStorage, ResultExt},
    };

    #[derive(BorshDeserialize, BorshSerialize, PartialEq, Debug)]
    struct Config {
        pub owner: String,
        pub max_tokens: i32,
    }

    const CONFIG: Item<Config> = Item::new("config");

    #[test]
    fn save_and_load_works() {
        let mut storage = MockStorage::new();

        // Attempt to read before the data is saved.
        {
            CONFIG.load(&storage).should_fail_with_error("data not found!");
            CONFIG.may_load(&storage).should_succeed_and_equal(None::<Config>);
        }

        // Attempt to read after saving the data.
        {
            let cfg = Config {
                owner: "admin".to_string(),
                max_tokens: 1234,
            };

            CONFIG.save(&mut storage, &cfg).should_succeed();

            assert!(CONFIG.exists(&storage));
            CONFIG.may_load(&storage).should_succeed_and_equal(Some(cfg));
        }
    }

    #[test]
    fn may_update_works() {
        let mut storage = MockStorage::new();

        const COUNT: Item<u64> = Item::new("count");

        for expect in 1..=3 {
            COUNT
                .may_update(&mut storage, |maybe| {
                    Ok::<_, ledger_types::StdError>(maybe.unwrap_or_default() + 1)
                })
                .should_succeed_and_equal(expect);
        }

        COUNT.load(&storage).should_succeed_and_equal(3);
    }
}
