use std::collections::BTreeMap;

/// A key-value pair.
pub type Record = (Vec<u8>, Vec<u8>);

/// A batch of writes and deletes, to be applied to a storage altogether.
pub type Batch = BTreeMap<Vec<u8>, Op>;

/// A single pending write or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Insert(Vec<u8>),
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// Describing a KV store that supports read, write, and iteration.
///
/// The object must be Send and Sync, so that a registry owning it can be
/// shared between threads behind a lock.
pub trait Storage: Send + Sync {
    /// Read a single key-value pair from the storage.
    ///
    /// Return `None` if the key doesn't exist.
    fn read(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Iterate over data in the KV store under the given bounds and order.
    ///
    /// Minimum bound is inclusive, maximum bound is exclusive.
    /// If `min` > `max`, an empty iterator is to be returned.
    ///
    /// Note: This is different from the behavior of Rust's `BTreeMap`, which
    /// panics if `min` > `max`.
    fn scan<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a>;

    /// Similar to `scan`, but only return the keys.
    fn scan_keys<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Vec<u8>> + 'a> {
        Box::new(self.scan(min, max, order).map(|(k, _)| k))
    }

    /// Similar to `scan`, but only return the values.
    fn scan_values<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Vec<u8>> + 'a> {
        Box::new(self.scan(min, max, order).map(|(_, v)| v))
    }

    /// Write a single key-value pair to the storage.
    fn write(&mut self, key: &[u8], value: &[u8]);

    /// Delete a single key-value pair from the storage.
    ///
    /// No-op if the key doesn't exist.
    fn remove(&mut self, key: &[u8]);

    /// Perform a batch of writes and removes altogether.
    ///
    /// The default implementation here is just looping through the ops and
    /// applying them one by one.
    fn flush(&mut self, batch: Batch) {
        for (key, op) in batch {
            if let Op::Insert(value) = op {
                self.write(&key, &value);
            } else {
                self.remove(&key);
            }
        }
    }
}
