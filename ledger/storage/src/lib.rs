mod codec;
mod counter;
mod item;
mod key;
mod map;
mod path;
mod set;

pub use crate::{
    codec::{Borsh, Codec, Serde},
    counter::{Counter, Number},
    item::Item,
    key::{PrimaryKey, namespace_with_key},
    map::Map,
    path::Path,
    set::Set,
};
