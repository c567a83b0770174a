mod error;
mod execute;
mod query;
mod registry;
mod state;

pub use {error::*, execute::*, query::*, registry::*, state::*};
