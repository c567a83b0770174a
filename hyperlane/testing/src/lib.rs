mod setup;
mod tracing;
mod vectors;

pub use {setup::*, tracing::*, vectors::*};
