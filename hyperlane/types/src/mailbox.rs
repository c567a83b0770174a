/// Numeric identifier of a chain within the Hyperlane network.
///
/// Domain registry: <https://github.com/hyperlane-xyz/hyperlane-registry>
pub type Domain = u32;
