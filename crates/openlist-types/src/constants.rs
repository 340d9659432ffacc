//! System-wide constants for the OpenList settlement engine.

/// Basis-point denominator: 10_000 bps = 100%.
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Hard ceiling on any fee rate (100%).
pub const MAX_BPS: u16 = 10_000;

/// Maximum per-asset royalty (10%). `set_royalty` rejects anything above.
pub const MAX_ROYALTY_BPS: u16 = 1_000;

/// Default ceiling on the platform fee (10%). The `FeeModel` cap is
/// configuration and may be raised at construction, up to [`MAX_BPS`].
pub const DEFAULT_MAX_PLATFORM_FEE_BPS: u16 = 1_000;

/// First token id minted in a fresh collection.
pub const FIRST_TOKEN_ID: u64 = 1;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "OpenList";
