//! Platform fee configuration.

use serde::{Deserialize, Serialize};

use crate::AccountId;

/// Process-wide fee record: the platform's cut of every sale and the
/// identities that receive the platform and fallback-royalty shares.
///
/// Set at engine construction, mutable only through the admin surface.
/// The per-asset royalty *rate* and creator live in the asset ledger, not
/// here; `royalty_recipient` is only the fallback payee for assets that
/// report a null creator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Platform fee in basis points of the sale price.
    pub platform_fee_bps: u16,
    /// Receives the platform share of every settlement.
    pub fee_recipient: AccountId,
    /// Receives the royalty share when an asset has no creator on record.
    pub royalty_recipient: AccountId,
}

impl FeeConfig {
    /// A zero-fee config paying both shares to the given recipients.
    #[must_use]
    pub fn new(fee_recipient: AccountId, royalty_recipient: AccountId) -> Self {
        Self {
            platform_fee_bps: 0,
            fee_recipient,
            royalty_recipient,
        }
    }
}
