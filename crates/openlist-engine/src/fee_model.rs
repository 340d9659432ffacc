//! Platform fee state with a construction-time ceiling.

use openlist_types::constants::{DEFAULT_MAX_PLATFORM_FEE_BPS, MAX_BPS, MAX_ROYALTY_BPS};
use openlist_types::{AccountId, FeeConfig, OpenlistError, Result};

/// Admin-mutable fee state. The cap is configuration: conservative by
/// default, raisable at construction, never above 100%.
#[derive(Debug, Clone)]
pub struct FeeModel {
    config: FeeConfig,
    max_fee_bps: u16,
}

impl FeeModel {
    /// Fee model with the default 10% platform-fee ceiling.
    #[must_use]
    pub fn new(fee_recipient: AccountId, royalty_recipient: AccountId) -> Self {
        Self::with_cap(
            fee_recipient,
            royalty_recipient,
            DEFAULT_MAX_PLATFORM_FEE_BPS,
        )
    }

    /// Fee model with an explicit ceiling, clamped so that the platform
    /// fee plus a maximal royalty can never carve out more than 100% of a
    /// payment.
    #[must_use]
    pub fn with_cap(
        fee_recipient: AccountId,
        royalty_recipient: AccountId,
        max_fee_bps: u16,
    ) -> Self {
        Self {
            config: FeeConfig::new(fee_recipient, royalty_recipient),
            max_fee_bps: max_fee_bps.min(MAX_BPS - MAX_ROYALTY_BPS),
        }
    }

    /// Set the platform fee rate.
    ///
    /// # Errors
    /// `InvalidFee` if `bps` exceeds the configured ceiling.
    pub fn set_platform_fee(&mut self, bps: u16) -> Result<()> {
        if bps > self.max_fee_bps {
            return Err(OpenlistError::InvalidFee {
                bps,
                max: self.max_fee_bps,
            });
        }
        self.config.platform_fee_bps = bps;
        Ok(())
    }

    pub fn set_fee_recipient(&mut self, recipient: AccountId) {
        self.config.fee_recipient = recipient;
    }

    pub fn set_royalty_recipient(&mut self, recipient: AccountId) {
        self.config.royalty_recipient = recipient;
    }

    #[must_use]
    pub fn platform_fee_bps(&self) -> u16 {
        self.config.platform_fee_bps
    }

    #[must_use]
    pub fn fee_recipient(&self) -> AccountId {
        self.config.fee_recipient
    }

    #[must_use]
    pub fn royalty_recipient(&self) -> AccountId {
        self.config.royalty_recipient
    }

    #[must_use]
    pub fn config(&self) -> &FeeConfig {
        &self.config
    }
}
