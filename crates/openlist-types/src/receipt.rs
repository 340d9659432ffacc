//! Settlement receipts: the audit artifact of a completed sale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, CollectionId, OrderHash, TokenId};

/// Record of one completed settlement: the order's identity, the exact
/// three-way split of the payment, and the asset's new owner.
///
/// The three shares always sum to the payment — the engine computes the
/// seller share by subtraction, so rounding can never create or destroy
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReceipt {
    /// Digest of the settled order's canonical encoding.
    pub order_hash: OrderHash,
    /// The traded asset.
    pub collection: CollectionId,
    pub token_id: TokenId,
    /// Previous owner; received the remainder share.
    pub seller: AccountId,
    /// New owner of the asset.
    pub buyer: AccountId,
    /// `payment - royalty_share - platform_share`.
    pub seller_share: u128,
    /// `payment * royalty_bps / 10_000`, paid to `royalty_recipient`.
    pub royalty_share: u128,
    /// `payment * platform_fee_bps / 10_000`, paid to `fee_recipient`.
    pub platform_share: u128,
    /// The asset's creator, or the configured fallback for creatorless
    /// assets.
    pub royalty_recipient: AccountId,
    pub fee_recipient: AccountId,
    /// When the settlement committed.
    pub settled_at: DateTime<Utc>,
}

impl SettlementReceipt {
    /// Total value distributed; equals the payment exactly.
    #[must_use]
    pub fn total(&self) -> u128 {
        self.seller_share + self.royalty_share + self.platform_share
    }
}
