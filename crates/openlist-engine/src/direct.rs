//! Direct transfer: the owner-initiated bypass around order settlement.
//!
//! Moves an asset without sale economics — no fee, no royalty, no order.
//! Used for custodial and corrective moves. The caller must currently own
//! the asset; the receiver may be neither the null identity nor the engine
//! itself (self-custody would strand the asset).

use openlist_types::{AccountId, CollectionId, OpenlistError, Result, TokenId};
use openlist_ledger::AssetLedger;

use crate::settlement::SettlementEngine;

impl<L: AssetLedger> SettlementEngine<L> {
    /// Transfer `token_id` from the caller to `to`, bypassing settlement.
    ///
    /// # Errors
    /// - `InvalidReceiver` for the null identity or the engine's account
    /// - `CollectionUnknown` if the collection is not registered
    /// - `NotTokenOwner` if the caller does not own the asset
    pub fn direct_transfer(
        &mut self,
        caller: AccountId,
        collection: CollectionId,
        to: AccountId,
        token_id: TokenId,
    ) -> Result<()> {
        if to.is_zero() || to == self.engine_account() {
            return Err(OpenlistError::InvalidReceiver);
        }
        if !self.registry().is_tradeable(collection) {
            return Err(OpenlistError::CollectionUnknown(collection));
        }
        let owner = self.ledger().owner_of(collection, token_id)?;
        if owner != caller {
            return Err(OpenlistError::NotTokenOwner);
        }

        self.ledger_mut().transfer(collection, token_id, caller, to)?;
        tracing::info!(%collection, %token_id, from = %caller, to = %to, "direct transfer");
        Ok(())
    }
}
