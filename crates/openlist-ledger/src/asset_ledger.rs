//! The asset ledger contract.
//!
//! Ownership, creator identity, and per-asset royalty rates live outside
//! the settlement engine. The engine consumes this trait; collaborators
//! (an on-chain bridge, a database, the in-memory reference) implement it.

use openlist_types::{AccountId, CollectionId, Result, TokenId};

/// External collaborator owning per-asset ownership and royalty state.
///
/// All reads made within a single settlement are consistent with one
/// serialized engine step: the engine never suspends between its ownership
/// re-check and the transfer.
pub trait AssetLedger {
    /// Current owner of the asset.
    ///
    /// # Errors
    /// `UnknownToken` if the asset was never minted.
    fn owner_of(&self, collection: CollectionId, token_id: TokenId) -> Result<AccountId>;

    /// Original creator of the asset; receives the royalty share on every
    /// resale. May be the null identity for assets without a creator on
    /// record.
    fn creator_of(&self, collection: CollectionId, token_id: TokenId) -> Result<AccountId>;

    /// Royalty rate in basis points, bounded by
    /// [`openlist_types::constants::MAX_ROYALTY_BPS`].
    fn royalty_of(&self, collection: CollectionId, token_id: TokenId) -> Result<u16>;

    /// Move the asset from `from` to `to`.
    ///
    /// # Errors
    /// `UnknownToken` if unminted; `TransferFailed` if `from` is not the
    /// current owner.
    fn transfer(
        &mut self,
        collection: CollectionId,
        token_id: TokenId,
        from: AccountId,
        to: AccountId,
    ) -> Result<()>;

    /// Set the asset's royalty rate. Creator-restricted.
    ///
    /// # Errors
    /// `NotCreator` if `caller` is not the creator; `InvalidFee` if `bps`
    /// exceeds the royalty ceiling.
    fn set_royalty(
        &mut self,
        collection: CollectionId,
        token_id: TokenId,
        caller: AccountId,
        bps: u16,
    ) -> Result<()>;
}
