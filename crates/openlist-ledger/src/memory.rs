//! Reference in-memory asset ledger.
//!
//! Mirrors the observable behavior of the original NFT contract: minting
//! assigns ids 1, 2, 3… per collection and records the minter as both
//! owner and creator; royalties are creator-set and capped at 10%.

use std::collections::HashMap;

use openlist_types::constants::{FIRST_TOKEN_ID, MAX_ROYALTY_BPS};
use openlist_types::{AccountId, CollectionId, OpenlistError, Result, TokenId};

use crate::asset_ledger::AssetLedger;

/// Per-asset record.
#[derive(Debug, Clone)]
struct TokenRecord {
    owner: AccountId,
    creator: AccountId,
    royalty_bps: u16,
    uri: String,
}

/// HashMap-backed [`AssetLedger`] used by tests and local deployments.
#[derive(Debug, Default)]
pub struct InMemoryAssetLedger {
    tokens: HashMap<(CollectionId, TokenId), TokenRecord>,
    /// Next id to mint, per collection.
    next_id: HashMap<CollectionId, u64>,
}

impl InMemoryAssetLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new asset in `collection`, owned and created by `caller`.
    /// Ids start at [`FIRST_TOKEN_ID`] and increment per collection.
    pub fn mint(
        &mut self,
        collection: CollectionId,
        caller: AccountId,
        uri: impl Into<String>,
    ) -> TokenId {
        let next = self.next_id.entry(collection).or_insert(FIRST_TOKEN_ID);
        let token_id = TokenId(*next);
        *next += 1;

        self.tokens.insert(
            (collection, token_id),
            TokenRecord {
                owner: caller,
                creator: caller,
                royalty_bps: 0,
                uri: uri.into(),
            },
        );
        tracing::debug!(%collection, %token_id, creator = %caller, "minted token");
        token_id
    }

    /// Number of assets in `collection` owned by `account`.
    #[must_use]
    pub fn balance_of(&self, collection: CollectionId, account: AccountId) -> usize {
        self.tokens
            .iter()
            .filter(|((coll, _), record)| *coll == collection && record.owner == account)
            .count()
    }

    /// The asset's token URI.
    pub fn token_uri(&self, collection: CollectionId, token_id: TokenId) -> Result<&str> {
        self.record(collection, token_id)
            .map(|record| record.uri.as_str())
    }

    fn record(&self, collection: CollectionId, token_id: TokenId) -> Result<&TokenRecord> {
        self.tokens
            .get(&(collection, token_id))
            .ok_or(OpenlistError::UnknownToken {
                collection,
                token_id,
            })
    }

    fn record_mut(
        &mut self,
        collection: CollectionId,
        token_id: TokenId,
    ) -> Result<&mut TokenRecord> {
        self.tokens
            .get_mut(&(collection, token_id))
            .ok_or(OpenlistError::UnknownToken {
                collection,
                token_id,
            })
    }
}

impl AssetLedger for InMemoryAssetLedger {
    fn owner_of(&self, collection: CollectionId, token_id: TokenId) -> Result<AccountId> {
        self.record(collection, token_id).map(|record| record.owner)
    }

    fn creator_of(&self, collection: CollectionId, token_id: TokenId) -> Result<AccountId> {
        self.record(collection, token_id)
            .map(|record| record.creator)
    }

    fn royalty_of(&self, collection: CollectionId, token_id: TokenId) -> Result<u16> {
        self.record(collection, token_id)
            .map(|record| record.royalty_bps)
    }

    fn transfer(
        &mut self,
        collection: CollectionId,
        token_id: TokenId,
        from: AccountId,
        to: AccountId,
    ) -> Result<()> {
        let record = self.record_mut(collection, token_id)?;
        if record.owner != from {
            return Err(OpenlistError::TransferFailed {
                reason: format!("{from} is not the owner of {token_id} in {collection}"),
            });
        }
        record.owner = to;
        Ok(())
    }

    fn set_royalty(
        &mut self,
        collection: CollectionId,
        token_id: TokenId,
        caller: AccountId,
        bps: u16,
    ) -> Result<()> {
        // Royalty must be between 0 and 10%.
        if bps > MAX_ROYALTY_BPS {
            return Err(OpenlistError::InvalidFee {
                bps,
                max: MAX_ROYALTY_BPS,
            });
        }
        let record = self.record_mut(collection, token_id)?;
        if record.creator != caller {
            return Err(OpenlistError::NotCreator);
        }
        record.royalty_bps = bps;
        Ok(())
    }
}
