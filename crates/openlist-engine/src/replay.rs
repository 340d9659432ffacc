//! Replay-prevention ledger — the consumed-order set.
//!
//! Each `(maker, nonce)` pair can fund exactly one settlement. The set is
//! checked during validation and inserted only after the asset transfer
//! commits, all within one serialized engine step, so concurrent attempts
//! to settle the same order resolve to exactly one winner; every loser
//! observes `ReplayedOrder`.
//!
//! Unlike an LRU-bounded idempotency cache, this set never evicts: a
//! consumed order must stay consumed for the lifetime of the engine.

use std::collections::HashSet;

use openlist_types::{AccountId, OpenlistError, Result};

/// The set of consumed `(maker, nonce)` pairs.
#[derive(Debug, Default)]
pub struct ConsumedOrders {
    consumed: HashSet<(AccountId, u64)>,
}

impl ConsumedOrders {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the maker's nonce has been consumed (without consuming).
    #[must_use]
    pub fn is_consumed(&self, maker: AccountId, nonce: u64) -> bool {
        self.consumed.contains(&(maker, nonce))
    }

    /// Irrevocably consume the maker's nonce.
    ///
    /// # Errors
    /// Returns [`OpenlistError::ReplayedOrder`] if the pair was already
    /// consumed — blocking the replay.
    pub fn consume(&mut self, maker: AccountId, nonce: u64) -> Result<()> {
        if !self.consumed.insert((maker, nonce)) {
            return Err(OpenlistError::ReplayedOrder { maker, nonce });
        }
        Ok(())
    }

    /// Number of consumed pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.consumed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.consumed.is_empty()
    }
}
