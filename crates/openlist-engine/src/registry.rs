//! Collection allow-list.
//!
//! Only assets from registered collections are eligible for settlement.
//! Entries never auto-expire; registration is idempotent.

use std::collections::HashSet;

use openlist_types::CollectionId;

/// Admin-managed mapping from collection to its tradeable flag.
#[derive(Debug, Default)]
pub struct CollectionRegistry {
    tradeable: HashSet<CollectionId>,
}

impl CollectionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the collection tradeable. Idempotent.
    pub fn register(&mut self, collection: CollectionId) {
        self.tradeable.insert(collection);
    }

    /// Remove the collection from the allow-list. Open orders against it
    /// start rejecting with `UnknownCollection` at validation time.
    pub fn unregister(&mut self, collection: CollectionId) {
        self.tradeable.remove(&collection);
    }

    #[must_use]
    pub fn is_tradeable(&self, collection: CollectionId) -> bool {
        self.tradeable.contains(&collection)
    }

    /// Number of registered collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tradeable.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tradeable.is_empty()
    }
}
