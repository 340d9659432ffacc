//! The order model: a seller's off-channel-signed proposal to sell one
//! asset at a fixed price to a specific buyer.
//!
//! ## Lifecycle
//!
//! ```text
//!   ┌──────┐  settlement   ┌────────┐
//!   │ OPEN ├──────────────▶│ FILLED │
//!   └──┬───┘               └────────┘
//!      │ cancel
//!      ▼
//!   ┌───────────┐
//!   │ CANCELLED │
//!   └───────────┘
//! ```
//!
//! The `state` field travels with the order and is bound into the signed
//! payload, but it is caller-supplied data: double-fill prevention rests on
//! the engine's consumed-nonce set, never on this field.
//!
//! ## Authorization
//!
//! An order is authorized by an ed25519 signature from its `maker` over
//! [`Order::signing_digest`]. Because an [`AccountId`] *is* a verifying
//! key, "the recovered signer equals the maker" reduces to "the signature
//! verifies under the maker's key".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{AccountId, CollectionId, OrderHash, TokenId};

/// Domain-separation prefix for the canonical order encoding. Versioned:
/// changing the payload layout requires bumping this.
pub const ORDER_SIGNING_DOMAIN: &[u8] = b"openlist:order:v1:";

/// Lifecycle state of an order. Anything other than `Open` is unfillable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum OrderState {
    /// The order may be filled.
    Open,
    /// The order was settled.
    Filled,
    /// The maker or an admin voided the order.
    Cancelled,
}

impl OrderState {
    /// One-byte encoding used in the canonical signing payload.
    #[must_use]
    pub fn as_byte(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Filled => 1,
            Self::Cancelled => 2,
        }
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Filled => write!(f, "FILLED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// A proposed sale, immutable once signed by the maker.
///
/// The engine never mutates an order; it only records consumption of the
/// `(maker, nonce)` pair after a successful settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Identity expected to currently own the asset.
    pub seller: AccountId,
    /// The only identity permitted to execute the order.
    pub buyer: AccountId,
    /// Identity whose signature authorizes the order. May be a signer
    /// delegated by the seller.
    pub maker: AccountId,
    /// The asset's collection; must be registered tradeable.
    pub collection: CollectionId,
    /// Asset identifier within the collection.
    pub token_id: TokenId,
    /// Required payment, in the smallest native unit. Exact match only.
    pub price: u128,
    /// The order is void once this instant has passed.
    pub expiry: DateTime<Utc>,
    /// Uniqueness value; single-use per maker.
    pub nonce: u64,
    /// Caller-supplied lifecycle tag. Advisory: see module docs.
    pub state: OrderState,
}

impl Order {
    /// Canonical signing payload: a fixed-width, injective serialization of
    /// all nine order fields.
    ///
    /// Layout: `domain || seller(32) || buyer(32) || maker(32) ||
    /// collection(16) || token_id(8 LE) || price(16 LE) ||
    /// expiry_millis(8 LE) || nonce(8 LE) || state(1)`.
    #[must_use]
    pub fn signing_payload(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(ORDER_SIGNING_DOMAIN.len() + 153);
        payload.extend_from_slice(ORDER_SIGNING_DOMAIN);
        payload.extend_from_slice(&self.seller.0);
        payload.extend_from_slice(&self.buyer.0);
        payload.extend_from_slice(&self.maker.0);
        payload.extend_from_slice(self.collection.0.as_bytes());
        payload.extend_from_slice(&self.token_id.0.to_le_bytes());
        payload.extend_from_slice(&self.price.to_le_bytes());
        payload.extend_from_slice(&self.expiry.timestamp_millis().to_le_bytes());
        payload.extend_from_slice(&self.nonce.to_le_bytes());
        payload.push(self.state.as_byte());
        payload
    }

    /// SHA-256 digest of the signing payload. The maker signs these bytes;
    /// receipts and logs use them as the order's identity.
    #[must_use]
    pub fn signing_digest(&self) -> OrderHash {
        let mut hasher = Sha256::new();
        hasher.update(self.signing_payload());
        let digest: [u8; 32] = hasher.finalize().into();
        OrderHash(digest)
    }

    /// Returns `true` once the expiry has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expiry
    }
}

/// Test helpers. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl Order {
    /// An open order priced at 100 units, expiring in one hour, nonce 1.
    pub fn dummy(
        seller: AccountId,
        buyer: AccountId,
        maker: AccountId,
        collection: CollectionId,
        token_id: TokenId,
    ) -> Self {
        Self {
            seller,
            buyer,
            maker,
            collection,
            token_id,
            price: 100,
            expiry: Utc::now() + chrono::Duration::hours(1),
            nonce: 1,
            state: OrderState::Open,
        }
    }

    /// Sign the order's digest with the given key, producing the flat
    /// 64-byte signature the engine expects.
    pub fn sign(&self, key: &ed25519_dalek::SigningKey) -> Vec<u8> {
        use ed25519_dalek::Signer;
        key.sign(self.signing_digest().as_bytes()).to_vec()
    }
}
