//! Pure order validation.
//!
//! Decides fillable / not-fillable without touching any state. The check
//! sequence is a contract: each check short-circuits, so callers always
//! observe the *first* applicable rejection.
//!
//! 1. state is not `Open`          → `UnfillableState`
//! 2. seller == buyer              → `SellerCannotBuy`
//! 3. caller != buyer              → `WrongBuyer`
//! 4. signature not by maker       → `WrongMaker`
//! 5. expiry passed                → `Expired`
//! 6. collection not tradeable     → `UnknownCollection`
//! 7. payment != price             → `WrongPayment`
//! 8. nonce already consumed       → `ReplayedOrder`

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use openlist_types::{AccountId, OpenlistError, Order, OrderHash, OrderState, Result};

use crate::registry::CollectionRegistry;
use crate::replay::ConsumedOrders;

/// Proof that an order passed the full validation sequence. Constructed
/// only by [`OrderValidator::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedOrder {
    /// Digest of the validated order's canonical encoding.
    pub order_hash: OrderHash,
}

/// Validation kernel. Borrows the registry and the consumed-order set;
/// never mutates either.
pub struct OrderValidator<'a> {
    registry: &'a CollectionRegistry,
    consumed: &'a ConsumedOrders,
}

impl<'a> OrderValidator<'a> {
    #[must_use]
    pub fn new(registry: &'a CollectionRegistry, consumed: &'a ConsumedOrders) -> Self {
        Self { registry, consumed }
    }

    /// Run the full check sequence against the current logical clock.
    ///
    /// # Errors
    /// The first applicable rejection, per the ordering above.
    pub fn validate(
        &self,
        order: &Order,
        signature: &[u8],
        caller: AccountId,
        payment: u128,
    ) -> Result<ValidatedOrder> {
        if order.state != OrderState::Open {
            return Err(OpenlistError::UnfillableState { state: order.state });
        }
        if order.seller == order.buyer {
            return Err(OpenlistError::SellerCannotBuy);
        }
        if caller != order.buyer {
            return Err(OpenlistError::WrongBuyer);
        }
        if !signed_by_maker(order, signature) {
            return Err(OpenlistError::WrongMaker);
        }
        if order.is_expired() {
            return Err(OpenlistError::Expired);
        }
        if !self.registry.is_tradeable(order.collection) {
            return Err(OpenlistError::UnknownCollection(order.collection));
        }
        if payment != order.price {
            return Err(OpenlistError::WrongPayment {
                expected: order.price,
                got: payment,
            });
        }
        if self.consumed.is_consumed(order.maker, order.nonce) {
            return Err(OpenlistError::ReplayedOrder {
                maker: order.maker,
                nonce: order.nonce,
            });
        }

        Ok(ValidatedOrder {
            order_hash: order.signing_digest(),
        })
    }
}

/// Does the signature verify under the maker's key?
///
/// The maker's `AccountId` is their ed25519 verifying key, so signer
/// recovery reduces to verification: a signature by any other key, a
/// malformed signature, or a maker identity that is not a valid curve
/// point all mean "not authorized by the maker".
fn signed_by_maker(order: &Order, signature: &[u8]) -> bool {
    let Ok(sig) = Signature::from_slice(signature) else {
        return false;
    };
    let Ok(key) = VerifyingKey::from_bytes(&order.maker.0) else {
        return false;
    };
    key.verify(order.signing_digest().as_bytes(), &sig).is_ok()
}
