//! Settlement orchestration: validate, split, transfer, consume, credit.
//!
//! The engine is one serialized state machine. `settle` runs as a single
//! indivisible step:
//!
//! 1. Validate (pure — no side effects on rejection)
//! 2. Read the asset's royalty rate and creator from the ledger
//! 3. Compute the three-way split of the payment
//! 4. Re-check ownership and transfer the asset (off-channel orders go
//!    stale; `order.seller` is not trusted to still own the asset)
//! 5. Consume the maker's nonce — only after the transfer, so a failed
//!    transfer never burns a usable order
//! 6. Credit the three shares and emit the receipt
//!
//! Fallible steps all precede the first fund movement, so no failure path
//! needs a rollback: rejection leaves balances, ownership, and the
//! consumed-order set untouched.

use chrono::Utc;
use openlist_types::constants::{BPS_DENOMINATOR, DEFAULT_MAX_PLATFORM_FEE_BPS, MAX_BPS};
use openlist_types::{
    AccountId, CollectionId, OpenlistError, Order, Result, SettlementReceipt,
};
use openlist_ledger::{AssetLedger, FundLedger};

use crate::fee_model::FeeModel;
use crate::registry::CollectionRegistry;
use crate::replay::ConsumedOrders;
use crate::validator::OrderValidator;

/// The three disjoint shares of one payment. Always sums to the payment
/// exactly: the seller share is computed by subtraction last, so integer
/// rounding shortfall lands on no one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentSplit {
    pub seller_share: u128,
    pub royalty_share: u128,
    pub platform_share: u128,
}

impl PaymentSplit {
    /// Split `payment` between seller, creator, and platform.
    ///
    /// Total for every input: rates are clamped to 100%, the platform
    /// share is bounded by what the royalty left over, and the seller
    /// share is the remainder — so the three shares sum to `payment`
    /// exactly, with no overflow at any price.
    #[must_use]
    pub fn compute(payment: u128, royalty_bps: u16, platform_fee_bps: u16) -> Self {
        let royalty_share = bps_share(payment, royalty_bps);
        let platform_share = bps_share(payment, platform_fee_bps).min(payment - royalty_share);
        let seller_share = payment - royalty_share - platform_share;
        Self {
            seller_share,
            royalty_share,
            platform_share,
        }
    }

    #[must_use]
    pub fn total(&self) -> u128 {
        self.seller_share + self.royalty_share + self.platform_share
    }
}

/// `amount * bps / 10_000` without intermediate overflow. Rates above
/// 100% are treated as 100%, so the share never exceeds `amount`.
fn bps_share(amount: u128, bps: u16) -> u128 {
    let bps = u128::from(bps.min(MAX_BPS));
    amount / BPS_DENOMINATOR * bps + amount % BPS_DENOMINATOR * bps / BPS_DENOMINATOR
}

/// The settlement engine: order execution, the admin surface, and the
/// direct-transfer bypass, over an [`AssetLedger`] collaborator.
pub struct SettlementEngine<L: AssetLedger> {
    ledger: L,
    funds: FundLedger,
    registry: CollectionRegistry,
    fees: FeeModel,
    consumed: ConsumedOrders,
    admin: AccountId,
    /// The engine's own identity; never a valid transfer receiver.
    engine_account: AccountId,
}

impl<L: AssetLedger> SettlementEngine<L> {
    /// Construct the engine. `admin` holds the mutation authority for the
    /// registry and fee state; `engine_account` is the engine's own
    /// identity (self-custody of assets is disallowed).
    pub fn new(
        ledger: L,
        admin: AccountId,
        engine_account: AccountId,
        fee_recipient: AccountId,
        royalty_recipient: AccountId,
    ) -> Self {
        Self::with_fee_cap(
            ledger,
            admin,
            engine_account,
            fee_recipient,
            royalty_recipient,
            DEFAULT_MAX_PLATFORM_FEE_BPS,
        )
    }

    /// Same as [`Self::new`] with an explicit platform-fee ceiling; see
    /// [`FeeModel::with_cap`] for how the ceiling is bounded.
    pub fn with_fee_cap(
        ledger: L,
        admin: AccountId,
        engine_account: AccountId,
        fee_recipient: AccountId,
        royalty_recipient: AccountId,
        max_fee_bps: u16,
    ) -> Self {
        Self {
            ledger,
            funds: FundLedger::new(),
            registry: CollectionRegistry::new(),
            fees: FeeModel::with_cap(fee_recipient, royalty_recipient, max_fee_bps),
            consumed: ConsumedOrders::new(),
            admin,
            engine_account,
        }
    }

    /// Execute a signed order: transfer the asset, distribute the payment,
    /// and permanently consume the order. `payment` is the value attached
    /// to the call and must equal the order price exactly.
    ///
    /// All-or-nothing: on any rejection the asset, all balances, and the
    /// order's fillability are exactly as before the call.
    ///
    /// # Errors
    /// A validation rejection (propagated verbatim), a ledger lookup
    /// failure, or `TransferFailed` if the seller no longer owns the asset.
    pub fn settle(
        &mut self,
        order: &Order,
        signature: &[u8],
        caller: AccountId,
        payment: u128,
    ) -> Result<SettlementReceipt> {
        // 1. Validation: pure, rejection has no side effects.
        let validated = OrderValidator::new(&self.registry, &self.consumed).validate(
            order, signature, caller, payment,
        )?;

        // 2. Royalty terms come from the ledger, not the order.
        let royalty_bps = self.ledger.royalty_of(order.collection, order.token_id)?;
        let creator = self.ledger.creator_of(order.collection, order.token_id)?;
        let royalty_recipient = if creator.is_zero() {
            self.fees.royalty_recipient()
        } else {
            creator
        };

        // 3. Three-way split, exact by construction.
        let split = PaymentSplit::compute(payment, royalty_bps, self.fees.platform_fee_bps());

        // 4. Ownership re-check + asset transfer. The ledger enforces that
        //    `order.seller` still owns the asset.
        let owner = self.ledger.owner_of(order.collection, order.token_id)?;
        if owner != order.seller {
            return Err(OpenlistError::TransferFailed {
                reason: format!("seller {} no longer owns {}", order.seller, order.token_id),
            });
        }
        self.ledger
            .transfer(order.collection, order.token_id, order.seller, order.buyer)?;

        // 5. Consume the nonce. Validation already screened it; inside one
        //    serialized step this cannot race, and the insert is the
        //    authoritative replay barrier.
        self.consumed.consume(order.maker, order.nonce)?;

        // 6. Fund distribution. Nothing below can fail.
        self.funds.credit(order.seller, split.seller_share);
        self.funds.credit(royalty_recipient, split.royalty_share);
        self.funds
            .credit(self.fees.fee_recipient(), split.platform_share);

        let receipt = SettlementReceipt {
            order_hash: validated.order_hash,
            collection: order.collection,
            token_id: order.token_id,
            seller: order.seller,
            buyer: order.buyer,
            seller_share: split.seller_share,
            royalty_share: split.royalty_share,
            platform_share: split.platform_share,
            royalty_recipient,
            fee_recipient: self.fees.fee_recipient(),
            settled_at: Utc::now(),
        };

        tracing::info!(
            order = %receipt.order_hash,
            buyer = %receipt.buyer,
            seller_share = receipt.seller_share,
            royalty_share = receipt.royalty_share,
            platform_share = receipt.platform_share,
            "settled order"
        );

        Ok(receipt)
    }

    // -----------------------------------------------------------------
    // Admin surface
    // -----------------------------------------------------------------

    fn require_admin(&self, caller: AccountId) -> Result<()> {
        if caller != self.admin {
            return Err(OpenlistError::NotAdmin);
        }
        Ok(())
    }

    /// Allow-list a collection for trading. Idempotent.
    pub fn register_collection(&mut self, caller: AccountId, collection: CollectionId) -> Result<()> {
        self.require_admin(caller)?;
        self.registry.register(collection);
        tracing::info!(%collection, "registered collection");
        Ok(())
    }

    /// Remove a collection from the allow-list.
    pub fn unregister_collection(
        &mut self,
        caller: AccountId,
        collection: CollectionId,
    ) -> Result<()> {
        self.require_admin(caller)?;
        self.registry.unregister(collection);
        tracing::info!(%collection, "unregistered collection");
        Ok(())
    }

    /// Set the platform fee rate, bounded by the fee model's cap.
    pub fn set_platform_fee(&mut self, caller: AccountId, bps: u16) -> Result<()> {
        self.require_admin(caller)?;
        self.fees.set_platform_fee(bps)?;
        tracing::info!(bps, "platform fee updated");
        Ok(())
    }

    pub fn set_fee_recipient(&mut self, caller: AccountId, recipient: AccountId) -> Result<()> {
        self.require_admin(caller)?;
        self.fees.set_fee_recipient(recipient);
        Ok(())
    }

    pub fn set_royalty_recipient(&mut self, caller: AccountId, recipient: AccountId) -> Result<()> {
        self.require_admin(caller)?;
        self.fees.set_royalty_recipient(recipient);
        Ok(())
    }

    /// Hand the admin capability to a new identity.
    pub fn transfer_admin(&mut self, caller: AccountId, new_admin: AccountId) -> Result<()> {
        self.require_admin(caller)?;
        self.admin = new_admin;
        tracing::warn!(new_admin = %new_admin, "admin capability transferred");
        Ok(())
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    #[must_use]
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    #[must_use]
    pub fn funds(&self) -> &FundLedger {
        &self.funds
    }

    #[must_use]
    pub fn registry(&self) -> &CollectionRegistry {
        &self.registry
    }

    #[must_use]
    pub fn fees(&self) -> &FeeModel {
        &self.fees
    }

    #[must_use]
    pub fn consumed(&self) -> &ConsumedOrders {
        &self.consumed
    }

    #[must_use]
    pub fn admin(&self) -> AccountId {
        self.admin
    }

    #[must_use]
    pub fn engine_account(&self) -> AccountId {
        self.engine_account
    }
}
