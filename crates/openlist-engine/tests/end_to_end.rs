//! End-to-end tests across the full settlement flow.
//!
//! These exercise the engine the way the system is used in production:
//! admin configures fees and the allow-list, a creator mints and prices a
//! royalty, a seller signs an order off-channel, and a buyer executes it.
//! They verify exact share accounting, replay prevention, the rejection
//! precedence ladder, and the direct-transfer bypass.

use chrono::Utc;
use ed25519_dalek::SigningKey;
use openlist_engine::SettlementEngine;
use openlist_ledger::{AssetLedger, InMemoryAssetLedger};
use openlist_types::{
    AccountId, CollectionId, OpenlistError, Order, OrderState, TokenId,
};

const PLATFORM_FEE_BPS: u16 = 275;
const ROYALTY_BPS: u16 = 300;
const PRICE: u128 = 100;

/// Helper: a configured marketplace with one registered collection and one
/// minted, royalty-priced token owned by the seller.
struct Marketplace {
    engine: SettlementEngine<InMemoryAssetLedger>,
    admin: AccountId,
    fee_recipient: AccountId,
    collection: CollectionId,
    token: TokenId,
    seller_key: SigningKey,
    seller: AccountId,
    buyer: AccountId,
    creator: AccountId,
}

impl Marketplace {
    fn new() -> Self {
        let seller_key = SigningKey::generate(&mut rand::rngs::OsRng);
        let seller = AccountId::from(&seller_key.verifying_key());
        let buyer_key = SigningKey::generate(&mut rand::rngs::OsRng);
        let buyer = AccountId::from(&buyer_key.verifying_key());

        let admin = AccountId([0xad; 32]);
        let engine_account = AccountId([0xee; 32]);
        let fee_recipient = AccountId([0xfe; 32]);
        let royalty_fallback = AccountId([0xfa; 32]);
        let creator = AccountId([0xcc; 32]);

        let mut ledger = InMemoryAssetLedger::new();
        let collection = CollectionId::new();
        let token = ledger.mint(collection, creator, "http://example.com/ip_records/42");
        ledger
            .set_royalty(collection, token, creator, ROYALTY_BPS)
            .expect("royalty within bound");
        ledger
            .transfer(collection, token, creator, seller)
            .expect("hand the token to the seller");

        let mut engine =
            SettlementEngine::new(ledger, admin, engine_account, fee_recipient, royalty_fallback);
        engine
            .register_collection(admin, collection)
            .expect("admin registers the collection");
        engine
            .set_platform_fee(admin, PLATFORM_FEE_BPS)
            .expect("fee within cap");

        Self {
            engine,
            admin,
            fee_recipient,
            collection,
            token,
            seller_key,
            seller,
            buyer,
            creator,
        }
    }

    /// An open order from seller to buyer at [`PRICE`], signed by the seller.
    fn signed_order(&self) -> (Order, Vec<u8>) {
        let order = Order::dummy(
            self.seller,
            self.buyer,
            self.seller,
            self.collection,
            self.token,
        );
        let signature = order.sign(&self.seller_key);
        (order, signature)
    }

    fn assert_untouched(&self) {
        assert_eq!(
            self.engine
                .ledger()
                .owner_of(self.collection, self.token)
                .unwrap(),
            self.seller,
            "asset must stay with the seller"
        );
        assert_eq!(self.engine.funds().total(), 0, "no funds may move");
        assert!(
            self.engine.consumed().is_empty(),
            "no nonce may be consumed"
        );
    }
}

#[test]
fn successful_sale_distributes_exactly() {
    let mut market = Marketplace::new();
    let (order, signature) = market.signed_order();

    let receipt = market
        .engine
        .settle(&order, &signature, market.buyer, PRICE)
        .expect("settlement succeeds");

    // 100 * 300 / 10_000 = 3, 100 * 275 / 10_000 = 2, seller gets the rest.
    assert_eq!(receipt.royalty_share, 3);
    assert_eq!(receipt.platform_share, 2);
    assert_eq!(receipt.seller_share, 95);
    assert_eq!(receipt.total(), PRICE);
    assert_eq!(receipt.buyer, market.buyer);
    assert_eq!(receipt.royalty_recipient, market.creator);

    let engine = &market.engine;
    assert_eq!(
        engine.ledger().owner_of(market.collection, market.token).unwrap(),
        market.buyer
    );
    assert_eq!(engine.funds().balance(market.seller), 95);
    assert_eq!(engine.funds().balance(market.creator), 3);
    assert_eq!(engine.funds().balance(market.fee_recipient), 2);
    assert_eq!(engine.funds().total(), PRICE);
    assert!(engine.consumed().is_consumed(order.maker, order.nonce));
}

#[test]
fn replay_rejected_and_nothing_moves_twice() {
    let mut market = Marketplace::new();
    let (order, signature) = market.signed_order();

    market
        .engine
        .settle(&order, &signature, market.buyer, PRICE)
        .unwrap();
    let owner_after_first = market
        .engine
        .ledger()
        .owner_of(market.collection, market.token)
        .unwrap();
    let total_after_first = market.engine.funds().total();

    // Same order, same signature, same payment.
    let err = market
        .engine
        .settle(&order, &signature, market.buyer, PRICE)
        .unwrap_err();
    assert!(
        matches!(err, OpenlistError::ReplayedOrder { .. }),
        "Expected ReplayedOrder, got: {err:?}"
    );

    assert_eq!(
        market
            .engine
            .ledger()
            .owner_of(market.collection, market.token)
            .unwrap(),
        owner_after_first
    );
    assert_eq!(market.engine.funds().total(), total_after_first);
}

#[test]
fn non_open_state_rejected_regardless_of_signature() {
    let mut market = Marketplace::new();
    let (mut order, _) = market.signed_order();
    order.state = OrderState::Cancelled;
    let signature = order.sign(&market.seller_key);

    let err = market
        .engine
        .settle(&order, &signature, market.buyer, PRICE)
        .unwrap_err();
    assert!(matches!(err, OpenlistError::UnfillableState { .. }));
    market.assert_untouched();
}

#[test]
fn seller_cannot_buy_own_listing() {
    let mut market = Marketplace::new();
    let (mut order, _) = market.signed_order();
    order.buyer = market.seller;
    let signature = order.sign(&market.seller_key);

    let err = market
        .engine
        .settle(&order, &signature, market.seller, PRICE)
        .unwrap_err();
    assert!(matches!(err, OpenlistError::SellerCannotBuy));
    market.assert_untouched();
}

#[test]
fn only_named_buyer_may_execute() {
    let mut market = Marketplace::new();
    let (order, signature) = market.signed_order();
    let stranger = AccountId([0x99; 32]);

    let err = market
        .engine
        .settle(&order, &signature, stranger, PRICE)
        .unwrap_err();
    assert!(matches!(err, OpenlistError::WrongBuyer));
    market.assert_untouched();
}

#[test]
fn foreign_signature_rejected_before_payment_checks() {
    let mut market = Marketplace::new();
    let (order, _) = market.signed_order();
    let other_key = SigningKey::generate(&mut rand::rngs::OsRng);
    let signature = order.sign(&other_key);

    for payment in [0, 10, PRICE] {
        let err = market
            .engine
            .settle(&order, &signature, market.buyer, payment)
            .unwrap_err();
        assert!(
            matches!(err, OpenlistError::WrongMaker),
            "payment {payment}: expected WrongMaker, got {err:?}"
        );
    }
    market.assert_untouched();
}

#[test]
fn expired_order_rejected() {
    let mut market = Marketplace::new();
    let (mut order, _) = market.signed_order();
    order.expiry = Utc::now() - chrono::Duration::minutes(1);
    let signature = order.sign(&market.seller_key);

    let err = market
        .engine
        .settle(&order, &signature, market.buyer, PRICE)
        .unwrap_err();
    assert!(matches!(err, OpenlistError::Expired));
    market.assert_untouched();
}

#[test]
fn unregistered_collection_rejected() {
    let mut market = Marketplace::new();
    market
        .engine
        .unregister_collection(market.admin, market.collection)
        .unwrap();
    let (order, signature) = market.signed_order();

    let err = market
        .engine
        .settle(&order, &signature, market.buyer, PRICE)
        .unwrap_err();
    assert!(matches!(err, OpenlistError::UnknownCollection(_)));
    market.assert_untouched();
}

#[test]
fn inexact_payment_rejected_both_ways() {
    let mut market = Marketplace::new();
    let (order, signature) = market.signed_order();

    for payment in [0, PRICE - 1, PRICE + 1] {
        let err = market
            .engine
            .settle(&order, &signature, market.buyer, payment)
            .unwrap_err();
        assert!(
            matches!(err, OpenlistError::WrongPayment { .. }),
            "payment {payment}: expected WrongPayment, got {err:?}"
        );
    }
    market.assert_untouched();
}

#[test]
fn stale_order_fails_without_burning_the_nonce() {
    let mut market = Marketplace::new();
    let (order, signature) = market.signed_order();

    // The seller moved the asset away after signing the order.
    let elsewhere = AccountId([0x77; 32]);
    market
        .engine
        .ledger_mut()
        .transfer(market.collection, market.token, market.seller, elsewhere)
        .unwrap();

    let err = market
        .engine
        .settle(&order, &signature, market.buyer, PRICE)
        .unwrap_err();
    assert!(matches!(err, OpenlistError::TransferFailed { .. }));
    assert_eq!(market.engine.funds().total(), 0);
    assert!(
        !market.engine.consumed().is_consumed(order.maker, order.nonce),
        "a failed transfer must not burn a usable order"
    );
}

#[test]
fn royalty_falls_back_when_creator_is_null() {
    let mut market = Marketplace::new();

    // A token whose creator is the null identity.
    let token = market
        .engine
        .ledger_mut()
        .mint(market.collection, AccountId::ZERO, "uri");
    market
        .engine
        .ledger_mut()
        .transfer(market.collection, token, AccountId::ZERO, market.seller)
        .unwrap();

    let mut order = Order::dummy(
        market.seller,
        market.buyer,
        market.seller,
        market.collection,
        token,
    );
    order.nonce = 2;
    let signature = order.sign(&market.seller_key);

    let receipt = market
        .engine
        .settle(&order, &signature, market.buyer, PRICE)
        .unwrap();
    // Royalty rate is 0 for the fresh token; the interesting part is the
    // recipient resolution.
    assert_eq!(
        receipt.royalty_recipient,
        market.engine.fees().royalty_recipient()
    );
}

#[test]
fn admin_surface_rejects_non_admin() {
    let mut market = Marketplace::new();
    let stranger = AccountId([0x55; 32]);

    assert!(matches!(
        market.engine.register_collection(stranger, CollectionId::new()),
        Err(OpenlistError::NotAdmin)
    ));
    assert!(matches!(
        market.engine.set_platform_fee(stranger, 100),
        Err(OpenlistError::NotAdmin)
    ));
    assert!(matches!(
        market.engine.set_fee_recipient(stranger, stranger),
        Err(OpenlistError::NotAdmin)
    ));
    assert!(matches!(
        market.engine.set_royalty_recipient(stranger, stranger),
        Err(OpenlistError::NotAdmin)
    ));
    assert!(matches!(
        market.engine.transfer_admin(stranger, stranger),
        Err(OpenlistError::NotAdmin)
    ));
}

#[test]
fn admin_capability_is_transferable() {
    let mut market = Marketplace::new();
    let new_admin = AccountId([0x44; 32]);

    market.engine.transfer_admin(market.admin, new_admin).unwrap();
    assert!(matches!(
        market.engine.set_platform_fee(market.admin, 100),
        Err(OpenlistError::NotAdmin)
    ));
    market.engine.set_platform_fee(new_admin, 100).unwrap();
}

#[test]
fn direct_transfer_rules() {
    let mut market = Marketplace::new();
    let receiver = AccountId([0x33; 32]);

    // Null identity and the engine's own account are not valid receivers.
    let err = market
        .engine
        .direct_transfer(market.seller, market.collection, AccountId::ZERO, market.token)
        .unwrap_err();
    assert!(matches!(err, OpenlistError::InvalidReceiver));

    let engine_account = market.engine.engine_account();
    let err = market
        .engine
        .direct_transfer(market.seller, market.collection, engine_account, market.token)
        .unwrap_err();
    assert!(matches!(err, OpenlistError::InvalidReceiver));

    // Unregistered collection.
    let err = market
        .engine
        .direct_transfer(market.seller, CollectionId::new(), receiver, market.token)
        .unwrap_err();
    assert!(matches!(err, OpenlistError::CollectionUnknown(_)));

    // Non-owner caller.
    let err = market
        .engine
        .direct_transfer(market.buyer, market.collection, receiver, market.token)
        .unwrap_err();
    assert!(matches!(err, OpenlistError::NotTokenOwner));

    // The true owner to a valid third party succeeds, with no fees.
    market
        .engine
        .direct_transfer(market.seller, market.collection, receiver, market.token)
        .unwrap();
    assert_eq!(
        market
            .engine
            .ledger()
            .owner_of(market.collection, market.token)
            .unwrap(),
        receiver
    );
    assert_eq!(market.engine.funds().total(), 0);
}

#[test]
fn maximal_rates_settle_with_exact_conservation() {
    let seller_key = SigningKey::generate(&mut rand::rngs::OsRng);
    let seller = AccountId::from(&seller_key.verifying_key());
    let buyer = AccountId([0xbb; 32]);
    let admin = AccountId([0xad; 32]);
    let creator = AccountId([0xcc; 32]);

    let mut ledger = InMemoryAssetLedger::new();
    let collection = CollectionId::new();
    let token = ledger.mint(collection, creator, "uri");
    ledger.set_royalty(collection, token, creator, 1_000).unwrap();
    ledger.transfer(collection, token, creator, seller).unwrap();

    // A raised construction-time cap lets the fee go beyond the default
    // ceiling, but never past what a maximal royalty leaves over.
    let mut engine = SettlementEngine::with_fee_cap(
        ledger,
        admin,
        AccountId([0xee; 32]),
        AccountId([0xfe; 32]),
        AccountId([0xfa; 32]),
        9_000,
    );
    engine.register_collection(admin, collection).unwrap();
    engine.set_platform_fee(admin, 9_000).unwrap();

    let order = Order::dummy(seller, buyer, seller, collection, token);
    let signature = order.sign(&seller_key);

    let receipt = engine.settle(&order, &signature, buyer, PRICE).unwrap();
    assert_eq!(receipt.royalty_share, 10);
    assert_eq!(receipt.platform_share, 90);
    assert_eq!(receipt.seller_share, 0);
    assert_eq!(receipt.total(), PRICE);
    assert_eq!(engine.funds().total(), PRICE);
}

#[test]
fn sequential_sales_with_distinct_nonces() {
    let mut market = Marketplace::new();

    // First sale: seller -> buyer.
    let (order, signature) = market.signed_order();
    market
        .engine
        .settle(&order, &signature, market.buyer, PRICE)
        .unwrap();

    // The buyer lists it back to the seller under their own key.
    let buyer_key = SigningKey::generate(&mut rand::rngs::OsRng);
    let relist_seller = AccountId::from(&buyer_key.verifying_key());
    market
        .engine
        .ledger_mut()
        .transfer(market.collection, market.token, market.buyer, relist_seller)
        .unwrap();

    let mut resale = Order::dummy(
        relist_seller,
        market.seller,
        relist_seller,
        market.collection,
        market.token,
    );
    resale.price = 200;
    resale.nonce = 9;
    let resale_sig = resale.sign(&buyer_key);

    let receipt = market
        .engine
        .settle(&resale, &resale_sig, market.seller, 200)
        .unwrap();
    assert_eq!(receipt.total(), 200);
    // Royalty keeps flowing to the original creator on every resale.
    assert_eq!(receipt.royalty_recipient, market.creator);
    assert_eq!(receipt.royalty_share, 6);
    assert_eq!(
        market
            .engine
            .ledger()
            .owner_of(market.collection, market.token)
            .unwrap(),
        market.seller
    );
}
