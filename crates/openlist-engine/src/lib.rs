//! # openlist-engine
//!
//! The OpenList settlement core: order validation, signature
//! authorization, fund distribution, and the admin surface.
//!
//! ## Architecture
//!
//! A settlement runs as one serialized step:
//! 1. [`OrderValidator`] decides fillable / not-fillable (pure)
//! 2. [`PaymentSplit`] carves the payment into seller / royalty / platform
//!    shares that sum exactly
//! 3. The [`AssetLedger`](openlist_ledger::AssetLedger) collaborator
//!    re-checks ownership and moves the asset
//! 4. [`ConsumedOrders`] irrevocably consumes the maker's nonce
//! 5. Proceeds are credited and a
//!    [`SettlementReceipt`](openlist_types::SettlementReceipt) is emitted
//!
//! Rejections are terminal and side-effect free: no partial payment, no
//! partial transfer, and the order stays fillable unless step 4 committed.

pub mod direct;
pub mod fee_model;
pub mod registry;
pub mod replay;
pub mod settlement;
pub mod validator;

pub use fee_model::FeeModel;
pub use registry::CollectionRegistry;
pub use replay::ConsumedOrders;
pub use settlement::{PaymentSplit, SettlementEngine};
pub use validator::{OrderValidator, ValidatedOrder};
