//! Error types for the OpenList settlement engine.
//!
//! All errors use the `OL_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Order validation rejections (in precedence order)
//! - 2xx: Direct transfer rejections
//! - 3xx: Admin / fee configuration errors
//! - 4xx: Asset ledger errors
//!
//! The taxonomy is closed: every rejection is terminal to the call, carries
//! no recoverable internal state, and is surfaced to the caller unchanged.

use thiserror::Error;

use crate::{AccountId, CollectionId, OrderState, TokenId};

/// Central error enum for all OpenList operations.
#[derive(Debug, Error)]
pub enum OpenlistError {
    // =================================================================
    // Order Validation Rejections (1xx)
    // =================================================================
    /// The order's lifecycle state is not `Open`.
    #[error("OL_ERR_100: unfillable state: order is {state}, not OPEN")]
    UnfillableState { state: OrderState },

    /// The seller is listed as the counterparty buyer on their own listing.
    #[error("OL_ERR_101: seller cannot buy their own listing")]
    SellerCannotBuy,

    /// The caller is not the buyer named in the order.
    #[error("OL_ERR_102: wrong buyer: caller is not the order's buyer")]
    WrongBuyer,

    /// The signature does not verify under the maker's key.
    #[error("OL_ERR_103: wrong maker: signature was not produced by the order's maker")]
    WrongMaker,

    /// The order's expiry has passed.
    #[error("OL_ERR_104: order expired")]
    Expired,

    /// The order's collection is not registered as tradeable.
    #[error("OL_ERR_105: unknown collection: {0} is not tradeable")]
    UnknownCollection(CollectionId),

    /// The attached payment does not equal the order price exactly.
    /// Both under- and over-payment are rejected; there is no refund path.
    #[error("OL_ERR_106: wrong payment: expected {expected}, got {got}")]
    WrongPayment { expected: u128, got: u128 },

    /// The maker's nonce was already consumed (replay prevention).
    #[error("OL_ERR_107: replayed order: nonce {nonce} already consumed for {maker}")]
    ReplayedOrder { maker: AccountId, nonce: u64 },

    // =================================================================
    // Direct Transfer Rejections (2xx)
    // =================================================================
    /// The receiver is the null identity or the engine's own account.
    #[error("OL_ERR_200: wrong receiver: null identity or engine account")]
    InvalidReceiver,

    /// The collection is not registered with the engine.
    #[error("OL_ERR_201: collection unknown: {0} is not registered")]
    CollectionUnknown(CollectionId),

    /// Only the token owner can transfer the token.
    #[error("OL_ERR_202: only the token owner can transfer the token")]
    NotTokenOwner,

    // =================================================================
    // Admin / Fee Errors (3xx)
    // =================================================================
    /// A fee or royalty rate exceeds its configured bound.
    #[error("OL_ERR_300: invalid fee: {bps} bps exceeds the maximum of {max} bps")]
    InvalidFee { bps: u16, max: u16 },

    /// The caller does not hold the administrative capability.
    #[error("OL_ERR_301: caller is not the admin")]
    NotAdmin,

    // =================================================================
    // Asset Ledger Errors (4xx)
    // =================================================================
    /// The asset was never minted.
    #[error("OL_ERR_400: unknown token: {token_id} in {collection}")]
    UnknownToken {
        collection: CollectionId,
        token_id: TokenId,
    },

    /// The ledger refused the transfer (stale owner, receiver rules, etc.).
    #[error("OL_ERR_401: transfer failed: {reason}")]
    TransferFailed { reason: String },

    /// Only the asset's creator may change its royalty.
    #[error("OL_ERR_402: only the creator can set the royalty")]
    NotCreator,
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, OpenlistError>;
