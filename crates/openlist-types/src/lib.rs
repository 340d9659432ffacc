//! # openlist-types
//!
//! Shared types, errors, and configuration for the **OpenList** settlement
//! engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`CollectionId`], [`TokenId`], [`OrderHash`]
//! - **Order model**: [`Order`], [`OrderState`], the canonical signing encoding
//! - **Fee model**: [`FeeConfig`]
//! - **Receipt model**: [`SettlementReceipt`]
//! - **Errors**: [`OpenlistError`] with `OL_ERR_` prefix codes
//! - **Constants**: basis-point bounds and system defaults

pub mod constants;
pub mod error;
pub mod fee;
pub mod ids;
pub mod order;
pub mod receipt;

// Re-export all primary types at crate root for ergonomic imports:
//   use openlist_types::{Order, OrderState, AccountId, ...};

pub use error::*;
pub use fee::*;
pub use ids::*;
pub use order::*;
pub use receipt::*;

// Constants are accessed via `openlist_types::constants::FOO`
// (not re-exported to avoid name collisions).
