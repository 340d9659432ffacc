//! # openlist-ledger
//!
//! The [`AssetLedger`] contract the settlement engine settles against,
//! a reference [`InMemoryAssetLedger`], and the native-unit [`FundLedger`]
//! that tracks settlement proceeds.
//!
//! The engine core never owns asset state: mint, ownership, creator
//! identity, and per-asset royalties belong to the ledger collaborator.

pub mod asset_ledger;
pub mod funds;
pub mod memory;

pub use asset_ledger::AssetLedger;
pub use funds::FundLedger;
pub use memory::InMemoryAssetLedger;
