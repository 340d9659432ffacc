//! Native-unit fund ledger.
//!
//! Tracks proceeds owed to each account after settlements. Payments enter
//! as values attached to the settle call; the engine credits the three
//! shares here only once the asset transfer has committed, so a rejected
//! settlement never touches a balance.

use std::collections::HashMap;

use openlist_types::AccountId;

/// Per-account balances in the smallest native unit.
#[derive(Debug, Default)]
pub struct FundLedger {
    balances: HashMap<AccountId, u128>,
}

impl FundLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the account's balance, saturating at `u128::MAX`.
    pub fn credit(&mut self, account: AccountId, amount: u128) {
        let balance = self.balances.entry(account).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    /// Current balance, zero for unknown accounts.
    #[must_use]
    pub fn balance(&self, account: AccountId) -> u128 {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    /// Sum of all balances. Equals the sum of all settled payments.
    #[must_use]
    pub fn total(&self) -> u128 {
        self.balances.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_accumulates() {
        let mut funds = FundLedger::new();
        let alice = AccountId([1u8; 32]);

        assert_eq!(funds.balance(alice), 0);
        funds.credit(alice, 95);
        funds.credit(alice, 5);
        assert_eq!(funds.balance(alice), 100);
        assert_eq!(funds.total(), 100);
    }

    #[test]
    fn credit_saturates_instead_of_wrapping() {
        let mut funds = FundLedger::new();
        let alice = AccountId([1u8; 32]);

        funds.credit(alice, u128::MAX);
        funds.credit(alice, 1);
        assert_eq!(funds.balance(alice), u128::MAX);
    }

    #[test]
    fn balances_are_per_account() {
        let mut funds = FundLedger::new();
        funds.credit(AccountId([1u8; 32]), 3);
        funds.credit(AccountId([2u8; 32]), 2);

        assert_eq!(funds.balance(AccountId([1u8; 32])), 3);
        assert_eq!(funds.balance(AccountId([2u8; 32])), 2);
        assert_eq!(funds.balance(AccountId([3u8; 32])), 0);
        assert_eq!(funds.total(), 5);
    }
}
