//! Fee Treasury
//!
//! Accounts for the fee retained on fork-claim redemptions. Retained fees
//! belong to neither instrument's reserve; they sit in the vault's custody
//! until the administrator withdraws them.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::VaultError;

/// Fee statistics
#[odra::odra_type]
#[derive(Default)]
pub struct FeeStats {
    /// Total fees retained (all time)
    pub total_collected: U256,
    /// Total fees withdrawn (all time)
    pub total_withdrawn: U256,
    /// Fees retained and not yet withdrawn
    pub pending: U256,
}

/// Fee Treasury module
#[odra::module]
pub struct FeeTreasury {
    /// Total fees retained (all time)
    total_collected: Var<U256>,
    /// Total fees withdrawn (all time)
    total_withdrawn: Var<U256>,
    /// Fees available for withdrawal
    pending: Var<U256>,
}

#[odra::module]
impl FeeTreasury {
    /// Initialize the treasury
    pub fn init(&mut self) {
        self.total_collected.set(U256::zero());
        self.total_withdrawn.set(U256::zero());
        self.pending.set(U256::zero());
    }

    /// Record a retained redemption fee
    pub fn record_fee(&mut self, amount: U256) {
        if amount.is_zero() {
            return;
        }

        let total = self.total_collected.get().unwrap_or(U256::zero());
        self.total_collected.set(total + amount);

        let pending = self.get_pending();
        self.pending.set(pending + amount);
    }

    /// Clear all pending fees for withdrawal, returning the amount
    pub fn take_pending(&mut self) -> U256 {
        let pending = self.get_pending();
        if pending.is_zero() {
            self.env().revert(VaultError::NoFeesToWithdraw);
        }

        self.pending.set(U256::zero());
        let withdrawn = self.total_withdrawn.get().unwrap_or(U256::zero());
        self.total_withdrawn.set(withdrawn + pending);
        pending
    }

    /// Fees available for withdrawal
    pub fn get_pending(&self) -> U256 {
        self.pending.get().unwrap_or(U256::zero())
    }

    /// Get fee statistics
    pub fn get_stats(&self) -> FeeStats {
        FeeStats {
            total_collected: self.total_collected.get().unwrap_or(U256::zero()),
            total_withdrawn: self.total_withdrawn.get().unwrap_or(U256::zero()),
            pending: self.get_pending(),
        }
    }
}
