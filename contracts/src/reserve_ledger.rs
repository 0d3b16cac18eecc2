//! Reserve Ledger
//!
//! Tracks the base resource held for each claim instrument and the claims
//! outstanding against it.
//!
//! Every deposit backs both instruments 1:1, so `credit` raises both
//! reserves. After the host splits each branch keeps its own copy of the
//! custody: a merge redemption only ever consumes `merge_reserve` and a fork
//! redemption only ever consumes `fork_reserve`.
//!
//! Invariants (per instrument `i`):
//! - `issued(i) <= reserve(i) <= total_deposited`
//! - `issued(i)` only decreases through `debit_for_redemption(i, ..)`

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::{VaultError, VaultResult};
use crate::types::Instrument;

/// Reserve and issuance counters
#[odra::odra_type]
#[derive(Default)]
pub struct ReserveState {
    /// Base resource ever deposited
    pub total_deposited: U256,
    /// Reserve backing merge claims
    pub merge_reserve: U256,
    /// Reserve backing fork claims
    pub fork_reserve: U256,
    /// Merge claims minted and not yet burned
    pub issued_merge: U256,
    /// Fork claims minted and not yet burned
    pub issued_fork: U256,
}

impl ReserveState {
    /// Reserve backing `instrument`
    pub fn reserve(&self, instrument: Instrument) -> U256 {
        match instrument {
            Instrument::Merge => self.merge_reserve,
            Instrument::Fork => self.fork_reserve,
        }
    }

    /// Outstanding claims of `instrument`
    pub fn issued(&self, instrument: Instrument) -> U256 {
        match instrument {
            Instrument::Merge => self.issued_merge,
            Instrument::Fork => self.issued_fork,
        }
    }

    /// Record a deposit backing `amount` of both instruments.
    pub fn credit(&mut self, amount: U256) -> VaultResult<()> {
        if amount.is_zero() {
            return Err(VaultError::InvalidAmount);
        }

        let add = |value: U256| value.checked_add(amount).ok_or(VaultError::InvalidAmount);
        let next = ReserveState {
            total_deposited: add(self.total_deposited)?,
            merge_reserve: add(self.merge_reserve)?,
            fork_reserve: add(self.fork_reserve)?,
            issued_merge: add(self.issued_merge)?,
            issued_fork: add(self.issued_fork)?,
        };
        *self = next;
        Ok(())
    }

    /// Release `amount` of reserve for a redemption of `instrument`.
    ///
    /// The other instrument's counters are never touched.
    pub fn debit_for_redemption(&mut self, instrument: Instrument, amount: U256) -> VaultResult<()> {
        if amount.is_zero() {
            return Err(VaultError::InvalidAmount);
        }
        if amount > self.issued(instrument) {
            return Err(VaultError::InsufficientReserve);
        }

        // issued <= reserve, so neither subtraction can underflow
        match instrument {
            Instrument::Merge => {
                self.issued_merge = self.issued_merge - amount;
                self.merge_reserve = self.merge_reserve - amount;
            }
            Instrument::Fork => {
                self.issued_fork = self.issued_fork - amount;
                self.fork_reserve = self.fork_reserve - amount;
            }
        }
        Ok(())
    }

    /// Check the solvency invariants hold
    pub fn is_solvent(&self) -> bool {
        self.issued_merge <= self.merge_reserve
            && self.issued_fork <= self.fork_reserve
            && self.merge_reserve <= self.total_deposited
            && self.fork_reserve <= self.total_deposited
    }
}

/// Reserve Ledger module
#[odra::module]
pub struct ReserveLedger {
    /// Reserve and issuance counters
    state: Var<ReserveState>,
}

#[odra::module]
impl ReserveLedger {
    /// Start with all counters at zero
    pub fn init(&mut self) {
        self.state.set(ReserveState::default());
    }

    /// Credit a deposit to both instruments
    pub fn credit(&mut self, amount: U256) {
        let mut state = self.get_state();
        if let Err(error) = state.credit(amount) {
            self.env().revert(error);
        }
        self.state.set(state);
    }

    /// Debit a redemption of `instrument`
    pub fn debit_for_redemption(&mut self, instrument: Instrument, amount: U256) {
        let mut state = self.get_state();
        if let Err(error) = state.debit_for_redemption(instrument, amount) {
            self.env().revert(error);
        }
        self.state.set(state);
    }

    /// Current counters
    pub fn get_state(&self) -> ReserveState {
        self.state.get().unwrap_or_default()
    }

    /// Base resource ever deposited
    pub fn total_deposited(&self) -> U256 {
        self.get_state().total_deposited
    }
}
