//! Fork Vault Contract
//!
//! Locks native tokens and issues a merge claim and a fork claim for every
//! mote deposited. Which claim pays out is decided by the chain-state oracle:
//! merge claims on the proof-of-stake successor, fork claims on the
//! proof-of-work fork.
//!
//! ## Flow
//!
//! 1. Depositor attaches motes to `issue_claims`
//! 2. Vault credits both reserves and mints both claims 1:1
//! 3. Administrator reports the merge, then optionally the fork
//! 4. Holder redeems the claim matching the chain it is on
//!
//! Merge and fork redemptions each pay out of their own chain's copy of the
//! custody. On a single ledger the merge payouts drain the shared balance, so
//! after the fork the administrator restores the fork side with
//! `fund_fork_custody`, up to the outstanding fork reserve.
//!
//! ## Deployment
//!
//! The two `ClaimToken` contracts are deployed first and passed to `init`;
//! their admin then registers the vault as minter on both.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use crate::access_control::AdminControl;
use crate::chain_oracle::ChainStateOracle;
use crate::claim_token::ClaimLedgerContractRef;
use crate::errors::VaultError;
use crate::events::{
    ClaimRedeemed, ClaimsIssued, FeesWithdrawn, ForkActivated, ForkCustodyFunded, MergeActivated,
};
use crate::issuance::{attached_to_u256, check_deposit, PAIRED_INSTRUMENTS};
use crate::redemption_engine::{authorize, check_fee_bps, settle, u256_to_u512};
use crate::reserve_ledger::{ReserveLedger, ReserveState};
use crate::treasury::{FeeStats, FeeTreasury};
use crate::types::{ChainState, Instrument, OracleInputs, RedemptionReceipt, VaultConfig};

/// Fork Vault Contract
#[odra::module(events = [
    ClaimsIssued,
    ClaimRedeemed,
    MergeActivated,
    ForkActivated,
    ForkCustodyFunded,
    FeesWithdrawn
])]
pub struct ForkVault {
    /// Administrator and pause flag
    admin: SubModule<AdminControl>,
    /// Chain-state signals
    oracle: SubModule<ChainStateOracle>,
    /// Reserve and issuance counters
    ledger: SubModule<ReserveLedger>,
    /// Retained fork-claim fees
    treasury: SubModule<FeeTreasury>,
    /// Merge claim token contract
    merge_claim: Var<Address>,
    /// Fork claim token contract
    fork_claim: Var<Address>,
    /// Fork-claim redemption fee in bps
    fee_bps: Var<u32>,
}

#[odra::module]
impl ForkVault {
    /// Initialize the vault.
    ///
    /// `chain_id` is the id the host reports today; `fork_chain_id` is the id
    /// a proof-of-work fork would report.
    pub fn init(
        &mut self,
        admin: Address,
        merge_claim: Address,
        fork_claim: Address,
        chain_id: u64,
        fork_chain_id: u64,
        fee_bps: u32,
    ) {
        if merge_claim == fork_claim {
            self.env().revert(VaultError::InvalidConfig);
        }
        if let Err(error) = check_fee_bps(fee_bps) {
            self.env().revert(error);
        }

        self.admin.init(admin);
        self.oracle.init(chain_id, fork_chain_id);
        self.ledger.init();
        self.treasury.init();

        self.merge_claim.set(merge_claim);
        self.fork_claim.set(fork_claim);
        self.fee_bps.set(fee_bps);
    }

    // ========== Issuance ==========

    /// Deposit attached motes and receive both claims 1:1.
    ///
    /// Returns the amount of each claim minted.
    #[odra(payable)]
    pub fn issue_claims(&mut self) -> U256 {
        let depositor = self.env().caller();
        let amount = match check_deposit(self.admin.is_paused(), self.env().attached_value()) {
            Ok(amount) => amount,
            Err(error) => self.env().revert(error),
        };

        self.ledger.credit(amount);
        for instrument in PAIRED_INSTRUMENTS {
            self.claim_ledger(instrument).mint(depositor, amount);
        }

        self.env().emit_event(ClaimsIssued { depositor, amount });
        amount
    }

    // ========== Redemption ==========

    /// Burn the caller's merge claims and pay them out 1:1.
    #[odra(non_reentrant)]
    pub fn redeem_merge_claim(&mut self) -> RedemptionReceipt {
        self.redeem(Instrument::Merge)
    }

    /// Burn the caller's fork claims and pay them out minus the fee.
    #[odra(non_reentrant)]
    pub fn redeem_fork_claim(&mut self) -> RedemptionReceipt {
        self.redeem(Instrument::Fork)
    }

    /// Quote `(paid_out, fee)` for redeeming `holder`'s full balance now.
    ///
    /// Does not check the chain state.
    pub fn redemption_quote(&self, instrument: Instrument, holder: Address) -> (U256, U256) {
        let balance = self.claim_ledger(instrument).balance_of(holder);
        match settle(instrument, balance, self.fee_bps()) {
            Ok(quote) => quote,
            Err(error) => self.env().revert(error),
        }
    }

    // ========== Admin Functions ==========

    /// Suspend claim issuance (admin only)
    pub fn pause(&mut self) {
        self.admin.pause();
    }

    /// Resume claim issuance (admin only)
    pub fn unpause(&mut self) {
        self.admin.unpause();
    }

    /// Report the merge (admin only). No-op once merged or forked.
    pub fn activate_merge(&mut self) {
        self.admin.require_admin();

        if self.oracle.current_state() != ChainState::PreMerge {
            return;
        }
        self.oracle.record_merge();
        self.env().emit_event(MergeActivated {
            difficulty: self.oracle.inputs().difficulty,
        });
    }

    /// Report the proof-of-work fork (admin only). Requires the merge first;
    /// no-op once forked.
    pub fn activate_fork(&mut self) {
        self.admin.require_admin();

        match self.oracle.current_state() {
            ChainState::PreMerge => self.env().revert(VaultError::InvalidTransition),
            ChainState::ForkedPoW => {}
            ChainState::PostMergePoS => {
                self.oracle.record_fork();
                self.env().emit_event(ForkActivated {
                    chain_id: self.oracle.inputs().chain_id,
                });
            }
        }
    }

    /// Top up the custody backing fork claims (admin only, forked chain).
    ///
    /// Custody after the top-up may not exceed the fork reserve plus the
    /// retained fees. Returns the resulting custody.
    #[odra(payable)]
    pub fn fund_fork_custody(&mut self) -> U256 {
        self.admin.require_admin();
        if self.oracle.current_state() != ChainState::ForkedPoW {
            self.env().revert(VaultError::NotYetForked);
        }

        let amount = match attached_to_u256(self.env().attached_value()) {
            Ok(amount) if !amount.is_zero() => amount,
            Ok(_) => self.env().revert(VaultError::InvalidAmount),
            Err(error) => self.env().revert(error),
        };
        let custody = self.custody();
        if custody > self.fork_custody_ceiling() {
            self.env().revert(VaultError::InvalidAmount);
        }

        self.env().emit_event(ForkCustodyFunded { amount, custody });
        custody
    }

    /// Update the fork-claim redemption fee (admin only)
    pub fn set_fee_bps(&mut self, fee_bps: u32) {
        self.admin.require_admin();
        if let Err(error) = check_fee_bps(fee_bps) {
            self.env().revert(error);
        }
        self.fee_bps.set(fee_bps);
    }

    /// Send all retained fees to `recipient` (admin only)
    pub fn withdraw_fees(&mut self, recipient: Address) -> U256 {
        self.admin.require_admin();

        let amount = self.treasury.take_pending();
        let amount_motes = u256_to_u512(amount);
        if self.env().self_balance() < amount_motes {
            self.env().revert(VaultError::PayoutRejected);
        }
        self.env().transfer_tokens(&recipient, &amount_motes);

        self.env().emit_event(FeesWithdrawn { recipient, amount });
        amount
    }

    /// Hand the administrator role to another account (admin only)
    pub fn transfer_admin(&mut self, new_admin: Address) {
        self.admin.transfer_admin(new_admin);
    }

    // ========== Query Functions ==========

    /// Current fork state of the host
    pub fn chain_state(&self) -> ChainState {
        self.oracle.current_state()
    }

    /// Raw oracle signals
    pub fn oracle_inputs(&self) -> OracleInputs {
        self.oracle.inputs()
    }

    /// Chain id the host currently reports
    pub fn chain_id(&self) -> u64 {
        self.oracle.inputs().chain_id
    }

    /// Reserve and issuance counters
    pub fn reserve_state(&self) -> ReserveState {
        self.ledger.get_state()
    }

    /// Native tokens ever deposited
    pub fn total_deposited(&self) -> U256 {
        self.ledger.total_deposited()
    }

    /// Native tokens currently held by the vault
    pub fn custody(&self) -> U256 {
        match attached_to_u256(self.env().self_balance()) {
            Ok(custody) => custody,
            Err(error) => self.env().revert(error),
        }
    }

    /// Amount `fund_fork_custody` still accepts before the fork side is
    /// fully backed
    pub fn fork_custody_shortfall(&self) -> U256 {
        self.fork_custody_ceiling().saturating_sub(self.custody())
    }

    /// Fork-claim redemption fee in bps
    pub fn fee_bps(&self) -> u32 {
        self.fee_bps.get().unwrap_or(0)
    }

    /// Retained fee statistics
    pub fn fee_stats(&self) -> FeeStats {
        self.treasury.get_stats()
    }

    /// Effective configuration
    pub fn get_config(&self) -> VaultConfig {
        let oracle = self.oracle.config();
        VaultConfig {
            fee_bps: self.fee_bps(),
            fork_chain_id: oracle.fork_chain_id,
            merge_difficulty_threshold: oracle.merge_difficulty_threshold,
        }
    }

    /// Claim token contract for `instrument`
    pub fn claim_token(&self, instrument: Instrument) -> Address {
        let address = match instrument {
            Instrument::Merge => self.merge_claim.get(),
            Instrument::Fork => self.fork_claim.get(),
        };
        match address {
            Some(address) => address,
            None => self.env().revert(VaultError::InvalidConfig),
        }
    }

    /// Merge claim token contract
    pub fn merge_claim(&self) -> Address {
        self.claim_token(Instrument::Merge)
    }

    /// Fork claim token contract
    pub fn fork_claim(&self) -> Address {
        self.claim_token(Instrument::Fork)
    }

    /// Whether claim issuance is suspended
    pub fn is_paused(&self) -> bool {
        self.admin.is_paused()
    }

    /// Check if account is the administrator
    pub fn is_admin(&self, account: Address) -> bool {
        self.admin.is_admin(account)
    }

    /// Get the administrator address
    pub fn get_admin(&self) -> Option<Address> {
        self.admin.get_admin()
    }

    // ========== Internal Functions ==========

    fn redeem(&mut self, instrument: Instrument) -> RedemptionReceipt {
        if let Err(error) = authorize(self.oracle.current_state(), instrument) {
            self.env().revert(error);
        }

        let holder = self.env().caller();
        let mut claims = self.claim_ledger(instrument);
        let balance = claims.balance_of(holder);
        if balance.is_zero() {
            self.env().revert(VaultError::ZeroBalance);
        }

        let (paid_out, fee) = match settle(instrument, balance, self.fee_bps()) {
            Ok(split) => split,
            Err(error) => self.env().revert(error),
        };
        let paid_out_motes = u256_to_u512(paid_out);
        if self.env().self_balance() < paid_out_motes {
            self.env().revert(VaultError::PayoutRejected);
        }

        self.ledger.debit_for_redemption(instrument, balance);
        claims.burn_from(holder, balance);
        self.treasury.record_fee(fee);
        self.env().transfer_tokens(&holder, &paid_out_motes);

        self.env().emit_event(ClaimRedeemed {
            instrument,
            holder,
            burned: balance,
            fee,
            paid_out,
        });

        RedemptionReceipt {
            instrument,
            holder,
            burned: balance,
            fee,
            paid_out,
        }
    }

    fn fork_custody_ceiling(&self) -> U256 {
        self.ledger
            .get_state()
            .fork_reserve
            .saturating_add(self.treasury.get_pending())
    }

    fn claim_ledger(&self, instrument: Instrument) -> ClaimLedgerContractRef {
        ClaimLedgerContractRef::new(self.env(), self.claim_token(instrument))
    }
}
