//! Common types used across the vault.

use odra::prelude::*;
use odra::casper_types::U256;

/// Claim instrument identifier
#[odra::odra_type]
#[derive(Copy, PartialOrd, Ord)]
pub enum Instrument {
    /// Redeemable on the proof-of-stake successor
    Merge,
    /// Redeemable on the proof-of-work fork
    Fork,
}

/// Fork state of the host ledger, as seen by the chain-state oracle
#[odra::odra_type]
#[derive(Copy)]
pub enum ChainState {
    /// Still proof-of-work, no split yet
    PreMerge,
    /// Proof-of-stake successor chain
    PostMergePoS,
    /// Proof-of-work fork under its own chain id
    ForkedPoW,
}

/// Raw signals the oracle classifies
#[odra::odra_type]
#[derive(Copy)]
pub struct OracleInputs {
    /// Chain identifier the host reports
    pub chain_id: u64,
    /// Difficulty-like metric; beacon randomness after the merge
    pub difficulty: U256,
}

/// Effective vault configuration
#[odra::odra_type]
pub struct VaultConfig {
    /// Fork-claim redemption fee in bps
    pub fee_bps: u32,
    /// Chain id the proof-of-work fork reports
    pub fork_chain_id: u64,
    /// Difficulty at or above which the host counts as merged
    pub merge_difficulty_threshold: U256,
}

/// Outcome of a single redemption
#[odra::odra_type]
pub struct RedemptionReceipt {
    /// Instrument redeemed
    pub instrument: Instrument,
    /// Holder whose claims were burned
    pub holder: Address,
    /// Claims burned (full balance)
    pub burned: U256,
    /// Fee retained by the vault
    pub fee: U256,
    /// Base resource sent to the holder
    pub paid_out: U256,
}
