//! Chain State Oracle
//!
//! Classifies the host ledger into one of the fork states from two signals:
//! - Chain id: the fork announces itself by reporting `fork_chain_id`
//! - Difficulty: after the merge the difficulty slot carries beacon
//!   randomness, which sits above `2^64`, while proof-of-work difficulty
//!   stays far below it
//!
//! The chain id is decisive for the fork; the difficulty is decisive for the
//! merge. Nothing else feeds the classification.
//!
//! The inputs are written only through the vault's administrator entry
//! points. Ordering of the transitions is enforced there, not here.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::VaultError;
use crate::types::{ChainState, OracleInputs};

/// Chain id the proof-of-work fork reports by default
pub const DEFAULT_FORK_CHAIN_ID: u64 = 10001;

/// Difficulty floor of a merged host (2^64)
pub const MERGE_DIFFICULTY_THRESHOLD: u128 = 1u128 << 64;

/// Oracle configuration, fixed at init
#[odra::odra_type]
#[derive(Copy)]
pub struct OracleConfig {
    /// Chain id the fork reports
    pub fork_chain_id: u64,
    /// Difficulty at or above which the host counts as merged
    pub merge_difficulty_threshold: U256,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            fork_chain_id: DEFAULT_FORK_CHAIN_ID,
            merge_difficulty_threshold: U256::from(MERGE_DIFFICULTY_THRESHOLD),
        }
    }
}

/// Classify the host ledger from its raw signals.
pub fn classify(chain_id: u64, difficulty: U256, config: &OracleConfig) -> ChainState {
    if chain_id == config.fork_chain_id {
        ChainState::ForkedPoW
    } else if difficulty >= config.merge_difficulty_threshold {
        ChainState::PostMergePoS
    } else {
        ChainState::PreMerge
    }
}

/// Chain State Oracle module
#[odra::module]
pub struct ChainStateOracle {
    /// Current raw signals
    inputs: Var<OracleInputs>,
    /// Classification parameters
    config: Var<OracleConfig>,
}

#[odra::module]
impl ChainStateOracle {
    /// Start pre-merge on `chain_id`
    pub fn init(&mut self, chain_id: u64, fork_chain_id: u64) {
        if chain_id == fork_chain_id {
            self.env().revert(VaultError::InvalidConfig);
        }

        self.config.set(OracleConfig {
            fork_chain_id,
            ..OracleConfig::default()
        });
        self.inputs.set(OracleInputs {
            chain_id,
            difficulty: U256::zero(),
        });
    }

    /// Classification of the current inputs
    pub fn current_state(&self) -> ChainState {
        let inputs = self.inputs();
        classify(inputs.chain_id, inputs.difficulty, &self.config())
    }

    /// Current raw signals
    pub fn inputs(&self) -> OracleInputs {
        self.inputs.get().unwrap_or(OracleInputs {
            chain_id: 0,
            difficulty: U256::zero(),
        })
    }

    /// Classification parameters
    pub fn config(&self) -> OracleConfig {
        self.config.get().unwrap_or_default()
    }

    /// Report a merged host: difficulty jumps to the top of the range
    pub fn record_merge(&mut self) {
        let mut inputs = self.inputs();
        inputs.difficulty = U256::MAX;
        self.inputs.set(inputs);
    }

    /// Report the fork: the host now announces the fork chain id
    pub fn record_fork(&mut self) {
        let mut inputs = self.inputs();
        inputs.chain_id = self.config().fork_chain_id;
        self.inputs.set(inputs);
    }
}
