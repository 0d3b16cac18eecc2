//! Vault events.
//!
//! The event stream is the vault's audit log: every state change an
//! off-chain indexer needs to reconstruct balances and chain state is
//! emitted here.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::types::Instrument;

/// Deposit converted into a pair of claims
#[odra::event]
pub struct ClaimsIssued {
    pub depositor: Address,
    pub amount: U256,
}

/// Claims burned and paid out
#[odra::event]
pub struct ClaimRedeemed {
    pub instrument: Instrument,
    pub holder: Address,
    pub burned: U256,
    pub fee: U256,
    pub paid_out: U256,
}

/// Issuance paused or resumed
#[odra::event]
pub struct PauseToggled {
    pub paused: bool,
    pub by: Address,
}

/// Host reported as merged
#[odra::event]
pub struct MergeActivated {
    pub difficulty: U256,
}

/// Host reported as forked
#[odra::event]
pub struct ForkActivated {
    pub chain_id: u64,
}

/// Fork-side custody restored after the split
#[odra::event]
pub struct ForkCustodyFunded {
    pub amount: U256,
    pub custody: U256,
}

/// Retained fork fees sent out
#[odra::event]
pub struct FeesWithdrawn {
    pub recipient: Address,
    pub amount: U256,
}

/// Administrator handed over
#[odra::event]
pub struct AdminTransferred {
    pub previous: Address,
    pub new_admin: Address,
}
