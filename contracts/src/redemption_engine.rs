//! Redemption Engine
//!
//! Gates each claim instrument's payout by the oracle's chain state:
//!
//! | State        | merge claim             | fork claim             |
//! |--------------|-------------------------|------------------------|
//! | PreMerge     | `NotYetMerged`          | `NotYetForked`         |
//! | PostMergePoS | allowed                 | `EnvironmentIsMainnet` |
//! | ForkedPoW    | `EnvironmentNotMainnet` | allowed                |
//!
//! Key mechanics:
//! - The holder's full balance is burned on every redemption
//! - Merge claims pay out 1:1, no fee
//! - Fork claims pay out `balance - fee`, `fee = balance * fee_bps / 10000`
//! - The fee stays in the vault as unattributed surplus (see `treasury`)
//!
//! Debit, burn and payout run inside one entry-point call. Any failure
//! reverts all three.

use odra::casper_types::{U256, U512};
use crate::errors::{VaultError, VaultResult};
use crate::types::{ChainState, Instrument};

/// Basis points scale
pub const BPS_SCALE: u32 = 10000;

/// Default fork-claim redemption fee in basis points (1% = 100 bps)
pub const DEFAULT_FEE_BPS: u32 = 100;

/// Maximum fork-claim redemption fee in basis points (10% = 1000 bps)
pub const MAX_FEE_BPS: u32 = 1000;

/// Check that `instrument` may be redeemed in `state`.
pub fn authorize(state: ChainState, instrument: Instrument) -> VaultResult<()> {
    match (state, instrument) {
        (ChainState::PostMergePoS, Instrument::Merge) => Ok(()),
        (ChainState::ForkedPoW, Instrument::Fork) => Ok(()),
        (ChainState::PreMerge, Instrument::Merge) => Err(VaultError::NotYetMerged),
        (ChainState::PreMerge, Instrument::Fork) => Err(VaultError::NotYetForked),
        (ChainState::PostMergePoS, Instrument::Fork) => Err(VaultError::EnvironmentIsMainnet),
        (ChainState::ForkedPoW, Instrument::Merge) => Err(VaultError::EnvironmentNotMainnet),
    }
}

/// Fee retained on a fork-claim redemption, truncated toward zero
pub fn fork_redemption_fee(balance: U256, fee_bps: u32) -> VaultResult<U256> {
    let scaled = balance
        .checked_mul(U256::from(fee_bps))
        .ok_or(VaultError::InvalidAmount)?;
    Ok(scaled / U256::from(BPS_SCALE))
}

/// Split a burned balance into `(paid_out, fee)` for `instrument`
pub fn settle(instrument: Instrument, balance: U256, fee_bps: u32) -> VaultResult<(U256, U256)> {
    let fee = match instrument {
        Instrument::Merge => U256::zero(),
        Instrument::Fork => fork_redemption_fee(balance, fee_bps)?,
    };
    // fee_bps <= BPS_SCALE, so fee <= balance
    Ok((balance - fee, fee))
}

/// Validate a fee rate
pub fn check_fee_bps(fee_bps: u32) -> VaultResult<()> {
    if fee_bps > MAX_FEE_BPS {
        return Err(VaultError::InvalidConfig);
    }
    Ok(())
}

// ===== Helper Functions =====

/// Convert U256 to U512
pub fn u256_to_u512(value: U256) -> U512 {
    let mut bytes = [0u8; 32];
    value.to_little_endian(&mut bytes);
    U512::from_little_endian(&bytes)
}
