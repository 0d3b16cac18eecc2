//! Issuance Gate
//!
//! Converts an incoming deposit into a pair of claims:
//! 1. Reject while paused (before looking at the amount)
//! 2. Reject an empty deposit
//! 3. Credit the reserve ledger
//! 4. Mint `amount` of every instrument to the depositor
//!
//! Issuance is strictly additive: nothing here can lower a reserve or an
//! issued total.

use odra::casper_types::{U256, U512};
use crate::errors::{VaultError, VaultResult};
use crate::types::Instrument;

/// Instruments minted for every deposit, in mint order
pub const PAIRED_INSTRUMENTS: [Instrument; 2] = [Instrument::Merge, Instrument::Fork];

/// Validate a deposit against the pause flag and convert it into ledger
/// units.
///
/// The pause flag is checked before the amount so a paused vault reports
/// `IssuanceSuspended` for every deposit.
pub fn check_deposit(paused: bool, attached: U512) -> VaultResult<U256> {
    if paused {
        return Err(VaultError::IssuanceSuspended);
    }
    if attached.is_zero() {
        return Err(VaultError::ZeroDeposit);
    }
    attached_to_u256(attached)
}

/// Convert an attached motes value into ledger units.
///
/// Native supply fits comfortably in 256 bits; anything wider is rejected
/// rather than truncated.
pub fn attached_to_u256(value: U512) -> VaultResult<U256> {
    let mut bytes = [0u8; 64];
    value.to_little_endian(&mut bytes);
    if bytes[32..].iter().any(|byte| *byte != 0) {
        return Err(VaultError::InvalidAmount);
    }
    Ok(U256::from_little_endian(&bytes[..32]))
}
