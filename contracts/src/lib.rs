//! Fork Vault Contracts
//!
//! Reserve-backed vault that splits a native deposit into a merge claim and
//! a fork claim, each redeemable only on its own side of a consensus split.
//!
//! ## Architecture
//!
//! - **ForkVault**: Entry points for issuance, redemption and administration
//! - **ReserveLedger**: Per-instrument reserve and issuance counters
//! - **ChainStateOracle**: Classifies the host as pre-merge, merged or forked
//! - **RedemptionEngine**: State gate and fee arithmetic for payouts
//! - **AdminControl**: Administrator and pause flag
//! - **FeeTreasury**: Fork-claim fees retained for the administrator
//! - **ClaimToken**: CEP-18 ledger, one instance per instrument
//!
//! ## Chain States
//!
//! - PreMerge: issuance only, both redemptions blocked
//! - PostMergePoS: merge claims redeem 1:1
//! - ForkedPoW: fork claims redeem minus the fee

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod types;
pub mod errors;
pub mod events;
pub mod issuance;
pub mod redemption_engine;

// Contract modules
pub mod reserve_ledger;
pub mod chain_oracle;
pub mod access_control;
pub mod treasury;
pub mod claim_token;
pub mod vault;
