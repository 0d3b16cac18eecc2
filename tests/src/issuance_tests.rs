//! Claim issuance through the vault.

use crate::setup::deploy;
use fork_vault_contracts::errors::VaultError;
use fork_vault_contracts::types::Instrument;
use odra::casper_types::{U256, U512};
use odra::host::HostRef;
use pretty_assertions::assert_eq;

#[test]
fn test_deposit_mints_both_claims() {
    let mut d = deploy();
    let minted = d.deposit(d.alice, 10);

    assert_eq!(minted, U256::from(10u64));
    assert_eq!(d.merge_claim.balance_of(d.alice), U256::from(10u64));
    assert_eq!(d.fork_claim.balance_of(d.alice), U256::from(10u64));
    assert_eq!(d.merge_claim.total_supply(), U256::from(10u64));
    assert_eq!(d.fork_claim.total_supply(), U256::from(10u64));
    assert_eq!(d.custody(), U512::from(10u64));

    let state = d.vault.reserve_state();
    assert_eq!(state.total_deposited, U256::from(10u64));
    assert_eq!(state.reserve(Instrument::Merge), U256::from(10u64));
    assert_eq!(state.reserve(Instrument::Fork), U256::from(10u64));
    assert!(state.is_solvent());
}

#[test]
fn test_deposits_accumulate_per_holder() {
    let mut d = deploy();
    d.deposit(d.alice, 10);
    d.deposit(d.bob, 25);
    d.deposit(d.alice, 5);

    assert_eq!(d.merge_claim.balance_of(d.alice), U256::from(15u64));
    assert_eq!(d.fork_claim.balance_of(d.bob), U256::from(25u64));
    assert_eq!(d.vault.total_deposited(), U256::from(40u64));
    assert_eq!(d.custody(), U512::from(40u64));
}

#[test]
fn test_zero_deposit_rejected() {
    let d = deploy();
    d.env.set_caller(d.alice);

    let result = d.vault.with_tokens(U512::zero()).try_issue_claims();
    assert_eq!(result, Err(VaultError::ZeroDeposit.into()));
    assert!(d.vault.total_deposited().is_zero());
}

#[test]
fn test_paused_vault_rejects_deposits() {
    let mut d = deploy();
    d.env.set_caller(d.admin);
    d.vault.pause();
    assert!(d.vault.is_paused());

    d.env.set_caller(d.alice);
    let result = d.vault.with_tokens(U512::from(10u64)).try_issue_claims();
    assert_eq!(result, Err(VaultError::IssuanceSuspended.into()));
    assert_eq!(d.merge_claim.balance_of(d.alice), U256::zero());
    assert_eq!(d.custody(), U512::zero());

    d.env.set_caller(d.admin);
    d.vault.unpause();
    assert_eq!(d.deposit(d.alice, 10), U256::from(10u64));
}

#[test]
fn test_deposit_allowed_after_merge() {
    let mut d = deploy();
    d.activate_merge();

    d.deposit(d.alice, 7);
    assert_eq!(d.merge_claim.balance_of(d.alice), U256::from(7u64));
    assert_eq!(d.fork_claim.balance_of(d.alice), U256::from(7u64));
}

#[test]
fn test_only_vault_can_mint_claims() {
    let mut d = deploy();
    d.env.set_caller(d.alice);

    let result = d.merge_claim.try_mint(d.alice, U256::from(1_000u64));
    assert_eq!(result, Err(VaultError::UnauthorizedMinter.into()));
    assert!(d.merge_claim.is_minter(d.vault_address()));
    assert!(!d.merge_claim.is_minter(d.alice));
}

#[test]
fn test_claims_are_transferable() {
    let mut d = deploy();
    d.deposit(d.alice, 10);

    d.env.set_caller(d.alice);
    assert!(d.fork_claim.transfer(d.bob, U256::from(4u64)));

    assert_eq!(d.fork_claim.balance_of(d.alice), U256::from(6u64));
    assert_eq!(d.fork_claim.balance_of(d.bob), U256::from(4u64));
    assert_eq!(d.merge_claim.balance_of(d.bob), U256::zero());
}

#[test]
fn test_transfer_from_respects_allowance() {
    let mut d = deploy();
    d.deposit(d.alice, 10);

    d.env.set_caller(d.alice);
    d.fork_claim.approve(d.bob, U256::from(3u64));
    assert_eq!(d.fork_claim.allowance(d.alice, d.bob), U256::from(3u64));

    d.env.set_caller(d.bob);
    assert_eq!(
        d.fork_claim.try_transfer_from(d.alice, d.bob, U256::from(4u64)),
        Err(VaultError::InsufficientAllowance.into())
    );
    assert_eq!(d.fork_claim.balance_of(d.alice), U256::from(10u64));

    assert!(d.fork_claim.transfer_from(d.alice, d.bob, U256::from(3u64)));
    assert_eq!(d.fork_claim.allowance(d.alice, d.bob), U256::zero());
    assert_eq!(d.fork_claim.balance_of(d.bob), U256::from(3u64));
    assert_eq!(
        d.fork_claim.try_transfer_from(d.alice, d.bob, U256::one()),
        Err(VaultError::InsufficientAllowance.into())
    );
}
