//! Shared deployment for the host tests.

use fork_vault_contracts::chain_oracle::DEFAULT_FORK_CHAIN_ID;
use fork_vault_contracts::claim_token::{ClaimToken, ClaimTokenHostRef, ClaimTokenInitArgs};
use fork_vault_contracts::redemption_engine::DEFAULT_FEE_BPS;
use fork_vault_contracts::vault::{ForkVault, ForkVaultHostRef, ForkVaultInitArgs};
use odra::casper_types::{U256, U512};
use odra::host::{Deployer, HostEnv, HostRef};
use odra::prelude::*;

/// Chain id the host reports before any split
pub const MAINNET_CHAIN_ID: u64 = 1;

pub struct Deployment {
    pub env: HostEnv,
    pub admin: Address,
    pub alice: Address,
    pub bob: Address,
    pub vault: ForkVaultHostRef,
    pub merge_claim: ClaimTokenHostRef,
    pub fork_claim: ClaimTokenHostRef,
}

impl Deployment {
    pub fn vault_address(&self) -> Address {
        self.vault.address().clone()
    }

    /// Native balance held by the vault
    pub fn custody(&self) -> U512 {
        self.env.balance_of(&self.vault_address())
    }

    /// Deposit `amount` motes as `depositor`
    pub fn deposit(&mut self, depositor: Address, amount: u64) -> U256 {
        self.env.set_caller(depositor);
        self.vault.with_tokens(U512::from(amount)).issue_claims()
    }

    pub fn activate_merge(&mut self) {
        self.env.set_caller(self.admin);
        self.vault.activate_merge();
    }

    pub fn activate_fork(&mut self) {
        self.env.set_caller(self.admin);
        self.vault.activate_fork();
    }

    /// Restore `amount` motes of fork-side custody as the admin
    pub fn fund_fork_custody(&mut self, amount: u64) -> U256 {
        self.env.set_caller(self.admin);
        self.vault.with_tokens(U512::from(amount)).fund_fork_custody()
    }
}

pub fn claim_token(env: &HostEnv, name: &str, symbol: &str, admin: Address) -> ClaimTokenHostRef {
    ClaimToken::deploy(
        env,
        ClaimTokenInitArgs {
            name: name.to_string(),
            symbol: symbol.to_string(),
            admin,
        },
    )
}

/// Deploy both claim tokens and the vault with the default fee, and
/// register the vault as minter on both tokens.
pub fn deploy() -> Deployment {
    deploy_with_fee(DEFAULT_FEE_BPS)
}

pub fn deploy_with_fee(fee_bps: u32) -> Deployment {
    let env = odra_test::env();
    let admin = env.get_account(0);
    let alice = env.get_account(1);
    let bob = env.get_account(2);

    env.set_caller(admin);
    let mut merge_claim = claim_token(&env, "Merge Claim", "MCLM", admin);
    let mut fork_claim = claim_token(&env, "Fork Claim", "FCLM", admin);

    let vault = ForkVault::deploy(
        &env,
        ForkVaultInitArgs {
            admin,
            merge_claim: merge_claim.address().clone(),
            fork_claim: fork_claim.address().clone(),
            chain_id: MAINNET_CHAIN_ID,
            fork_chain_id: DEFAULT_FORK_CHAIN_ID,
            fee_bps,
        },
    );

    let vault_address = vault.address().clone();
    merge_claim.add_minter(vault_address);
    fork_claim.add_minter(vault_address);

    Deployment {
        env,
        admin,
        alice,
        bob,
        vault,
        merge_claim,
        fork_claim,
    }
}
