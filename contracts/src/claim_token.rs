//! Claim Token Contract
//!
//! CEP-18 shaped fungible ledger for one claim instrument. The vault deploys
//! against two instances: one for merge claims, one for fork claims. Only
//! authorized minters (the vault) can mint or burn.
//!
//! Balances, allowances and supply are mirrored into the CEP-18 named keys
//! and dictionaries so wallets can read them without knowing this contract.

use odra::prelude::*;
use odra::casper_types::{U256, Key};
use odra::casper_types::bytesrepr::ToBytes;
use crate::errors::VaultError;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;

/// Claims use mote precision
const DECIMALS: u8 = 9;
const CEP18_NAME_KEY: &str = "name";
const CEP18_SYMBOL_KEY: &str = "symbol";
const CEP18_DECIMALS_KEY: &str = "decimals";
const CEP18_TOTAL_SUPPLY_KEY: &str = "total_supply";
const CEP18_BALANCES_DICT: &str = "balances";
const CEP18_ALLOWANCES_DICT: &str = "allowances";

/// Fungible ledger interface the vault mints and burns through
#[odra::external_contract]
pub trait ClaimLedger {
    fn mint(&mut self, to: Address, amount: U256);
    fn burn_from(&mut self, from: Address, amount: U256);
    fn balance_of(&self, account: Address) -> U256;
}

/// Claim Token Contract
#[odra::module]
pub struct ClaimToken {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Total supply
    total_supply: Var<U256>,
    /// Balance mapping
    balances: Mapping<Address, U256>,
    /// Allowance mapping (owner, spender) -> amount
    allowances: Mapping<(Address, Address), U256>,
    /// Account allowed to manage minters
    admin: Var<Address>,
    /// Authorized minters (the vault)
    authorized_minters: Mapping<Address, bool>,
}

#[odra::module]
impl ClaimToken {
    /// Initialize an empty claim ledger
    pub fn init(&mut self, name: String, symbol: String, admin: Address) {
        self.name.set(name.clone());
        self.symbol.set(symbol.clone());
        self.total_supply.set(U256::zero());
        self.admin.set(admin);
        self.env().init_dictionary(CEP18_BALANCES_DICT);
        self.env().init_dictionary(CEP18_ALLOWANCES_DICT);
        self.env().set_named_value(CEP18_NAME_KEY, name);
        self.env().set_named_value(CEP18_SYMBOL_KEY, symbol);
        self.env().set_named_value(CEP18_DECIMALS_KEY, DECIMALS);
        self.env().set_named_value(CEP18_TOTAL_SUPPLY_KEY, U256::zero());
    }

    // ========== CEP-18 Standard Functions ==========

    /// Get token name
    pub fn name(&self) -> String {
        self.name.get().unwrap_or_default()
    }

    /// Get token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get().unwrap_or_default()
    }

    /// Get decimals
    pub fn decimals(&self) -> u8 {
        DECIMALS
    }

    /// Get total supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get().unwrap_or(U256::zero())
    }

    /// Get balance of an account
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).unwrap_or(U256::zero())
    }

    /// Get allowance for spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or(U256::zero())
    }

    /// Transfer claims to recipient
    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let sender = self.env().caller();
        self.transfer_internal(sender, recipient, amount);
        true
    }

    /// Approve spender to move claims
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.approve_internal(owner, spender, amount);
        true
    }

    /// Transfer claims from owner to recipient (requires allowance)
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        let spender = self.env().caller();

        let current_allowance = self.allowance(owner, spender);
        if current_allowance < amount {
            self.env().revert(VaultError::InsufficientAllowance);
        }

        self.transfer_internal(owner, recipient, amount);
        self.approve_internal(owner, spender, current_allowance - amount);
        true
    }

    // ========== Protocol Functions (Restricted) ==========

    /// Mint new claims (only authorized minters)
    pub fn mint(&mut self, to: Address, amount: U256) {
        self.require_authorized_minter();

        let new_balance = self.balance_of(to) + amount;
        self.balances.set(&to, new_balance);
        self.set_balance_cep18(to, new_balance);

        let new_supply = self.total_supply() + amount;
        self.total_supply.set(new_supply);
        self.set_total_supply_cep18(new_supply);
    }

    /// Burn claims from an account (only authorized minters, used on redemption)
    pub fn burn_from(&mut self, from: Address, amount: U256) {
        self.require_authorized_minter();

        let current_balance = self.balance_of(from);
        if current_balance < amount {
            self.env().revert(VaultError::InsufficientTokenBalance);
        }

        let new_balance = current_balance - amount;
        self.balances.set(&from, new_balance);
        self.set_balance_cep18(from, new_balance);

        let new_supply = self.total_supply() - amount;
        self.total_supply.set(new_supply);
        self.set_total_supply_cep18(new_supply);
    }

    // ========== Admin Functions ==========

    /// Add an authorized minter (admin only)
    pub fn add_minter(&mut self, minter: Address) {
        self.require_admin();
        self.authorized_minters.set(&minter, true);
    }

    /// Remove an authorized minter (admin only)
    pub fn remove_minter(&mut self, minter: Address) {
        self.require_admin();
        self.authorized_minters.set(&minter, false);
    }

    /// Check if address is authorized minter
    pub fn is_minter(&self, account: Address) -> bool {
        self.authorized_minters.get(&account).unwrap_or(false)
    }

    // ========== Internal Functions ==========

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(VaultError::InsufficientTokenBalance);
        }

        let new_from_balance = from_balance - amount;
        self.balances.set(&from, new_from_balance);
        self.set_balance_cep18(from, new_from_balance);

        let new_to_balance = self.balance_of(to) + amount;
        self.balances.set(&to, new_to_balance);
        self.set_balance_cep18(to, new_to_balance);
    }

    fn approve_internal(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.set(&(owner, spender), amount);
        self.set_allowance_cep18(owner, spender, amount);
    }

    fn set_balance_cep18(&self, owner: Address, amount: U256) {
        let key = cep18_balance_key(owner);
        self.env().set_dictionary_value(CEP18_BALANCES_DICT, key.as_bytes(), amount);
    }

    fn set_allowance_cep18(&self, owner: Address, spender: Address, amount: U256) {
        let key = cep18_allowance_key(owner, spender);
        self.env().set_dictionary_value(CEP18_ALLOWANCES_DICT, key.as_bytes(), amount);
    }

    fn set_total_supply_cep18(&self, amount: U256) {
        self.env().set_named_value(CEP18_TOTAL_SUPPLY_KEY, amount);
    }

    fn require_authorized_minter(&self) {
        if !self.is_minter(self.env().caller()) {
            self.env().revert(VaultError::UnauthorizedMinter);
        }
    }

    fn require_admin(&self) {
        let caller = self.env().caller();
        if self.admin.get().map_or(true, |admin| admin != caller) {
            self.env().revert(VaultError::NotAdministrator);
        }
    }
}

/// Dictionary key for a CEP-18 balance: base64 of the owner `Key` bytes
fn cep18_balance_key(owner: Address) -> String {
    let key = Key::from(owner);
    let bytes = key.to_bytes().unwrap_or_default();
    BASE64_STANDARD.encode(bytes)
}

/// Dictionary key for a CEP-18 allowance: base64 of owner then spender bytes
fn cep18_allowance_key(owner: Address, spender: Address) -> String {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&Key::from(owner).to_bytes().unwrap_or_default());
    bytes.extend_from_slice(&Key::from(spender).to_bytes().unwrap_or_default());
    BASE64_STANDARD.encode(bytes)
}
