//! Admin Control
//!
//! Single-administrator gate for the vault:
//! - `is_admin` answers the authorization question for any account
//! - `require_admin` is called explicitly at the top of every privileged
//!   entry point
//! - owns the pause flag read by claim issuance

use odra::prelude::*;
use crate::errors::VaultError;
use crate::events::{AdminTransferred, PauseToggled};

/// Admin Control module
#[odra::module(events = [PauseToggled, AdminTransferred])]
pub struct AdminControl {
    /// Administrator account
    admin: Var<Address>,
    /// Whether claim issuance is suspended
    paused: Var<bool>,
    /// Whether the module is initialized
    initialized: Var<bool>,
}

#[odra::module]
impl AdminControl {
    /// Initialize with the administrator, unpaused
    pub fn init(&mut self, initial_admin: Address) {
        if self.initialized.get().unwrap_or(false) {
            self.env().revert(VaultError::AlreadyInitialized);
        }

        self.admin.set(initial_admin);
        self.paused.set(false);
        self.initialized.set(true);
    }

    // ========== Query Functions ==========

    /// Check if account is the administrator
    pub fn is_admin(&self, account: Address) -> bool {
        self.admin.get().map_or(false, |admin| admin == account)
    }

    /// Get the administrator address
    pub fn get_admin(&self) -> Option<Address> {
        self.admin.get()
    }

    /// Whether claim issuance is suspended
    pub fn is_paused(&self) -> bool {
        self.paused.get().unwrap_or(false)
    }

    // ========== Admin Functions ==========

    /// Suspend claim issuance (admin only)
    pub fn pause(&mut self) {
        self.require_admin();
        self.set_paused(true);
    }

    /// Resume claim issuance (admin only)
    pub fn unpause(&mut self) {
        self.require_admin();
        self.set_paused(false);
    }

    /// Hand the administrator role to another account (admin only)
    pub fn transfer_admin(&mut self, new_admin: Address) {
        self.require_admin();
        let previous = self.env().caller();
        self.admin.set(new_admin);
        self.env().emit_event(AdminTransferred { previous, new_admin });
    }

    /// Revert unless the caller is the administrator
    pub fn require_admin(&self) {
        if !self.is_admin(self.env().caller()) {
            self.env().revert(VaultError::NotAdministrator);
        }
    }

    // ========== Internal Functions ==========

    fn set_paused(&mut self, paused: bool) {
        self.paused.set(paused);
        self.env().emit_event(PauseToggled {
            paused,
            by: self.env().caller(),
        });
    }
}
