//! Vault error definitions.

use odra::prelude::*;

/// Fork vault errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum VaultError {
    // Deposit and ledger errors (1xx)
    InvalidAmount = 100,
    ZeroDeposit = 101,
    IssuanceSuspended = 102,
    InsufficientReserve = 103,

    // Chain state errors (2xx)
    NotYetMerged = 200,
    NotYetForked = 201,
    EnvironmentIsMainnet = 202,
    EnvironmentNotMainnet = 203,
    InvalidTransition = 204,

    // Access control errors (3xx)
    NotAdministrator = 300,
    UnauthorizedMinter = 301,

    // Redemption errors (4xx)
    ZeroBalance = 400,
    PayoutRejected = 401,
    NoFeesToWithdraw = 402,

    // Token errors (5xx)
    InsufficientTokenBalance = 500,
    InsufficientAllowance = 501,

    // Configuration errors (9xx)
    InvalidConfig = 900,
    AlreadyInitialized = 901,
}

impl VaultError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Deposit / ledger
            VaultError::InvalidAmount => "Amount must be non-zero and within range",
            VaultError::ZeroDeposit => "Deposit must be non-zero",
            VaultError::IssuanceSuspended => "Claim issuance is paused",
            VaultError::InsufficientReserve => "Redemption exceeds issued claims",

            // Chain state
            VaultError::NotYetMerged => "Host ledger has not merged yet",
            VaultError::NotYetForked => "Host ledger has not forked yet",
            VaultError::EnvironmentIsMainnet => "Operation not allowed on the proof-of-stake chain",
            VaultError::EnvironmentNotMainnet => "Operation only allowed on the proof-of-stake chain",
            VaultError::InvalidTransition => "Chain state transition out of order",

            // Access control
            VaultError::NotAdministrator => "Unauthorized: caller is not the administrator",
            VaultError::UnauthorizedMinter => "Unauthorized: caller is not a minter",

            // Redemption
            VaultError::ZeroBalance => "No claims to redeem",
            VaultError::PayoutRejected => "Payout rejected: vault custody too low",
            VaultError::NoFeesToWithdraw => "No retained fees to withdraw",

            // Token
            VaultError::InsufficientTokenBalance => "Insufficient token balance",
            VaultError::InsufficientAllowance => "Insufficient token allowance",

            // Config
            VaultError::InvalidConfig => "Invalid configuration parameter",
            VaultError::AlreadyInitialized => "Module already initialized",
        }
    }
}

impl core::fmt::Display for VaultError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<VaultError> for OdraError {
    fn from(error: VaultError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}

/// Result type for the pure vault logic
pub type VaultResult<T> = Result<T, VaultError>;
