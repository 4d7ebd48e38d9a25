// Issuance Ledger - Error Codes
// This module defines all error codes for ledger operations.
//
// Error Code Ranges:
// - 0: Success
// - 1-99: Payment errors
// - 100-199: Token errors
// - 200-299: Permission errors
// - 300-399: Input validation errors
// - 900-999: System errors

use thiserror::Error;

/// Ledger operation result type
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum LedgerError {
    // ========================================
    // Payment errors (1-99)
    // ========================================
    #[error("Insufficient payment")]
    InsufficientPayment = 1,

    #[error("Payout to fee recipient failed")]
    PayoutFailed = 2,

    // ========================================
    // Token errors (100-199)
    // ========================================
    #[error("Token does not exist")]
    NonexistentToken = 100,

    #[error("Token already exists")]
    TokenAlreadyExists = 101,

    // ========================================
    // Permission errors (200-299)
    // ========================================
    #[error("Not authorized")]
    NotAuthorized = 200,

    // ========================================
    // Input validation errors (300-399)
    // ========================================
    #[error("Invalid token ID")]
    InvalidTokenId = 300,

    #[error("Invalid address")]
    InvalidAddress = 301,

    #[error("Invalid quantity")]
    InvalidQuantity = 302,

    #[error("URI too long")]
    UriTooLong = 303,

    #[error("URI already set")]
    UriAlreadySet = 304,

    // ========================================
    // System errors (900-999)
    // ========================================
    #[error("Arithmetic overflow")]
    Overflow = 900,

    #[error("Storage error")]
    StorageError = 901,
}

impl LedgerError {
    /// Get the numeric error code
    #[inline]
    pub fn code(&self) -> u64 {
        *self as u64
    }

    /// Create error from numeric code
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(Self::InsufficientPayment),
            2 => Some(Self::PayoutFailed),
            100 => Some(Self::NonexistentToken),
            101 => Some(Self::TokenAlreadyExists),
            200 => Some(Self::NotAuthorized),
            300 => Some(Self::InvalidTokenId),
            301 => Some(Self::InvalidAddress),
            302 => Some(Self::InvalidQuantity),
            303 => Some(Self::UriTooLong),
            304 => Some(Self::UriAlreadySet),
            900 => Some(Self::Overflow),
            901 => Some(Self::StorageError),
            _ => None,
        }
    }
}

/// Convert LedgerError to error code for host return values
impl From<LedgerError> for u64 {
    fn from(err: LedgerError) -> u64 {
        err.code()
    }
}
