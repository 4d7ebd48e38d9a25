// Ledger Input Validation Helpers
// This module provides validation functions for operation inputs.

use crate::address::Address;
use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::types::{TokenId, MAX_URI_LENGTH};

/// Validate token ID (must be non-zero)
pub fn validate_token_id(id: TokenId) -> LedgerResult<()> {
    if id == 0 {
        return Err(LedgerError::InvalidTokenId);
    }
    Ok(())
}

/// Validate recipient address (must be non-zero)
pub fn validate_recipient(recipient: &Address) -> LedgerResult<()> {
    if recipient.is_zero() {
        return Err(LedgerError::InvalidAddress);
    }
    Ok(())
}

/// Validate metadata URI length
pub fn validate_uri(uri: &str) -> LedgerResult<()> {
    if uri.len() > MAX_URI_LENGTH {
        return Err(LedgerError::UriTooLong);
    }
    Ok(())
}

/// Validate edition quantity (must be at least 1)
pub fn validate_quantity(quantity: u64) -> LedgerResult<()> {
    if quantity == 0 {
        return Err(LedgerError::InvalidQuantity);
    }
    Ok(())
}
