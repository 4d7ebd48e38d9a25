// Ledger Query Operations
// This module contains read-only query functions. None of them mutate
// state; existence is probed directly instead of by attempting an
// operation and catching its failure.

use crate::address::Address;
use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::types::TokenId;

use super::LedgerStorage;

/// Check if a token exists
///
/// A token exists exactly when a creator is recorded for its ID. The
/// reserved ID 0 never exists.
pub fn exists<S: LedgerStorage + ?Sized>(storage: &S, id: TokenId) -> bool {
    if id == 0 {
        return false;
    }
    storage.creator(id).is_some()
}

/// Get the creator recorded at issuance
pub fn creator_of<S: LedgerStorage + ?Sized>(storage: &S, id: TokenId) -> LedgerResult<Address> {
    storage.creator(id).ok_or(LedgerError::NonexistentToken)
}

/// Get the current owner of a unique item
pub fn owner_of<S: LedgerStorage + ?Sized>(storage: &S, id: TokenId) -> LedgerResult<Address> {
    storage.owner(id).ok_or(LedgerError::NonexistentToken)
}

/// Get the quantity minted for an edition, 0 if never minted
pub fn total_supply<S: LedgerStorage + ?Sized>(storage: &S, id: TokenId) -> u64 {
    storage.minted_supply(id)
}

/// Get a token's metadata URI
///
/// Fails with NonexistentToken for an unissued ID. The stored value may
/// legitimately be the empty string.
pub fn token_uri<S: LedgerStorage + ?Sized>(storage: &S, id: TokenId) -> LedgerResult<String> {
    if !exists(storage, id) {
        return Err(LedgerError::NonexistentToken);
    }
    Ok(storage.uri(id).unwrap_or_default())
}

/// The last token ID the allocator handed out, 0 before any issuance
pub fn current_id_counter<S: LedgerStorage + ?Sized>(storage: &S) -> TokenId {
    storage.id_counter()
}
