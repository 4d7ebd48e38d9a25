// Ledger Operations Module
// This module contains the core business logic for issuance, burn,
// transfer bookkeeping and queries.
//
// The operations are designed to be runtime-agnostic:
// - Ledger state is abstracted via the LedgerStorage trait
// - Runtime facts (the caller) are passed as parameters
// - This allows testing and reuse across different host environments

mod approval;
mod burn;
mod fees;
mod issue;
mod metadata;
mod query;
mod transfer;
mod validation;

pub use approval::*;
pub use burn::*;
pub use fees::*;
pub use issue::*;
pub use metadata::*;
pub use query::*;
pub use transfer::*;
pub use validation::*;

use crate::address::Address;

use super::engine::TransferEngine;
use super::error::{LedgerError, LedgerResult};
use super::platform::PlatformConfig;
use super::types::TokenId;

// ========================================
// Storage Trait (for dependency injection)
// ========================================

/// Abstract storage interface for ledger state
///
/// One instance backs one ledger variant: the unique-item variant uses the
/// owner accessors, the multi-quantity variant uses the supply accessors.
/// In both variants a token exists exactly when its creator is recorded.
pub trait LedgerStorage {
    // Identifier allocator state: the last allocated ID, 0 before any
    // issuance.
    fn id_counter(&self) -> TokenId;
    fn set_id_counter(&mut self, value: TokenId) -> LedgerResult<()>;

    // Provenance store
    fn creator(&self, id: TokenId) -> Option<Address>;
    fn set_creator(&mut self, id: TokenId, creator: &Address) -> LedgerResult<()>;
    fn delete_creator(&mut self, id: TokenId) -> LedgerResult<()>;

    fn owner(&self, id: TokenId) -> Option<Address>;
    fn set_owner(&mut self, id: TokenId, owner: &Address) -> LedgerResult<()>;
    fn delete_owner(&mut self, id: TokenId) -> LedgerResult<()>;

    // Supply ledger
    fn minted_supply(&self, id: TokenId) -> u64;
    fn set_minted_supply(&mut self, id: TokenId, quantity: u64) -> LedgerResult<()>;

    // Metadata store
    fn uri(&self, id: TokenId) -> Option<String>;
    fn set_uri(&mut self, id: TokenId, uri: &str) -> LedgerResult<()>;
    fn delete_uri(&mut self, id: TokenId) -> LedgerResult<()>;
}

// ========================================
// Runtime Context
// ========================================

/// Runtime context providing caller information
pub struct RuntimeContext {
    /// Current caller (operation signer)
    pub caller: Address,
}

impl RuntimeContext {
    /// Create a new runtime context
    pub fn new(caller: Address) -> Self {
        Self { caller }
    }
}

// ========================================
// Permission Checking Utilities
// ========================================

/// Check if the caller may move or retire a unique item
///
/// Returns Ok(()) for the current owner, for a whitelisted platform
/// operator, and for an operator the owner granted through the base
/// layer's approval store.
pub fn check_token_authority<S, E>(
    storage: &S,
    config: &PlatformConfig,
    engine: &E,
    id: TokenId,
    caller: &Address,
) -> LedgerResult<()>
where
    S: LedgerStorage + ?Sized,
    E: TransferEngine + ?Sized,
{
    let owner = storage.owner(id).ok_or(LedgerError::NonexistentToken)?;

    if owner == *caller {
        return Ok(());
    }

    if is_approved_for_all(config, engine, &owner, caller) {
        return Ok(());
    }

    Err(LedgerError::NotAuthorized)
}
