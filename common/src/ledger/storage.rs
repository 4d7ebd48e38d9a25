// Issuance Ledger - In-Memory Store
// A HashMap-backed LedgerStorage implementation for embedding and tests.
// Hosts with their own persistence implement LedgerStorage directly and
// keep operations atomic through their own transaction layer or by
// committing a StagedLedger overlay.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::address::Address;

use super::error::LedgerResult;
use super::operations::LedgerStorage;
use super::types::TokenId;

/// In-memory ledger state
///
/// Every accessor is infallible, which makes overlay commits
/// all-or-nothing without further machinery.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryLedger {
    id_counter: TokenId,
    creators: HashMap<TokenId, Address>,
    owners: HashMap<TokenId, Address>,
    supplies: HashMap<TokenId, u64>,
    uris: HashMap<TokenId, String>,
}

impl MemoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens with a recorded creator
    pub fn recorded_tokens(&self) -> usize {
        self.creators.len()
    }
}

impl LedgerStorage for MemoryLedger {
    fn id_counter(&self) -> TokenId {
        self.id_counter
    }

    fn set_id_counter(&mut self, value: TokenId) -> LedgerResult<()> {
        self.id_counter = value;
        Ok(())
    }

    fn creator(&self, id: TokenId) -> Option<Address> {
        self.creators.get(&id).cloned()
    }

    fn set_creator(&mut self, id: TokenId, creator: &Address) -> LedgerResult<()> {
        self.creators.insert(id, creator.clone());
        Ok(())
    }

    fn delete_creator(&mut self, id: TokenId) -> LedgerResult<()> {
        self.creators.remove(&id);
        Ok(())
    }

    fn owner(&self, id: TokenId) -> Option<Address> {
        self.owners.get(&id).cloned()
    }

    fn set_owner(&mut self, id: TokenId, owner: &Address) -> LedgerResult<()> {
        self.owners.insert(id, owner.clone());
        Ok(())
    }

    fn delete_owner(&mut self, id: TokenId) -> LedgerResult<()> {
        self.owners.remove(&id);
        Ok(())
    }

    fn minted_supply(&self, id: TokenId) -> u64 {
        self.supplies.get(&id).copied().unwrap_or(0)
    }

    fn set_minted_supply(&mut self, id: TokenId, quantity: u64) -> LedgerResult<()> {
        self.supplies.insert(id, quantity);
        Ok(())
    }

    fn uri(&self, id: TokenId) -> Option<String> {
        self.uris.get(&id).cloned()
    }

    fn set_uri(&mut self, id: TokenId, uri: &str) -> LedgerResult<()> {
        self.uris.insert(id, uri.to_string());
        Ok(())
    }

    fn delete_uri(&mut self, id: TokenId) -> LedgerResult<()> {
        self.uris.remove(&id);
        Ok(())
    }
}
