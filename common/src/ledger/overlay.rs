// Issuance Ledger - Staging Overlay
// An in-memory write buffer layered over a base store. Mutations
// accumulate in the overlay while an operation runs; on success they are
// applied to the base store, on failure they are dropped. Reads see
// staged writes first, so an operation observes its own effects before
// commit.

use std::collections::HashMap;

use crate::address::Address;

use super::error::LedgerResult;
use super::operations::LedgerStorage;
use super::types::TokenId;

/// Key types for staged ledger state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LedgerKey {
    /// The allocator's ID counter
    IdCounter,
    /// Creator of a token
    Creator(TokenId),
    /// Owner of a unique item
    Owner(TokenId),
    /// Minted quantity of an edition
    Supply(TokenId),
    /// Metadata URI of a token
    Uri(TokenId),
}

/// Value types for staged ledger state
///
/// The `Deleted` variant marks a key as deleted (tombstone).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerValue {
    Counter(TokenId),
    Account(Address),
    Quantity(u64),
    Uri(String),
    /// Marks a key as deleted
    Deleted,
}

/// Accumulated writes, ready to be applied to a base store
#[derive(Debug, Clone, Default)]
pub struct LedgerChanges {
    changes: HashMap<LedgerKey, LedgerValue>,
}

impl LedgerChanges {
    /// Check if there are no staged writes
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of staged writes
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    fn get(&self, key: &LedgerKey) -> Option<&LedgerValue> {
        self.changes.get(key)
    }

    fn set(&mut self, key: LedgerKey, value: LedgerValue) {
        self.changes.insert(key, value);
    }

    /// Apply every staged write to the base store
    ///
    /// The base store must not fail partway: a store that can fail mid
    /// apply needs its own transaction support to keep operations
    /// all-or-nothing.
    pub fn apply<S: LedgerStorage + ?Sized>(self, storage: &mut S) -> LedgerResult<()> {
        for (key, value) in self.changes {
            match (key, value) {
                (LedgerKey::IdCounter, LedgerValue::Counter(v)) => storage.set_id_counter(v)?,
                (LedgerKey::Creator(id), LedgerValue::Account(a)) => storage.set_creator(id, &a)?,
                (LedgerKey::Creator(id), LedgerValue::Deleted) => storage.delete_creator(id)?,
                (LedgerKey::Owner(id), LedgerValue::Account(a)) => storage.set_owner(id, &a)?,
                (LedgerKey::Owner(id), LedgerValue::Deleted) => storage.delete_owner(id)?,
                (LedgerKey::Supply(id), LedgerValue::Quantity(q)) => {
                    storage.set_minted_supply(id, q)?
                }
                (LedgerKey::Uri(id), LedgerValue::Uri(u)) => storage.set_uri(id, &u)?,
                (LedgerKey::Uri(id), LedgerValue::Deleted) => storage.delete_uri(id)?,
                // The staging setters never produce other pairings
                _ => {}
            }
        }
        Ok(())
    }
}

/// A LedgerStorage view that stages writes over a borrowed base store
pub struct StagedLedger<'a, S: LedgerStorage + ?Sized> {
    base: &'a S,
    changes: LedgerChanges,
}

impl<'a, S: LedgerStorage + ?Sized> StagedLedger<'a, S> {
    /// Create an empty overlay over a base store
    pub fn new(base: &'a S) -> Self {
        Self {
            base,
            changes: LedgerChanges::default(),
        }
    }

    /// Consume the overlay, returning the staged writes
    pub fn into_changes(self) -> LedgerChanges {
        self.changes
    }
}

impl<S: LedgerStorage + ?Sized> LedgerStorage for StagedLedger<'_, S> {
    fn id_counter(&self) -> TokenId {
        match self.changes.get(&LedgerKey::IdCounter) {
            Some(LedgerValue::Counter(v)) => *v,
            _ => self.base.id_counter(),
        }
    }

    fn set_id_counter(&mut self, value: TokenId) -> LedgerResult<()> {
        self.changes
            .set(LedgerKey::IdCounter, LedgerValue::Counter(value));
        Ok(())
    }

    fn creator(&self, id: TokenId) -> Option<Address> {
        match self.changes.get(&LedgerKey::Creator(id)) {
            Some(LedgerValue::Account(a)) => Some(a.clone()),
            Some(LedgerValue::Deleted) => None,
            _ => self.base.creator(id),
        }
    }

    fn set_creator(&mut self, id: TokenId, creator: &Address) -> LedgerResult<()> {
        self.changes
            .set(LedgerKey::Creator(id), LedgerValue::Account(creator.clone()));
        Ok(())
    }

    fn delete_creator(&mut self, id: TokenId) -> LedgerResult<()> {
        self.changes.set(LedgerKey::Creator(id), LedgerValue::Deleted);
        Ok(())
    }

    fn owner(&self, id: TokenId) -> Option<Address> {
        match self.changes.get(&LedgerKey::Owner(id)) {
            Some(LedgerValue::Account(a)) => Some(a.clone()),
            Some(LedgerValue::Deleted) => None,
            _ => self.base.owner(id),
        }
    }

    fn set_owner(&mut self, id: TokenId, owner: &Address) -> LedgerResult<()> {
        self.changes
            .set(LedgerKey::Owner(id), LedgerValue::Account(owner.clone()));
        Ok(())
    }

    fn delete_owner(&mut self, id: TokenId) -> LedgerResult<()> {
        self.changes.set(LedgerKey::Owner(id), LedgerValue::Deleted);
        Ok(())
    }

    fn minted_supply(&self, id: TokenId) -> u64 {
        match self.changes.get(&LedgerKey::Supply(id)) {
            Some(LedgerValue::Quantity(q)) => *q,
            _ => self.base.minted_supply(id),
        }
    }

    fn set_minted_supply(&mut self, id: TokenId, quantity: u64) -> LedgerResult<()> {
        self.changes
            .set(LedgerKey::Supply(id), LedgerValue::Quantity(quantity));
        Ok(())
    }

    fn uri(&self, id: TokenId) -> Option<String> {
        match self.changes.get(&LedgerKey::Uri(id)) {
            Some(LedgerValue::Uri(u)) => Some(u.clone()),
            Some(LedgerValue::Deleted) => None,
            _ => self.base.uri(id),
        }
    }

    fn set_uri(&mut self, id: TokenId, uri: &str) -> LedgerResult<()> {
        self.changes
            .set(LedgerKey::Uri(id), LedgerValue::Uri(uri.to_string()));
        Ok(())
    }

    fn delete_uri(&mut self, id: TokenId) -> LedgerResult<()> {
        self.changes.set(LedgerKey::Uri(id), LedgerValue::Deleted);
        Ok(())
    }
}
