// Multi-Quantity Edition Ledger
// Facade for the supply-tracking variant. Structurally parallel to the
// unique-item ledger, minus owner bookkeeping and burn: retiring edition
// balances is entirely the base layer's business, and creator, supply and
// URI remain queryable afterwards as historical records.

use crate::address::Address;

use super::engine::{PaymentChannel, TransferEngine};
use super::error::LedgerResult;
use super::operations::{
    self, is_approved_for_all, issue_edition, EditionIssueParams, LedgerStorage, RuntimeContext,
};
use super::platform::PlatformConfig;
use super::types::TokenId;

/// One edition ledger instance
pub struct EditionLedger<S, E, P> {
    storage: S,
    config: PlatformConfig,
    engine: E,
    funds: P,
}

impl<S, E, P> EditionLedger<S, E, P>
where
    S: LedgerStorage,
    E: TransferEngine,
    P: PaymentChannel,
{
    pub fn new(storage: S, config: PlatformConfig, engine: E, funds: P) -> Self {
        Self {
            storage,
            config,
            engine,
            funds,
        }
    }

    // ========================================
    // Mutations
    // ========================================

    /// Issue a new edition; the caller becomes its creator
    pub fn issue(&mut self, caller: Address, params: EditionIssueParams) -> LedgerResult<TokenId> {
        issue_edition(
            &mut self.storage,
            &self.config,
            &mut self.engine,
            &mut self.funds,
            &RuntimeContext::new(caller),
            params,
        )
    }

    // ========================================
    // Queries
    // ========================================

    pub fn exists(&self, id: TokenId) -> bool {
        operations::exists(&self.storage, id)
    }

    pub fn creator_of(&self, id: TokenId) -> LedgerResult<Address> {
        operations::creator_of(&self.storage, id)
    }

    /// Quantity minted for an ID, 0 if never minted
    pub fn total_supply(&self, id: TokenId) -> u64 {
        operations::total_supply(&self.storage, id)
    }

    pub fn token_uri(&self, id: TokenId) -> LedgerResult<String> {
        operations::token_uri(&self.storage, id)
    }

    pub fn current_id_counter(&self) -> TokenId {
        operations::current_id_counter(&self.storage)
    }

    /// Two-tier operator check: whitelist first, base grants second
    pub fn is_approved_for_all(&self, owner: &Address, operator: &Address) -> bool {
        is_approved_for_all(&self.config, &self.engine, owner, operator)
    }

    // ========================================
    // Component Access
    // ========================================

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    /// Administrator surface; every mutator checks the caller itself
    pub fn config_mut(&mut self) -> &mut PlatformConfig {
        &mut self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Base-layer access for hosts that drive transfers themselves
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn funds(&self) -> &P {
        &self.funds
    }
}
