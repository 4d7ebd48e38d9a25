// Unique-Item Ledger
// Facade tying ledger storage, platform configuration and the base-layer
// collaborators together for the owner-per-item variant. Hosts that bring
// their own storage call the operation functions directly instead.

use crate::address::Address;

use super::engine::{PaymentChannel, TransferEngine};
use super::error::LedgerResult;
use super::operations::{
    self, burn_item, is_approved_for_all, issue_item, record_transfer, IssueParams, LedgerStorage,
    RuntimeContext,
};
use super::platform::PlatformConfig;
use super::types::TokenId;

/// One unique-item ledger instance
pub struct ItemLedger<S, E, P> {
    storage: S,
    config: PlatformConfig,
    engine: E,
    funds: P,
}

impl<S, E, P> ItemLedger<S, E, P>
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

    /// Issue a new item; the caller becomes its creator
    pub fn issue(&mut self, caller: Address, params: IssueParams) -> LedgerResult<TokenId> {
        issue_item(
            &mut self.storage,
            &self.config,
            &mut self.engine,
            &mut self.funds,
            &RuntimeContext::new(caller),
            params,
        )
    }

    /// Burn an item as its owner or an approved operator
    pub fn burn(&mut self, caller: Address, id: TokenId) -> LedgerResult<()> {
        burn_item(
            &mut self.storage,
            &self.config,
            &mut self.engine,
            &RuntimeContext::new(caller),
            id,
        )
    }

    /// Base-layer callback: record the post-transfer holder
    pub fn record_transfer(&mut self, id: TokenId) -> LedgerResult<()> {
        record_transfer(&mut self.storage, &self.engine, id)
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

    pub fn owner_of(&self, id: TokenId) -> LedgerResult<Address> {
        operations::owner_of(&self.storage, id)
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
