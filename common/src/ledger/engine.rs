// Issuance Ledger - Base Layer Collaborators
// Traits for the two external collaborators the ledger consumes: the
// balance-transfer engine and the payment channel used by the fee gate.
// Host runtimes provide concrete implementations.

use crate::address::{Address, Amount};

use super::error::LedgerResult;
use super::types::TokenId;

// ========================================
// Transfer Engine
// ========================================

/// Base-layer balance bookkeeping consumed by the ledger
///
/// The engine owns per-holder balances and per-owner operator grants; the
/// ledger owns identity, provenance and metadata. Engine effects belong to
/// the host's atomic scope: if an operation fails after an engine call,
/// the host rolls the engine back together with everything else.
pub trait TransferEngine {
    /// Credit freshly issued units to a recipient
    fn credit(&mut self, to: &Address, id: TokenId, quantity: u64) -> LedgerResult<()>;

    /// Retire a token's balance bookkeeping on burn
    fn debit_and_clear(&mut self, id: TokenId) -> LedgerResult<()>;

    /// The per-owner operator grant stored by the base layer
    fn stored_approval(&self, owner: &Address, operator: &Address) -> bool;

    /// The holder the base layer currently records for a token
    fn current_owner(&self, id: TokenId) -> Option<Address>;
}

// ========================================
// Payment Channel
// ========================================

/// Result of forwarding a payment to a recipient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoutOutcome {
    /// Recipient accepted the funds
    Accepted,
    /// Recipient rejected the funds
    Rejected,
}

/// Value-transfer channel used by the fee gate
///
/// `forward` moves the full amount from the issuance payment to the
/// recipient. A `Rejected` outcome aborts the enclosing issuance.
pub trait PaymentChannel {
    fn forward(&mut self, recipient: &Address, amount: Amount) -> PayoutOutcome;
}
