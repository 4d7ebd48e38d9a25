// Ledger Issue Operations
// This module contains the issuance logic for both variants, plus the
// identifier allocator and provenance recording used only on this path.
//
// An issuance runs against a staging overlay and commits only after the
// payment forward succeeds, so a failure at any step leaves the ledger
// untouched. Engine credits belong to the host's atomic scope: a host
// without whole-operation atomicity must roll the engine back when the
// operation returns an error after credit.

use log::debug;

use crate::address::{Address, Amount};
use crate::ledger::engine::{PaymentChannel, TransferEngine};
use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::overlay::StagedLedger;
use crate::ledger::platform::PlatformConfig;
use crate::ledger::types::TokenId;

use super::fees::{check_payment, forward_payment};
use super::metadata::record_token_uri;
use super::validation::{validate_quantity, validate_recipient};
use super::{LedgerStorage, RuntimeContext};

// ========================================
// Identifier Allocator
// ========================================

/// Peek at the ID the allocator will hand out next, without mutating
pub fn next_token_id<S: LedgerStorage + ?Sized>(storage: &S) -> LedgerResult<TokenId> {
    storage
        .id_counter()
        .checked_add(1)
        .ok_or(LedgerError::Overflow)
}

/// Advance the allocator by exactly one and return the allocated ID
///
/// IDs start at 1 and are never handed out twice, regardless of later
/// burns.
pub fn allocate_token_id<S: LedgerStorage + ?Sized>(storage: &mut S) -> LedgerResult<TokenId> {
    let id = next_token_id(storage)?;
    storage.set_id_counter(id)?;
    Ok(id)
}

// ========================================
// Provenance Recording
// ========================================

/// Record creator (and owner, for unique items) for a freshly allocated ID
///
/// Called exactly once per ID, from the issuance path only, before any
/// metadata write for the same ID.
pub fn record_creation<S: LedgerStorage + ?Sized>(
    storage: &mut S,
    id: TokenId,
    creator: &Address,
    owner: Option<&Address>,
) -> LedgerResult<()> {
    if storage.creator(id).is_some() {
        return Err(LedgerError::TokenAlreadyExists);
    }
    storage.set_creator(id, creator)?;
    if let Some(owner) = owner {
        storage.set_owner(id, owner)?;
    }
    Ok(())
}

// ========================================
// Issue Parameters
// ========================================

/// Parameters for issuing a unique item
#[derive(Clone, Debug)]
pub struct IssueParams {
    /// Recipient and initial owner
    pub to: Address,
    /// Metadata URI (0-512 bytes)
    pub uri: String,
    /// Payment carried by the request
    pub payment: Amount,
}

/// Parameters for issuing a multi-quantity edition
#[derive(Clone, Debug)]
pub struct EditionIssueParams {
    /// Recipient of the minted quantity
    pub to: Address,
    /// Quantity to mint (at least 1, set once, immutable)
    pub quantity: u64,
    /// Metadata URI (0-512 bytes)
    pub uri: String,
    /// Payment carried by the request
    pub payment: Amount,
}

// ========================================
// Issue Operations
// ========================================

/// Issue a unique item
///
/// # Parameters
/// - `storage`: Ledger state backend
/// - `config`: Platform configuration (fee, recipient, policy)
/// - `engine`: Base-layer transfer engine
/// - `funds`: Payment channel for the fee gate
/// - `ctx`: Runtime context (caller becomes the creator)
/// - `params`: Issue parameters
///
/// # Returns
/// - `Ok(TokenId)`: The newly allocated token ID
/// - `Err(LedgerError)`: Error code; no ledger state was changed
pub fn issue_item<S, E, P>(
    storage: &mut S,
    config: &PlatformConfig,
    engine: &mut E,
    funds: &mut P,
    ctx: &RuntimeContext,
    params: IssueParams,
) -> LedgerResult<TokenId>
where
    S: LedgerStorage + ?Sized,
    E: TransferEngine + ?Sized,
    P: PaymentChannel + ?Sized,
{
    // Step 1: Input and policy validation
    // A zero caller would break the creator-based existence predicate
    if ctx.caller.is_zero() {
        return Err(LedgerError::InvalidAddress);
    }
    validate_recipient(&params.to)?;
    config.check_issuer(&ctx.caller)?;

    // Step 2: Fee gate, before any state is touched
    check_payment(config, params.payment)?;

    // Step 3: Stage allocation, provenance and metadata
    let (id, changes) = {
        let mut staged = StagedLedger::new(&*storage);
        let id = allocate_token_id(&mut staged)?;
        record_creation(&mut staged, id, &ctx.caller, Some(&params.to))?;
        record_token_uri(&mut staged, id, &params.uri)?;
        (id, staged.into_changes())
    };

    // Step 4: Credit the recipient through the base layer
    engine.credit(&params.to, id, 1)?;

    // Step 5: Forward the full payment, the last observable side effect
    forward_payment(funds, config, params.payment)?;

    // Step 6: Commit the staged ledger writes
    changes.apply(storage)?;

    debug!(
        "issued item {id} to {} (creator {}, payment {})",
        params.to, ctx.caller, params.payment
    );
    Ok(id)
}

/// Issue a multi-quantity edition
///
/// # Parameters
/// - `storage`: Ledger state backend
/// - `config`: Platform configuration (fee, recipient, policy)
/// - `engine`: Base-layer transfer engine
/// - `funds`: Payment channel for the fee gate
/// - `ctx`: Runtime context (caller becomes the creator)
/// - `params`: Issue parameters, including the quantity to mint
///
/// # Returns
/// - `Ok(TokenId)`: The newly allocated token ID
/// - `Err(LedgerError)`: Error code; no ledger state was changed
pub fn issue_edition<S, E, P>(
    storage: &mut S,
    config: &PlatformConfig,
    engine: &mut E,
    funds: &mut P,
    ctx: &RuntimeContext,
    params: EditionIssueParams,
) -> LedgerResult<TokenId>
where
    S: LedgerStorage + ?Sized,
    E: TransferEngine + ?Sized,
    P: PaymentChannel + ?Sized,
{
    // Step 1: Input and policy validation
    // A zero caller would break the creator-based existence predicate
    if ctx.caller.is_zero() {
        return Err(LedgerError::InvalidAddress);
    }
    validate_recipient(&params.to)?;
    validate_quantity(params.quantity)?;
    config.check_issuer(&ctx.caller)?;

    // Step 2: Fee gate, before any state is touched
    check_payment(config, params.payment)?;

    // Step 3: Stage allocation, provenance, supply and metadata
    let (id, changes) = {
        let mut staged = StagedLedger::new(&*storage);
        let id = allocate_token_id(&mut staged)?;
        record_creation(&mut staged, id, &ctx.caller, None)?;
        staged.set_minted_supply(id, params.quantity)?;
        record_token_uri(&mut staged, id, &params.uri)?;
        (id, staged.into_changes())
    };

    // Step 4: Credit the recipient through the base layer
    engine.credit(&params.to, id, params.quantity)?;

    // Step 5: Forward the full payment, the last observable side effect
    forward_payment(funds, config, params.payment)?;

    // Step 6: Commit the staged ledger writes
    changes.apply(storage)?;

    debug!(
        "issued edition {id} x{} to {} (creator {}, payment {})",
        params.quantity, params.to, ctx.caller, params.payment
    );
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::ADDRESS_SIZE;
    use crate::ledger::engine::PayoutOutcome;
    use crate::ledger::storage::MemoryLedger;
    use crate::ledger::types::{IssuancePolicy, FIRST_TOKEN_ID, MAX_URI_LENGTH};

    fn addr(value: u8) -> Address {
        Address::new([value; ADDRESS_SIZE])
    }

    // Mock transfer engine recording credits
    struct MockEngine {
        credits: Vec<(Address, TokenId, u64)>,
    }

    impl MockEngine {
        fn new() -> Self {
            Self { credits: vec![] }
        }
    }

    impl TransferEngine for MockEngine {
        fn credit(&mut self, to: &Address, id: TokenId, quantity: u64) -> LedgerResult<()> {
            self.credits.push((to.clone(), id, quantity));
            Ok(())
        }

        fn debit_and_clear(&mut self, _id: TokenId) -> LedgerResult<()> {
            Ok(())
        }

        fn stored_approval(&self, _owner: &Address, _operator: &Address) -> bool {
            false
        }

        fn current_owner(&self, _id: TokenId) -> Option<Address> {
            None
        }
    }

    struct RecordingChannel {
        payouts: Vec<(Address, Amount)>,
    }

    impl RecordingChannel {
        fn new() -> Self {
            Self { payouts: vec![] }
        }
    }

    impl PaymentChannel for RecordingChannel {
        fn forward(&mut self, recipient: &Address, amount: Amount) -> PayoutOutcome {
            self.payouts.push((recipient.clone(), amount));
            PayoutOutcome::Accepted
        }
    }

    struct RejectingChannel;

    impl PaymentChannel for RejectingChannel {
        fn forward(&mut self, _recipient: &Address, _amount: Amount) -> PayoutOutcome {
            PayoutOutcome::Rejected
        }
    }

    fn test_config(fee: Amount) -> PlatformConfig {
        PlatformConfig::new(addr(1), fee, addr(2)).expect("valid config")
    }

    fn item_params(to: Address, payment: Amount) -> IssueParams {
        IssueParams {
            to,
            uri: "ipfs://meta".to_string(),
            payment,
        }
    }

    #[test]
    fn test_issue_item_success() {
        let mut storage = MemoryLedger::new();
        let config = test_config(100);
        let mut engine = MockEngine::new();
        let mut funds = RecordingChannel::new();
        let ctx = RuntimeContext::new(addr(5));

        let id = issue_item(
            &mut storage,
            &config,
            &mut engine,
            &mut funds,
            &ctx,
            item_params(addr(6), 100),
        )
        .expect("issue");

        assert_eq!(id, 1);
        assert_eq!(storage.id_counter(), 1);
        assert_eq!(storage.creator(1), Some(addr(5)));
        assert_eq!(storage.owner(1), Some(addr(6)));
        assert_eq!(storage.uri(1), Some("ipfs://meta".to_string()));
        assert_eq!(engine.credits, vec![(addr(6), 1, 1)]);
        assert_eq!(funds.payouts, vec![(addr(2), 100)]);
    }

    #[test]
    fn test_issue_sequential_ids() {
        let mut storage = MemoryLedger::new();
        let config = test_config(0);
        let mut engine = MockEngine::new();
        let mut funds = RecordingChannel::new();
        let ctx = RuntimeContext::new(addr(5));

        for expected in 1..=3u64 {
            let id = issue_item(
                &mut storage,
                &config,
                &mut engine,
                &mut funds,
                &ctx,
                item_params(addr(6), 0),
            )
            .expect("issue");
            assert_eq!(id, expected);
        }
        assert_eq!(storage.id_counter(), 3);
    }

    #[test]
    fn test_overpayment_forwards_full_amount() {
        let mut storage = MemoryLedger::new();
        let config = test_config(100);
        let mut engine = MockEngine::new();
        let mut funds = RecordingChannel::new();
        let ctx = RuntimeContext::new(addr(5));

        issue_item(
            &mut storage,
            &config,
            &mut engine,
            &mut funds,
            &ctx,
            item_params(addr(6), 150),
        )
        .expect("issue");

        // The surplus is not refunded
        assert_eq!(funds.payouts, vec![(addr(2), 150)]);
    }

    #[test]
    fn test_insufficient_payment_leaves_state_untouched() {
        let mut storage = MemoryLedger::new();
        let config = test_config(100);
        let mut engine = MockEngine::new();
        let mut funds = RecordingChannel::new();
        let ctx = RuntimeContext::new(addr(5));

        let result = issue_item(
            &mut storage,
            &config,
            &mut engine,
            &mut funds,
            &ctx,
            item_params(addr(6), 99),
        );

        assert_eq!(result, Err(LedgerError::InsufficientPayment));
        assert_eq!(storage.id_counter(), 0);
        assert_eq!(storage.creator(1), None);
        assert_eq!(storage.uri(1), None);
        assert!(engine.credits.is_empty());
        assert!(funds.payouts.is_empty());
    }

    #[test]
    fn test_rejected_payout_leaves_ledger_untouched() {
        let mut storage = MemoryLedger::new();
        let config = test_config(100);
        let mut engine = MockEngine::new();
        let mut funds = RejectingChannel;
        let ctx = RuntimeContext::new(addr(5));

        let result = issue_item(
            &mut storage,
            &config,
            &mut engine,
            &mut funds,
            &ctx,
            item_params(addr(6), 100),
        );

        assert_eq!(result, Err(LedgerError::PayoutFailed));
        assert_eq!(storage.id_counter(), 0);
        assert_eq!(storage.creator(1), None);
        assert_eq!(storage.owner(1), None);
        assert_eq!(storage.uri(1), None);
    }

    #[test]
    fn test_admin_only_policy() {
        let mut storage = MemoryLedger::new();
        let config = test_config(0).with_policy(IssuancePolicy::AdminOnly);
        let mut engine = MockEngine::new();
        let mut funds = RecordingChannel::new();

        let outsider = RuntimeContext::new(addr(5));
        let result = issue_item(
            &mut storage,
            &config,
            &mut engine,
            &mut funds,
            &outsider,
            item_params(addr(6), 0),
        );
        assert_eq!(result, Err(LedgerError::NotAuthorized));

        let admin = RuntimeContext::new(addr(1));
        issue_item(
            &mut storage,
            &config,
            &mut engine,
            &mut funds,
            &admin,
            item_params(addr(6), 0),
        )
        .expect("admin issue");
    }

    #[test]
    fn test_zero_recipient_rejected() {
        let mut storage = MemoryLedger::new();
        let config = test_config(0);
        let mut engine = MockEngine::new();
        let mut funds = RecordingChannel::new();
        let ctx = RuntimeContext::new(addr(5));

        let result = issue_item(
            &mut storage,
            &config,
            &mut engine,
            &mut funds,
            &ctx,
            item_params(Address::zero(), 0),
        );
        assert_eq!(result, Err(LedgerError::InvalidAddress));
    }

    #[test]
    fn test_uri_too_long_aborts_before_payout() {
        let mut storage = MemoryLedger::new();
        let config = test_config(100);
        let mut engine = MockEngine::new();
        let mut funds = RecordingChannel::new();
        let ctx = RuntimeContext::new(addr(5));

        let result = issue_item(
            &mut storage,
            &config,
            &mut engine,
            &mut funds,
            &ctx,
            IssueParams {
                to: addr(6),
                uri: "x".repeat(MAX_URI_LENGTH + 1),
                payment: 100,
            },
        );

        assert_eq!(result, Err(LedgerError::UriTooLong));
        assert_eq!(storage.id_counter(), 0);
        assert!(funds.payouts.is_empty());
    }

    #[test]
    fn test_issue_edition_success() {
        let mut storage = MemoryLedger::new();
        let config = test_config(100);
        let mut engine = MockEngine::new();
        let mut funds = RecordingChannel::new();
        let ctx = RuntimeContext::new(addr(5));

        let id = issue_edition(
            &mut storage,
            &config,
            &mut engine,
            &mut funds,
            &ctx,
            EditionIssueParams {
                to: addr(6),
                quantity: 25,
                uri: "ipfs://edition".to_string(),
                payment: 150,
            },
        )
        .expect("issue");

        assert_eq!(id, 1);
        assert_eq!(storage.creator(1), Some(addr(5)));
        assert_eq!(storage.minted_supply(1), 25);
        // Editions have no ledger-side owner
        assert_eq!(storage.owner(1), None);
        assert_eq!(engine.credits, vec![(addr(6), 1, 25)]);
        assert_eq!(funds.payouts, vec![(addr(2), 150)]);
    }

    #[test]
    fn test_issue_edition_zero_quantity() {
        let mut storage = MemoryLedger::new();
        let config = test_config(0);
        let mut engine = MockEngine::new();
        let mut funds = RecordingChannel::new();
        let ctx = RuntimeContext::new(addr(5));

        let result = issue_edition(
            &mut storage,
            &config,
            &mut engine,
            &mut funds,
            &ctx,
            EditionIssueParams {
                to: addr(6),
                quantity: 0,
                uri: String::new(),
                payment: 0,
            },
        );
        assert_eq!(result, Err(LedgerError::InvalidQuantity));
        assert_eq!(storage.id_counter(), 0);
    }

    #[test]
    fn test_allocator_contract() {
        let mut storage = MemoryLedger::new();
        assert_eq!(next_token_id(&storage), Ok(FIRST_TOKEN_ID));
        // Peeking does not mutate
        assert_eq!(next_token_id(&storage), Ok(FIRST_TOKEN_ID));

        assert_eq!(allocate_token_id(&mut storage), Ok(1));
        assert_eq!(allocate_token_id(&mut storage), Ok(2));
        assert_eq!(next_token_id(&storage), Ok(3));
    }

    #[test]
    fn test_allocator_overflow() {
        let mut storage = MemoryLedger::new();
        storage.set_id_counter(u64::MAX).expect("counter");
        assert_eq!(next_token_id(&storage), Err(LedgerError::Overflow));
        assert_eq!(allocate_token_id(&mut storage), Err(LedgerError::Overflow));
    }

    #[test]
    fn test_record_creation_rejects_double_write() {
        let mut storage = MemoryLedger::new();
        record_creation(&mut storage, 1, &addr(5), Some(&addr(6))).expect("first");
        assert_eq!(
            record_creation(&mut storage, 1, &addr(7), None),
            Err(LedgerError::TokenAlreadyExists)
        );
        assert_eq!(storage.creator(1), Some(addr(5)));
    }
}
