// Ledger Burn Operations
// Retires a unique item. The allocator counter is untouched, so a burned
// ID is a tombstone and is never handed out again. Editions have no
// ledger-side burn: their balance bookkeeping is retired entirely inside
// the base layer, and creator, supply and URI stay queryable as
// historical records.

use log::debug;

use crate::ledger::engine::TransferEngine;
use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::platform::PlatformConfig;
use crate::ledger::types::TokenId;

use super::validation::validate_token_id;
use super::{check_token_authority, LedgerStorage, RuntimeContext};

/// Burn (destroy) a unique item
///
/// # Parameters
/// - `storage`: Ledger state backend
/// - `config`: Platform configuration (for the operator whitelist)
/// - `engine`: Base-layer transfer engine
/// - `ctx`: Runtime context (caller must be owner or approved)
///
/// # Returns
/// - `Ok(())`: Success
/// - `Err(LedgerError)`: Error code
pub fn burn_item<S, E>(
    storage: &mut S,
    config: &PlatformConfig,
    engine: &mut E,
    ctx: &RuntimeContext,
    id: TokenId,
) -> LedgerResult<()>
where
    S: LedgerStorage + ?Sized,
    E: TransferEngine + ?Sized,
{
    // Step 1: Input validation
    validate_token_id(id)?;
    if storage.creator(id).is_none() {
        return Err(LedgerError::NonexistentToken);
    }

    // Step 2: Permission check
    check_token_authority(storage, config, engine, id, &ctx.caller)?;

    // Step 3: Retire the base-layer balance bookkeeping first; a failure
    // here aborts with the ledger untouched
    engine.debit_and_clear(id)?;

    // Step 4: Clear the item's records; the ID stays retired
    storage.delete_owner(id)?;
    storage.delete_creator(id)?;
    storage.delete_uri(id)?;

    debug!("burned item {id} (caller {})", ctx.caller);
    Ok(())
}
