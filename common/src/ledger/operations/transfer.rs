// Ledger Transfer Bookkeeping
// The transfer protocol itself lives in the base layer; after moving a
// unique item it calls back here so the provenance store tracks the new
// holder. The callback is trusted: authorization already happened inside
// the base layer's transfer path.

use log::trace;

use crate::ledger::engine::TransferEngine;
use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::types::TokenId;

use super::validation::validate_token_id;
use super::LedgerStorage;

/// Record the post-transfer holder of a unique item
///
/// Reads the authoritative holder from the base layer and stores it as
/// the item's owner. Fails with NonexistentToken when the ID was never
/// issued or the base layer no longer records a holder for it.
pub fn record_transfer<S, E>(storage: &mut S, engine: &E, id: TokenId) -> LedgerResult<()>
where
    S: LedgerStorage + ?Sized,
    E: TransferEngine + ?Sized,
{
    validate_token_id(id)?;

    if storage.creator(id).is_none() {
        return Err(LedgerError::NonexistentToken);
    }

    let holder = engine
        .current_owner(id)
        .ok_or(LedgerError::NonexistentToken)?;
    if holder.is_zero() {
        return Err(LedgerError::InvalidAddress);
    }

    storage.set_owner(id, &holder)?;
    trace!("item {id} now held by {holder}");
    Ok(())
}
