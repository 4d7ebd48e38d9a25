// Ledger Metadata Store
// Guarded URI writes. A URI is writable exactly once per token, and only
// while the token exists, so the write is the final metadata step of an
// issuance. The guard is the single place enforcing this ordering; call
// sites do not re-check existence.

use crate::ledger::error::{LedgerError, LedgerResult};
use crate::ledger::types::TokenId;

use super::{validation::validate_uri, LedgerStorage};

/// Record a token's metadata URI
///
/// Fails with NonexistentToken when no creator is recorded for the ID,
/// and with UriAlreadySet on a second write. The empty string is a valid
/// URI and is stored as such.
pub fn record_token_uri<S: LedgerStorage + ?Sized>(
    storage: &mut S,
    id: TokenId,
    uri: &str,
) -> LedgerResult<()> {
    validate_uri(uri)?;

    if storage.creator(id).is_none() {
        return Err(LedgerError::NonexistentToken);
    }
    if storage.uri(id).is_some() {
        return Err(LedgerError::UriAlreadySet);
    }

    storage.set_uri(id, uri)
}
