// Ledger Operator Approval Overlay
// Two-tier authorization: the platform operator whitelist is consulted
// first and short-circuits to approved; only non-whitelisted operators
// fall back to the base layer's per-owner grant store.
//
// The whitelist is a true override, not an additional grant: an owner
// cannot revoke a whitelisted operator through the base mechanism. This
// is a deliberate trust elevation for zero-friction platform flows.

use crate::address::Address;
use crate::ledger::engine::TransferEngine;
use crate::ledger::platform::PlatformConfig;

/// Check whether an operator may act for every token an owner holds
pub fn is_approved_for_all<E: TransferEngine + ?Sized>(
    config: &PlatformConfig,
    engine: &E,
    owner: &Address,
    operator: &Address,
) -> bool {
    if config.is_operator(operator) {
        return true;
    }

    engine.stored_approval(owner, operator)
}
