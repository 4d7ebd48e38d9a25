// Issuance Ledger - Platform Configuration
// Process-wide configuration: platform fee, fee recipient, operator
// whitelist slots and the administrator that may change them.
//
// Every mutator takes the caller's address and checks it against the
// administrator at the call boundary. There is no role hierarchy: one
// administrator per ledger instance, transferable by the current
// administrator only.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::address::{Address, Amount};

use super::error::{LedgerError, LedgerResult};
use super::types::{IssuancePolicy, OperatorRole};

/// Platform configuration owned by a ledger instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Administrator address
    admin: Address,

    /// Payment required per issuance
    platform_fee: Amount,

    /// Address every issuance payment is forwarded to
    fee_recipient: Address,

    /// Operator whitelist, one address per role slot
    operators: IndexMap<OperatorRole, Address>,

    /// Who may issue new tokens
    issuance_policy: IssuancePolicy,
}

impl PlatformConfig {
    /// Create a new configuration with an open issuance policy
    pub fn new(admin: Address, platform_fee: Amount, fee_recipient: Address) -> LedgerResult<Self> {
        if admin.is_zero() || fee_recipient.is_zero() {
            return Err(LedgerError::InvalidAddress);
        }
        Ok(Self {
            admin,
            platform_fee,
            fee_recipient,
            operators: IndexMap::new(),
            issuance_policy: IssuancePolicy::Open,
        })
    }

    /// Restrict issuance to the administrator
    pub fn with_policy(mut self, policy: IssuancePolicy) -> Self {
        self.issuance_policy = policy;
        self
    }

    // ========================================
    // Accessors
    // ========================================

    pub fn admin(&self) -> &Address {
        &self.admin
    }

    pub fn platform_fee(&self) -> Amount {
        self.platform_fee
    }

    pub fn fee_recipient(&self) -> &Address {
        &self.fee_recipient
    }

    pub fn issuance_policy(&self) -> IssuancePolicy {
        self.issuance_policy
    }

    /// Get the address occupying a role slot
    pub fn operator(&self, role: OperatorRole) -> Option<&Address> {
        self.operators.get(&role)
    }

    /// Check whether an address occupies any operator slot
    pub fn is_operator(&self, address: &Address) -> bool {
        self.operators.values().any(|op| op == address)
    }

    // ========================================
    // Authorization Checks
    // ========================================

    /// Fail with NotAuthorized unless the caller is the administrator
    pub fn require_admin(&self, caller: &Address) -> LedgerResult<()> {
        if *caller != self.admin {
            return Err(LedgerError::NotAuthorized);
        }
        Ok(())
    }

    /// Check whether the caller may issue under the current policy
    pub fn check_issuer(&self, caller: &Address) -> LedgerResult<()> {
        match self.issuance_policy {
            IssuancePolicy::Open => Ok(()),
            IssuancePolicy::AdminOnly => self.require_admin(caller),
        }
    }

    // ========================================
    // Administrator-Gated Mutations
    // ========================================

    /// Update the payment required per issuance
    pub fn set_platform_fee(&mut self, caller: &Address, fee: Amount) -> LedgerResult<()> {
        self.require_admin(caller)?;
        debug!("platform fee updated: {} -> {}", self.platform_fee, fee);
        self.platform_fee = fee;
        Ok(())
    }

    /// Update the address issuance payments are forwarded to
    pub fn set_fee_recipient(&mut self, caller: &Address, recipient: Address) -> LedgerResult<()> {
        self.require_admin(caller)?;
        if recipient.is_zero() {
            return Err(LedgerError::InvalidAddress);
        }
        debug!("fee recipient updated: {recipient}");
        self.fee_recipient = recipient;
        Ok(())
    }

    /// Assign an address to an operator role slot
    pub fn set_operator(
        &mut self,
        caller: &Address,
        role: OperatorRole,
        operator: Address,
    ) -> LedgerResult<()> {
        self.require_admin(caller)?;
        if operator.is_zero() {
            return Err(LedgerError::InvalidAddress);
        }
        debug!("operator slot {role:?} assigned to {operator}");
        self.operators.insert(role, operator);
        Ok(())
    }

    /// Hand the administrator capability to another address
    pub fn transfer_admin(&mut self, caller: &Address, new_admin: Address) -> LedgerResult<()> {
        self.require_admin(caller)?;
        if new_admin.is_zero() {
            return Err(LedgerError::InvalidAddress);
        }
        debug!("administrator transferred: {} -> {}", self.admin, new_admin);
        self.admin = new_admin;
        Ok(())
    }
}
