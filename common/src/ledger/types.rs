// Issuance Ledger - Core Types
// This module defines the data structures shared by both ledger variants.

use serde::{Deserialize, Serialize};

// ========================================
// Protocol Constants
// ========================================

/// Maximum metadata URI length (bytes)
pub const MAX_URI_LENGTH: usize = 512;

/// First token ID handed out by the allocator (0 is the reserved sentinel)
pub const FIRST_TOKEN_ID: TokenId = 1;

// ========================================
// Token Identity
// ========================================

/// Token identifier
///
/// Allocated as a strictly increasing sequence starting at 1. The value 0
/// never denotes a real token. An allocated ID is never reused, even after
/// the token it named has been burned.
pub type TokenId = u64;

// ========================================
// Operator Roles
// ========================================

/// Platform operator roles
///
/// The whitelist has fixed cardinality: one slot per collaborating
/// platform contract. An address occupying any slot is implicitly approved
/// to move every holder's tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorRole {
    /// Auction house contract
    Auction,
    /// Fixed-price marketplace contract
    Marketplace,
    /// Bundle marketplace contract
    BundleMarketplace,
}

impl OperatorRole {
    /// All assignable roles
    pub const ALL: [OperatorRole; 3] = [
        OperatorRole::Auction,
        OperatorRole::Marketplace,
        OperatorRole::BundleMarketplace,
    ];
}

// ========================================
// Issuance Policy
// ========================================

/// Controls who may issue new tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssuancePolicy {
    /// Anyone may issue, subject to the platform fee
    #[default]
    Open,

    /// Only the platform administrator may issue
    AdminOnly,
}
