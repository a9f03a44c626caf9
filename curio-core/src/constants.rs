//! Protocol constants for Curio.
//!
//! These bounds come from the registry's minting rules and are enforced at
//! mint time; changing them changes which items the registry accepts.

// ═══════════════════════════════════════════════════════════════════════════════
// MINTING RULES
// ═══════════════════════════════════════════════════════════════════════════════

/// Highest royalty value accepted at mint time (inclusive).
///
/// The registry stores the value verbatim and attaches no unit to it;
/// the bound itself is the entire rule.
pub const MAX_ROYALTY: u8 = 40;

// ═══════════════════════════════════════════════════════════════════════════════
// IDENTITY
// ═══════════════════════════════════════════════════════════════════════════════

/// Size of an account identity in bytes (20 bytes = 160 bits).
pub const ACCOUNT_ID_SIZE: usize = 20;

// ═══════════════════════════════════════════════════════════════════════════════
// COLLECTION DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default human-readable name of a collection.
pub const DEFAULT_COLLECTION_NAME: &str = "NFTCollectible";

/// Default ticker-style symbol of a collection.
pub const DEFAULT_COLLECTION_SYMBOL: &str = "NFTC";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_royalty_bound_is_inclusive_forty() {
        assert_eq!(MAX_ROYALTY, 40);
    }

    #[test]
    fn test_collection_defaults_nonempty() {
        assert!(!DEFAULT_COLLECTION_NAME.is_empty());
        assert!(!DEFAULT_COLLECTION_SYMBOL.is_empty());
    }
}
