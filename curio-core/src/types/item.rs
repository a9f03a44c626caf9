//! Collectible item types.

use serde::{Deserialize, Serialize};

use crate::types::AccountId;

/// Opaque identifier of the content behind an item, e.g. an IPFS CID or a
/// digest of the asset bytes.
///
/// The registry uses the hash verbatim as the uniqueness key for minting:
/// two items can never share one. It is never parsed, normalized, or
/// validated, so `"abc"` and `"ABC"` are distinct keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(String);

impl ContentHash {
    /// Creates a content hash from its string form.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Returns the hash as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the hash, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One minted collectible.
///
/// Items are created exclusively by a successful mint and never change or
/// disappear afterwards. The registry hands out clones, so holding an `Item`
/// never blocks the ledger.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    /// Sequential identifier, equal to the item's position in the ledger
    pub id: u64,
    /// Current holder of the item
    pub owner: AccountId,
    /// Account that minted the item
    pub creator: AccountId,
    /// Royalty recorded at mint time, at most `MAX_ROYALTY`
    pub royalty: u8,
    /// Content hash of the underlying asset, unique across all items
    pub content_hash: ContentHash,
}

impl Item {
    /// Creates the item minted by `creator` under `id`.
    ///
    /// A freshly minted item is held by its creator.
    pub fn new(id: u64, creator: AccountId, royalty: u8, content_hash: ContentHash) -> Self {
        Self {
            id,
            owner: creator,
            creator,
            royalty,
            content_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ACCOUNT_ID_SIZE;

    #[test]
    fn test_content_hash_is_opaque() {
        let lower = ContentHash::new("qmabc");
        let upper = ContentHash::new("QMABC");
        assert_ne!(lower, upper);
        assert_eq!(lower.as_str(), "qmabc");
        assert_eq!(upper.to_string(), "QMABC");
    }

    #[test]
    fn test_content_hash_serializes_as_bare_string() {
        let hash = ContentHash::new("Qm123");
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, "\"Qm123\"");

        let back: ContentHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }

    #[test]
    fn test_new_item_is_held_by_its_creator() {
        let creator = AccountId::from_array([7; ACCOUNT_ID_SIZE]);
        let item = Item::new(3, creator, 10, ContentHash::new("Qm123"));

        assert_eq!(item.id, 3);
        assert_eq!(item.owner, creator);
        assert_eq!(item.creator, creator);
        assert_eq!(item.royalty, 10);
        assert_eq!(item.content_hash.as_str(), "Qm123");
    }

    #[test]
    fn test_item_json_roundtrip() {
        let creator = AccountId::from_array([9; ACCOUNT_ID_SIZE]);
        let item = Item::new(0, creator, 40, ContentHash::new("Qm456"));

        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, item.id);
        assert_eq!(back.owner, item.owner);
        assert_eq!(back.creator, item.creator);
        assert_eq!(back.royalty, item.royalty);
        assert_eq!(back.content_hash, item.content_hash);
    }
}
