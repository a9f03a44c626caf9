//! Common traits for Curio components.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{AccountId, ContentHash, Item};

/// Interface for collectible item ledgers.
///
/// Implementations might keep the ledger:
/// - In process memory (testing, development, single-node services)
/// - In an embedded or remote database
/// - Behind an on-chain contract binding
#[async_trait]
pub trait CollectibleRegistry: Send + Sync {
    /// Mint a new item for `caller` under the given content hash.
    ///
    /// Returns the id assigned to the item. Fails with `Error::InvalidRoyalty`
    /// when `royalty` exceeds `MAX_ROYALTY`, and otherwise with
    /// `Error::DuplicateContent` when the hash has already been minted.
    /// A failed mint leaves the ledger untouched.
    async fn mint(&self, content_hash: ContentHash, royalty: u8, caller: AccountId)
        -> Result<u64>;

    /// Check whether `content_hash` has already been consumed by a mint
    async fn has_been_minted(&self, content_hash: &ContentHash) -> Result<bool>;

    /// Get the total number of minted items
    async fn count(&self) -> Result<u64>;

    /// Retrieve the item stored under `id`.
    ///
    /// Fails with `Error::IndexOutOfRange` when no such item exists.
    async fn get_item(&self, id: u64) -> Result<Item>;

    /// Get the id the next successful mint will assign
    async fn next_id(&self) -> Result<u64>;
}
