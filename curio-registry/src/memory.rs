//! In-memory collectible registry.
//!
//! Fast, thread-safe storage suitable for development, testing,
//! and single-process deployments.

use std::collections::HashSet;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use curio_core::constants::{DEFAULT_COLLECTION_NAME, DEFAULT_COLLECTION_SYMBOL, MAX_ROYALTY};
use curio_core::error::{Error, Result};
use curio_core::traits::CollectibleRegistry;
use curio_core::types::{AccountId, ContentHash, Item, RegistryEvent};

/// Everything a mint reads and writes, kept behind one lock so validation
/// and commit always observe the same state.
#[derive(Debug, Default)]
struct LedgerState {
    /// Item ledger, append-only; the item with id `i` sits at index `i`
    items: Vec<Item>,
    /// Content hashes already consumed by a mint
    minted: HashSet<ContentHash>,
    /// Id the next successful mint will assign; never reused
    next_id: u64,
    /// Mint notifications, exactly one per successful mint
    events: Vec<RegistryEvent>,
}

/// In-memory collectible registry.
///
/// # Ledger shape
///
/// Items are stored densely: ids are assigned sequentially from 0, so the
/// ledger length doubles as the next id and every id below the count
/// resolves to an item. Nothing is ever removed or rewritten.
///
/// # Thread Safety
///
/// All operations are thread-safe. A mint holds the write lock from
/// validation through commit, so two racing mints can never consume the
/// same content hash or the same id. Reads only see committed state.
#[derive(Debug)]
pub struct MemoryRegistry {
    /// Human-readable collection name
    name: String,
    /// Short collection symbol
    symbol: String,
    /// Ledger state guarded by a single lock
    state: RwLock<LedgerState>,
}

impl MemoryRegistry {
    /// Creates a new empty registry with the default collection identity.
    pub fn new() -> Self {
        Self::with_collection(DEFAULT_COLLECTION_NAME, DEFAULT_COLLECTION_SYMBOL)
    }

    /// Creates a new empty registry with the given name and symbol.
    pub fn with_collection(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            state: RwLock::new(LedgerState::default()),
        }
    }

    /// Creates a registry with preallocated capacity.
    ///
    /// Use this when you know the expected number of items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            name: DEFAULT_COLLECTION_NAME.into(),
            symbol: DEFAULT_COLLECTION_SYMBOL.into(),
            state: RwLock::new(LedgerState {
                items: Vec::with_capacity(capacity),
                minted: HashSet::with_capacity(capacity),
                next_id: 0,
                events: Vec::with_capacity(capacity),
            }),
        }
    }

    /// Returns the collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the collection symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the number of minted items.
    pub fn len(&self) -> usize {
        self.state.read().items.len()
    }

    /// Returns true if nothing has been minted yet.
    pub fn is_empty(&self) -> bool {
        self.state.read().items.is_empty()
    }

    /// Returns a snapshot of all items (for export/inspection).
    pub fn items(&self) -> Vec<Item> {
        self.state.read().items.clone()
    }

    /// Returns a snapshot of every mint notification recorded so far.
    ///
    /// Notifications sit in the journal in mint order; observers poll this
    /// instead of subscribing to a broadcast.
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.state.read().events.clone()
    }

    /// Returns the number of recorded mint notifications.
    pub fn event_count(&self) -> usize {
        self.state.read().events.len()
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CollectibleRegistry for MemoryRegistry {
    /// Mints a new item.
    ///
    /// The royalty bound is checked before the uniqueness guard; the first
    /// failure aborts with the ledger untouched. On success the item, its
    /// uniqueness key, and the mint notification commit together before the
    /// lock is released.
    #[instrument(skip(self, content_hash), fields(content_hash = %content_hash))]
    async fn mint(&self, content_hash: ContentHash, royalty: u8, caller: AccountId) -> Result<u64> {
        let mut state = self.state.write();

        // Validate
        if royalty > MAX_ROYALTY {
            return Err(Error::InvalidRoyalty {
                royalty,
                max: MAX_ROYALTY,
            });
        }
        if state.minted.contains(&content_hash) {
            return Err(Error::DuplicateContent(content_hash));
        }

        // Assign ID
        let id = state.next_id;

        debug!(id, royalty, owner = %caller, "Minting item");

        // Commit
        state.minted.insert(content_hash.clone());
        state.items.push(Item::new(id, caller, royalty, content_hash));
        state.next_id += 1;

        // Record the notification
        state.events.push(RegistryEvent::minted(caller, id));

        Ok(id)
    }

    /// Checks the uniqueness guard without touching it.
    #[instrument(skip(self, content_hash), fields(content_hash = %content_hash))]
    async fn has_been_minted(&self, content_hash: &ContentHash) -> Result<bool> {
        Ok(self.state.read().minted.contains(content_hash))
    }

    /// Returns the total item count.
    async fn count(&self) -> Result<u64> {
        Ok(self.state.read().items.len() as u64)
    }

    /// Retrieves a specific item by id.
    #[instrument(skip(self))]
    async fn get_item(&self, id: u64) -> Result<Item> {
        let state = self.state.read();
        let len = state.items.len() as u64;
        if id >= len {
            return Err(Error::IndexOutOfRange { id, len });
        }
        Ok(state.items[id as usize].clone())
    }

    /// Returns the id the next successful mint will assign.
    async fn next_id(&self) -> Result<u64> {
        Ok(self.state.read().next_id)
    }
}
