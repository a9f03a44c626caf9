//! Property-based tests for the mint path of the in-memory ledger.

use std::collections::HashSet;

use proptest::prelude::*;
use tokio_test::block_on;

use curio_core::{AccountId, ContentHash, Error, MAX_ROYALTY};
use curio_registry::{MemoryRegistry, Registry};

fn account(byte: u8) -> AccountId {
    AccountId::from_array([byte; 20])
}

/// Small key alphabet so generated sequences collide often.
fn hash_keys() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..8, 1..40)
}

proptest! {
    /// A mint succeeds exactly when the royalty is within the bound, and a
    /// successful mint records the royalty verbatim.
    #[test]
    fn mint_succeeds_iff_royalty_within_bound(royalty in any::<u8>()) {
        let registry = MemoryRegistry::new();
        let result = block_on(registry.mint(ContentHash::new("asset"), royalty, account(1)));

        prop_assert_eq!(result.is_ok(), royalty <= MAX_ROYALTY);
        if let Ok(id) = result {
            let item = block_on(registry.get_item(id)).unwrap();
            prop_assert_eq!(item.royalty, royalty);
            prop_assert_eq!(item.owner, item.creator);
        }
    }

    /// Replaying any sequence of hashes mints exactly one item per distinct
    /// hash, assigns dense sequential ids, and journals one notification
    /// per success.
    #[test]
    fn one_item_per_distinct_hash(keys in hash_keys()) {
        let registry = MemoryRegistry::new();
        let mut succeeded: u64 = 0;

        for (i, key) in keys.iter().enumerate() {
            let result = block_on(registry.mint(
                ContentHash::new(format!("asset-{key}")),
                1,
                account(i as u8),
            ));
            match result {
                Ok(id) => {
                    prop_assert_eq!(id, succeeded);
                    succeeded += 1;
                }
                Err(Error::DuplicateContent(_)) => {}
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
        }

        let distinct: HashSet<_> = keys.iter().collect();
        prop_assert_eq!(succeeded, distinct.len() as u64);
        prop_assert_eq!(block_on(registry.count()).unwrap(), succeeded);
        prop_assert_eq!(registry.event_count() as u64, succeeded);

        for (i, item) in registry.items().iter().enumerate() {
            prop_assert_eq!(item.id, i as u64);
        }
    }

    /// The membership probe agrees with mint outcomes: the first sighting
    /// of a hash mints, every later one is rejected as a duplicate.
    #[test]
    fn has_been_minted_tracks_commits(keys in hash_keys()) {
        let registry = MemoryRegistry::new();

        for key in &keys {
            let hash = ContentHash::new(format!("asset-{key}"));
            let seen_before = block_on(registry.has_been_minted(&hash)).unwrap();
            let result = block_on(registry.mint(hash.clone(), 1, account(*key)));

            prop_assert_eq!(result.is_ok(), !seen_before);
            prop_assert!(block_on(registry.has_been_minted(&hash)).unwrap());
        }
    }
}
