//! # Curio Mint Walkthrough
//!
//! This example drives the in-memory ledger end to end: minting items,
//! hitting both rejection paths, and reading the notification journal.
//!
//! ## Run
//!
//! ```bash
//! cargo run --example mint_collection -p curio-registry
//! ```

use curio_core::types::{AccountId, ContentHash};
use curio_core::{Error, MAX_ROYALTY};
use curio_registry::{MemoryRegistry, Registry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("═══════════════════════════════════════════════════════════════════");
    println!("                  Curio: Collectible Mint Demo");
    println!("═══════════════════════════════════════════════════════════════════\n");

    let registry = MemoryRegistry::with_collection("Curio Originals", "CURIO");
    println!(
        "📦 Collection: {} ({})\n",
        registry.name(),
        registry.symbol()
    );

    let alice = AccountId::from_hex("0x1111111111111111111111111111111111111111")?;
    let bob = AccountId::from_hex("0x2222222222222222222222222222222222222222")?;

    // ═══════════════════════════════════════════════════════════════════════
    // STEP 1: MINT A FEW ITEMS
    // ═══════════════════════════════════════════════════════════════════════

    println!("📋 STEP 1: Alice and Bob mint their assets\n");

    let id0 = registry
        .mint(ContentHash::new("QmSunsetOverTheBay"), 5, alice)
        .await?;
    let id1 = registry
        .mint(ContentHash::new("QmMidnightSkyline"), 10, alice)
        .await?;
    let id2 = registry
        .mint(ContentHash::new("QmDesertBloom"), 0, bob)
        .await?;

    for id in [id0, id1, id2] {
        let item = registry.get_item(id).await?;
        println!(
            "   Minted #{} → owner {} royalty {}% hash {}",
            item.id, item.owner, item.royalty, item.content_hash
        );
    }
    println!();

    // ═══════════════════════════════════════════════════════════════════════
    // STEP 2: REJECTED MINTS
    // ═══════════════════════════════════════════════════════════════════════

    println!("📋 STEP 2: The ledger turns away bad mints\n");

    match registry
        .mint(ContentHash::new("QmSunsetOverTheBay"), 5, bob)
        .await
    {
        Err(Error::DuplicateContent(hash)) => {
            println!("   ✗ Bob cannot re-mint {hash}: already taken");
        }
        other => anyhow::bail!("expected a duplicate rejection, got {other:?}"),
    }

    match registry
        .mint(ContentHash::new("QmGreedyRoyalty"), MAX_ROYALTY + 1, bob)
        .await
    {
        Err(Error::InvalidRoyalty { royalty, max }) => {
            println!("   ✗ Royalty {royalty} refused: the ceiling is {max}");
        }
        other => anyhow::bail!("expected a royalty rejection, got {other:?}"),
    }
    println!();

    // ═══════════════════════════════════════════════════════════════════════
    // STEP 3: READ THE LEDGER AND THE JOURNAL
    // ═══════════════════════════════════════════════════════════════════════

    println!("📋 STEP 3: Ledger state after the dust settles\n");

    println!("   Items minted:  {}", registry.count().await?);
    println!("   Next id:       {}", registry.next_id().await?);
    println!(
        "   Hash taken:    {}",
        registry
            .has_been_minted(&ContentHash::new("QmDesertBloom"))
            .await?
    );

    println!("\n   Notification journal:");
    for event in registry.events() {
        println!(
            "   └─ {} token #{} → {}",
            event.event_type(),
            event.token_id(),
            match event {
                curio_core::RegistryEvent::Minted { to, .. } => to,
            }
        );
    }

    println!("\n✅ Demo complete");
    Ok(())
}
