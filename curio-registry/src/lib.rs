//! # Curio Registry
//!
//! Item ledger storage for the Curio digital-collectible registry.
//!
//! This crate provides the in-process ledger backend:
//!
//! - **Memory**: Fast in-memory ledger for development, testing, and
//!   single-node services
//!
//! ## Example
//!
//! ```rust,ignore
//! use curio_registry::{MemoryRegistry, Registry};
//!
//! // Create an in-memory ledger
//! let registry = MemoryRegistry::new();
//!
//! // Mint an item for the caller
//! let id = registry.mint(content_hash.clone(), 5, caller).await?;
//!
//! // The hash is now taken
//! assert!(registry.has_been_minted(&content_hash).await?);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod memory;

pub use memory::MemoryRegistry;

// Re-export the trait from core
pub use curio_core::traits::CollectibleRegistry as Registry;
