//! # Curio Core
//!
//! Core types, errors, and traits for the Curio digital-collectible registry.
//!
//! This crate provides the foundational building blocks used by the other Curio crates:
//!
//! - **Types**: Domain models for accounts, content hashes, items, and events
//! - **Errors**: The registry's rejection and lookup error types
//! - **Constants**: Registry limits and defaults
//! - **Traits**: The ledger interface implemented by storage backends
//!
//! ## Example
//!
//! ```rust
//! use curio_core::{AccountId, ContentHash, Item};
//!
//! // Types are serializable and well-documented
//! let creator = AccountId::from_array([0xAB; 20]);
//! let item = Item::new(0, creator, 5, ContentHash::new("QmExample"));
//! assert_eq!(item.owner, item.creator);
//! let json = serde_json::to_string(&item).unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{Error, Result};
pub use traits::*;
pub use types::*;
