//! Core data types for the Curio registry.
//!
//! This module contains the fundamental types used throughout Curio:
//! - [`AccountId`]: identity of an account that creates and holds items
//! - [`ContentHash`]: opaque uniqueness key for the content behind an item
//! - [`Item`]: one minted collectible and its recorded metadata
//! - [`RegistryEvent`]: journal entry recorded for every successful mint

mod account;
mod event;
mod item;

pub use account::*;
pub use event::*;
pub use item::*;
