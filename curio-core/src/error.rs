//! Error types for Curio.
//!
//! The registry rejects inputs rather than repairing them: every variant here
//! is surfaced to the caller synchronously, none is retried internally, and a
//! failed operation leaves the ledger exactly as it was.

use thiserror::Error;

use crate::types::ContentHash;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for all registry operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Royalty above the accepted bound was supplied at mint time.
    #[error("royalty {royalty} exceeds the maximum of {max}")]
    InvalidRoyalty {
        /// The rejected royalty value.
        royalty: u8,
        /// The inclusive upper bound the registry enforces.
        max: u8,
    },

    /// The content hash has already been consumed by an earlier mint.
    #[error("content hash already minted: {0}")]
    DuplicateContent(ContentHash),

    /// A read referenced an item id the ledger has never issued.
    #[error("item id {id} out of range: {len} items minted")]
    IndexOutOfRange {
        /// The requested item id.
        id: u64,
        /// Number of items in the ledger at the time of the read.
        len: u64,
    },
}

impl Error {
    /// Returns true if this error rejected a mint request.
    ///
    /// Mint rejections can only be resolved by changing the input; read
    /// failures ([`Error::IndexOutOfRange`]) by querying an id that exists.
    pub fn is_mint_rejection(&self) -> bool {
        matches!(
            self,
            Error::InvalidRoyalty { .. } | Error::DuplicateContent(_)
        )
    }
}
