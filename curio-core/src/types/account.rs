//! Account identity for Curio.
//!
//! An [`AccountId`] names the holder or creator of an item. The registry
//! treats identities as opaque values supplied by the calling environment;
//! it never derives, verifies, or interprets them.

use serde::{Deserialize, Serialize};

use crate::constants::ACCOUNT_ID_SIZE;

/// Identity of an account that can create and hold items.
///
/// A plain 20-byte value. The zero identity is reserved: it never mints, and
/// mint notifications use it as the `from` side to signal token creation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId {
    bytes: [u8; ACCOUNT_ID_SIZE],
}

impl AccountId {
    /// Creates an identity from a fixed-size array.
    pub fn from_array(bytes: [u8; ACCOUNT_ID_SIZE]) -> Self {
        Self { bytes }
    }

    /// Parses from hex string (with or without 0x prefix).
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; ACCOUNT_ID_SIZE];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self { bytes })
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns hex string with 0x prefix.
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }

    /// Returns the zero identity.
    pub fn zero() -> Self {
        Self {
            bytes: [0u8; ACCOUNT_ID_SIZE],
        }
    }

    /// Returns true if this is the zero identity.
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }
}

impl std::fmt::Debug for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccountId({})", self.to_hex_string())
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}
