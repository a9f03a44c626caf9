//! Registry events.
//!
//! Every successful mint records exactly one event in the ledger's journal.
//! Observers read the journal instead of subscribing to a broadcast, so a
//! notification is never lost to a missing listener.

use serde::{Deserialize, Serialize};

use crate::types::AccountId;

/// Ledger events recorded by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// A new item was minted
    Minted {
        /// Sender side of the notification; always the zero identity,
        /// marking creation rather than a change of hands
        from: AccountId,
        /// The minting account that received the item
        to: AccountId,
        /// Identifier assigned to the item
        token_id: u64,
    },
}

impl RegistryEvent {
    /// Builds the notification for a freshly minted item.
    pub fn minted(to: AccountId, token_id: u64) -> Self {
        Self::Minted {
            from: AccountId::zero(),
            to,
            token_id,
        }
    }

    /// Get the token id this event refers to.
    pub fn token_id(&self) -> u64 {
        match self {
            RegistryEvent::Minted { token_id, .. } => *token_id,
        }
    }

    /// Get event type name.
    pub fn event_type(&self) -> &'static str {
        match self {
            RegistryEvent::Minted { .. } => "minted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ACCOUNT_ID_SIZE;

    #[test]
    fn test_minted_event_comes_from_zero_identity() {
        let to = AccountId::from_array([5; ACCOUNT_ID_SIZE]);
        let event = RegistryEvent::minted(to, 7);

        let RegistryEvent::Minted {
            from,
            to: recipient,
            token_id,
        } = event;
        assert!(from.is_zero());
        assert_eq!(recipient, to);
        assert_eq!(token_id, 7);
    }

    #[test]
    fn test_event_accessors() {
        let event = RegistryEvent::minted(AccountId::from_array([1; ACCOUNT_ID_SIZE]), 42);
        assert_eq!(event.token_id(), 42);
        assert_eq!(event.event_type(), "minted");
    }

    #[test]
    fn test_event_json_shape() {
        let to = AccountId::from_array([2; ACCOUNT_ID_SIZE]);
        let event = RegistryEvent::minted(to, 3);

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["Minted"]["token_id"], 3);
        assert_eq!(
            value["Minted"]["from"],
            serde_json::to_value(AccountId::zero()).unwrap()
        );
        assert_eq!(value["Minted"]["to"], serde_json::to_value(to).unwrap());
    }
}
