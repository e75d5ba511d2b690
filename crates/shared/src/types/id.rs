//! Typed IDs for ledger entries and ratio definitions.
//!
//! A `RatioId` can never be passed where a `LedgerEntryId` is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh time-ordered (v7) ID.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// The underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            /// Accepts any UUID text form; surrounding whitespace from config
            /// files is ignored.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim()).map(Self)
            }
        }
    };
}

typed_id! {
    /// Identifies a ledger entry; kept across edits in the store.
    LedgerEntryId
}

typed_id! {
    /// Identifies a ratio definition; stable when set in configuration.
    RatioId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_conversions() {
        let uuid = Uuid::new_v4();
        let id = LedgerEntryId::from(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(Uuid::from(id), uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn test_new_ids_are_unique_v7() {
        let first = RatioId::new();
        let second = RatioId::new();
        assert_ne!(first, second);
        assert_eq!(first.as_uuid().get_version_num(), 7);
    }

    #[test]
    fn test_from_str() {
        let uuid = Uuid::new_v4();
        let id: RatioId = format!("  {uuid}\n").parse().unwrap();
        assert_eq!(id.as_uuid(), &uuid);
        assert!("not-a-uuid".parse::<RatioId>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_uuid() {
        let uuid = Uuid::new_v4();
        let json = serde_json::to_string(&LedgerEntryId::from(uuid)).unwrap();
        assert_eq!(json, format!("\"{uuid}\""));
        let back: LedgerEntryId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_uuid(), &uuid);
    }
}
