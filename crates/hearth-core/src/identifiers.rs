//! Identifier types used across Hearth
//!
//! Identifiers are opaque strings assigned by the persistence layer (document
//! store object ids, UUIDs for freshly minted entities). They are compared by
//! value only; the core never parses them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_identifier {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Mint a fresh random identifier
            pub fn generate() -> Self {
                Self(format!("{}-{}", $prefix, Uuid::new_v4()))
            }

            /// Get the underlying string
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume into the underlying string
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_identifier!(
    /// Community that owns members, properties and tickets
    CommunityId,
    "community"
);
string_identifier!(
    /// Membership of an end user in one community
    MemberId,
    "member"
);
string_identifier!(
    /// Authenticated end user (may hold several memberships)
    EndUserId,
    "end-user"
);
string_identifier!(
    /// Platform staff account
    StaffUserId,
    "staff-user"
);
string_identifier!(
    /// Role (end-user role or staff role)
    RoleId,
    "role"
);
string_identifier!(
    /// Property inside a community
    PropertyId,
    "property"
);
string_identifier!(
    /// Service offered within a community
    ServiceId,
    "service"
);
string_identifier!(
    /// Ticket aggregate identity
    TicketId,
    "ticket"
);
string_identifier!(
    /// Identity of a child entity owned by an aggregate
    EntityId,
    "entity"
);
