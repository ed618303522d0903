//! Member and group models
//!
//! A member is the identity a balance, an attribution edge or a settlement
//! transaction is rendered with.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{GroupId, MemberId};

/// Display name used when an id cannot be resolved against the member list
pub const UNKNOWN_MEMBER_NAME: &str = "Unknown";

/// Contact label used when an id cannot be resolved against the member list
pub const UNKNOWN_MEMBER_EMAIL: &str = "unknown@example.com";

/// A member of an expense group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Member {
    /// Create a new member with a fresh id
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Create a member with a known id
    pub fn with_id(id: MemberId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Placeholder identity for an id that is absent from the member list
    pub fn unknown(id: MemberId) -> Self {
        Self::with_id(id, UNKNOWN_MEMBER_NAME, UNKNOWN_MEMBER_EMAIL)
    }

    /// Whether this is a placeholder produced by [`Member::unknown`]
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_MEMBER_NAME && self.email == UNKNOWN_MEMBER_EMAIL
    }

    /// Resolve `id` against `members`, falling back to the placeholder
    pub fn resolve(members: &[Member], id: MemberId) -> Member {
        members
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .unwrap_or_else(|| {
                tracing::warn!(member = %id, "member missing from group, using placeholder");
                Member::unknown(id)
            })
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The group an expense snapshot belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(),
            name: name.into(),
            description: String::new(),
        }
    }
}
