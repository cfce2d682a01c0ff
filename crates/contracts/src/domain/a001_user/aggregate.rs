use crate::aggregate_id;
use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

aggregate_id!(
    /// Unique user identifier
    UserId
);

// ============================================================================
// Aggregate Root
// ============================================================================

pub const NAME_MAX: usize = 64;

/// A household member. Users have a name and no password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    /// Login names are stored as the lower-cased first word
    ///
    /// Returns `None` for a blank name.
    pub fn normalize_name(raw: &str) -> Option<String> {
        raw.split_whitespace()
            .next()
            .map(|word| word.to_lowercase())
            .map(|word| word.chars().take(NAME_MAX).collect())
    }
}

impl AggregateRoot for User {
    type Id = UserId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "user"
    }

    fn element_name() -> &'static str {
        "user"
    }

    fn list_name() -> &'static str {
        "users"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(User::normalize_name("Alice Smith"), Some("alice".into()));
        assert_eq!(User::normalize_name("  BOB  "), Some("bob".into()));
        assert_eq!(User::normalize_name("   "), None);
        assert_eq!(User::normalize_name(""), None);
    }
}
