//! Group domain model.

use serde::{Deserialize, Serialize};

/// A named set of users.
///
/// Membership is stored by value: `users` holds member emails, not
/// owned links. An entry may outlive the user it points at; listings
/// resolve and drop such entries at read time while the stored list
/// stays as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    /// Member user references, encoded as emails. Duplicate-free,
    /// insertion-ordered.
    pub users: Vec<String>,
}

impl Group {
    /// A new group with no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            users: Vec::new(),
        }
    }
}

/// A group as returned from listings: the stored record plus the
/// member display names that still resolve against the Users
/// collection. Dangling references are absent from `member_names` but
/// remain in `group.users`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupListing {
    pub group: Group,
    /// Usernames of the members whose email still resolves.
    pub member_names: Vec<String>,
}
