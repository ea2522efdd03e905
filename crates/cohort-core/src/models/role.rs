//! Role domain model.

use serde::{Deserialize, Serialize};

/// A labeled role with two independent member-reference lists.
///
/// User references are encoded as usernames while [`Group`] membership
/// is keyed by email. The mismatch is part of the persisted layout and
/// is kept so existing data stays readable; each registry owns one
/// encoding and never mixes them.
///
/// [`Group`]: crate::models::group::Group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    pub description: String,
    /// Member user references, encoded as usernames.
    pub users: Vec<String>,
    /// Member group references, encoded as group names.
    pub groups: Vec<String>,
}

impl Role {
    /// A new role with empty reference lists.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            users: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// The reference list selected by `kind`.
    pub fn refs(&self, kind: RefKind) -> &[String] {
        match kind {
            RefKind::Users => &self.users,
            RefKind::Groups => &self.groups,
        }
    }

    /// Mutable access to the reference list selected by `kind`.
    pub fn refs_mut(&mut self, kind: RefKind) -> &mut Vec<String> {
        match kind {
            RefKind::Users => &mut self.users,
            RefKind::Groups => &mut self.groups,
        }
    }
}

/// Selects which of a role's two reference lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Users,
    Groups,
}

impl RefKind {
    /// Singular entity label for error context.
    pub fn entity(self) -> &'static str {
        match self {
            RefKind::Users => "user",
            RefKind::Groups => "group",
        }
    }
}

/// Input for creating a role. Both fields are required; the registry
/// trims surrounding whitespace before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRole {
    pub name: String,
    pub description: String,
}
