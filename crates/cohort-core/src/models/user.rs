//! User domain model.

use serde::{Deserialize, Serialize};

/// A directory user.
///
/// `id` is the user's 1-based position in the collection. The sequence
/// stays contiguous: deleting a user renumbers everyone behind it, so
/// ids are not stable across deletions. Groups and roles therefore key
/// users by email or username instead of by id, and those references
/// may dangle after a delete (listings resolve them defensively).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Input for creating a user, and for updating one (the update is a
/// full-record replacement; only the id survives). Every field is
/// required; the registry trims surrounding whitespace before
/// validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}
