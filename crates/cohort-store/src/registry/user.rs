//! Registry for the `users` collection.

use cohort_core::error::{CohortError, CohortResult};
use cohort_core::models::user::{CreateUser, User};

use crate::store::{Store, collections};

/// Registry owning the Users collection.
///
/// Assigns sequential 1-based ids and renumbers on delete so the
/// sequence stays contiguous. Uniqueness of username and email is
/// case-sensitive and, on update, excludes the record being edited.
#[derive(Clone)]
pub struct UserRegistry<S: Store> {
    store: S,
}

impl<S: Store> UserRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current users in insertion order.
    pub fn list(&self) -> CohortResult<Vec<User>> {
        Ok(self.store.load_collection(collections::USERS)?)
    }

    /// Create a user with the next sequential id.
    pub fn create(&self, input: CreateUser) -> CohortResult<User> {
        let input = trimmed(input);
        validate_required(&input)?;

        let mut users: Vec<User> = self.store.load_collection(collections::USERS)?;
        check_unique(&users, &input, None)?;

        let user = User {
            id: users.len() as u32 + 1,
            username: input.username,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
        };
        users.push(user.clone());
        self.store.save_collection(collections::USERS, &users)?;
        Ok(user)
    }

    /// Replace the user with the given id. The id is preserved;
    /// duplicate checks skip the record being edited.
    pub fn update(&self, id: u32, input: CreateUser) -> CohortResult<User> {
        let input = trimmed(input);
        validate_required(&input)?;

        let mut users: Vec<User> = self.store.load_collection(collections::USERS)?;
        check_unique(&users, &input, Some(id))?;

        let slot = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| not_found(id))?;
        *slot = User {
            id,
            username: input.username,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
        };
        let updated = slot.clone();
        self.store.save_collection(collections::USERS, &users)?;
        Ok(updated)
    }

    /// Delete a user and renumber the remainder to keep ids
    /// contiguous from 1. Group and role references to the deleted
    /// user are left in place and go dangling.
    pub fn delete(&self, id: u32) -> CohortResult<()> {
        let mut users: Vec<User> = self.store.load_collection(collections::USERS)?;
        let before = users.len();
        users.retain(|user| user.id != id);
        if users.len() == before {
            return Err(not_found(id));
        }
        // Each remaining user takes its 1-based position.
        for (index, user) in users.iter_mut().enumerate() {
            user.id = index as u32 + 1;
        }
        self.store.save_collection(collections::USERS, &users)?;
        Ok(())
    }
}

fn trimmed(input: CreateUser) -> CreateUser {
    CreateUser {
        username: input.username.trim().to_string(),
        email: input.email.trim().to_string(),
        first_name: input.first_name.trim().to_string(),
        last_name: input.last_name.trim().to_string(),
    }
}

fn validate_required(input: &CreateUser) -> CohortResult<()> {
    if input.username.is_empty() {
        return Err(CohortError::MissingField { field: "username" });
    }
    if input.email.is_empty() {
        return Err(CohortError::MissingField { field: "email" });
    }
    if input.first_name.is_empty() {
        return Err(CohortError::MissingField { field: "first name" });
    }
    if input.last_name.is_empty() {
        return Err(CohortError::MissingField { field: "last name" });
    }
    Ok(())
}

/// Case-sensitive uniqueness of email and username, skipping
/// `exclude_id` so an update can keep the record's own values.
fn check_unique(users: &[User], input: &CreateUser, exclude_id: Option<u32>) -> CohortResult<()> {
    let is_other = |user: &&User| Some(user.id) != exclude_id;
    if users.iter().filter(is_other).any(|u| u.email == input.email) {
        return Err(CohortError::DuplicateEmail {
            email: input.email.clone(),
        });
    }
    if users
        .iter()
        .filter(is_other)
        .any(|u| u.username == input.username)
    {
        return Err(CohortError::DuplicateUsername {
            username: input.username.clone(),
        });
    }
    Ok(())
}

fn not_found(id: u32) -> CohortError {
    CohortError::NotFound {
        entity: "user",
        key: id.to_string(),
    }
}
