//! Registry for the `roles` collection and its two reference lists.

use cohort_core::error::{CohortError, CohortResult};
use cohort_core::membership::{self, Candidates};
use cohort_core::models::group::Group;
use cohort_core::models::role::{CreateRole, RefKind, Role};
use cohort_core::models::user::User;

use crate::store::{Store, collections};

/// Registry owning the Roles collection.
///
/// A role carries two independent reference lists selected by
/// [`RefKind`]: users (keyed by username) and groups (keyed by group
/// name). Candidate computations return the keys themselves, since the
/// key doubles as the display label. Listings return stored references
/// as-is, without resolving them; dangling entries stay visible until
/// explicitly removed.
#[derive(Clone)]
pub struct RoleRegistry<S: Store> {
    store: S,
}

impl<S: Store> RoleRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current roles in insertion order.
    pub fn list(&self) -> CohortResult<Vec<Role>> {
        Ok(self.store.load_collection(collections::ROLES)?)
    }

    /// Create a role with empty reference lists.
    pub fn create(&self, input: CreateRole) -> CohortResult<Role> {
        let name = input.name.trim();
        let description = input.description.trim();
        if name.is_empty() {
            return Err(CohortError::MissingField { field: "role name" });
        }
        if description.is_empty() {
            return Err(CohortError::MissingField {
                field: "description",
            });
        }

        let mut roles: Vec<Role> = self.store.load_collection(collections::ROLES)?;
        if roles.iter().any(|role| role.name == name) {
            return Err(CohortError::DuplicateName {
                name: name.to_string(),
            });
        }

        let role = Role::new(name, description);
        roles.push(role.clone());
        self.store.save_collection(collections::ROLES, &roles)?;
        Ok(role)
    }

    /// Delete a role.
    pub fn delete(&self, name: &str) -> CohortResult<()> {
        let mut roles: Vec<Role> = self.store.load_collection(collections::ROLES)?;
        let before = roles.len();
        roles.retain(|role| role.name != name);
        if roles.len() == before {
            return Err(not_found(name));
        }
        self.store.save_collection(collections::ROLES, &roles)?;
        Ok(())
    }

    /// Candidate keys of the given kind not yet referenced by the
    /// role. Empty means everything is already assigned.
    pub fn addable(&self, name: &str, kind: RefKind) -> CohortResult<Candidates<String>> {
        let role = self.get(name)?;
        let keys = self.candidate_keys(kind)?;
        let split = membership::partition(&keys, role.refs(kind), |key| key.as_str());
        Ok(Candidates::addable(
            split.addable.into_iter().cloned().collect(),
        ))
    }

    /// Candidate keys of the given kind currently referenced by the
    /// role. Dangling references match no candidate and never appear.
    pub fn removable(&self, name: &str, kind: RefKind) -> CohortResult<Candidates<String>> {
        let role = self.get(name)?;
        let keys = self.candidate_keys(kind)?;
        let split = membership::partition(&keys, role.refs(kind), |key| key.as_str());
        Ok(Candidates::removable(
            split.referenced.into_iter().cloned().collect(),
        ))
    }

    /// Union `refs` into the role's list of the given kind.
    /// Idempotent.
    pub fn assign(&self, name: &str, kind: RefKind, refs: &[String]) -> CohortResult<Role> {
        if refs.is_empty() {
            return Err(CohortError::EmptySelection {
                entity: kind.entity(),
            });
        }
        self.mutate_refs(name, kind, |existing| membership::union(existing, refs))
    }

    /// Subtract `refs` from the role's list of the given kind.
    pub fn remove(&self, name: &str, kind: RefKind, refs: &[String]) -> CohortResult<Role> {
        if refs.is_empty() {
            return Err(CohortError::EmptySelection {
                entity: kind.entity(),
            });
        }
        self.mutate_refs(name, kind, |existing| membership::subtract(existing, refs))
    }

    /// Reference keys of every stored entity of the given kind:
    /// usernames for users, names for groups.
    fn candidate_keys(&self, kind: RefKind) -> CohortResult<Vec<String>> {
        match kind {
            RefKind::Users => {
                let users: Vec<User> = self.store.load_collection(collections::USERS)?;
                Ok(users.into_iter().map(|user| user.username).collect())
            }
            RefKind::Groups => {
                let groups: Vec<Group> = self.store.load_collection(collections::GROUPS)?;
                Ok(groups.into_iter().map(|group| group.name).collect())
            }
        }
    }

    fn mutate_refs(
        &self,
        name: &str,
        kind: RefKind,
        apply: impl Fn(&[String]) -> Vec<String>,
    ) -> CohortResult<Role> {
        let mut roles: Vec<Role> = self.store.load_collection(collections::ROLES)?;
        let role = roles
            .iter_mut()
            .find(|role| role.name == name)
            .ok_or_else(|| not_found(name))?;
        let merged = apply(role.refs(kind));
        *role.refs_mut(kind) = merged;
        let updated = role.clone();
        self.store.save_collection(collections::ROLES, &roles)?;
        Ok(updated)
    }

    fn get(&self, name: &str) -> CohortResult<Role> {
        let roles: Vec<Role> = self.store.load_collection(collections::ROLES)?;
        roles
            .into_iter()
            .find(|role| role.name == name)
            .ok_or_else(|| not_found(name))
    }
}

fn not_found(name: &str) -> CohortError {
    CohortError::NotFound {
        entity: "role",
        key: name.to_string(),
    }
}
