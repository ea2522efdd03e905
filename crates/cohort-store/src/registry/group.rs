//! Registry for the `groups` collection and its email-keyed
//! membership lists.

use cohort_core::error::{CohortError, CohortResult};
use cohort_core::membership::{self, Candidates};
use cohort_core::models::group::{Group, GroupListing};
use cohort_core::models::user::User;

use crate::store::{Store, collections};

/// Registry owning the Groups collection.
///
/// Member references are user emails, stored by value. The registry
/// never checks a reference against the Users collection when storing
/// it; resolution happens at listing time, where dangling entries are
/// dropped from the view but kept in storage.
#[derive(Clone)]
pub struct GroupRegistry<S: Store> {
    store: S,
}

impl<S: Store> GroupRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Groups in insertion order, each with the member display names
    /// that still resolve against the Users collection.
    pub fn list(&self) -> CohortResult<Vec<GroupListing>> {
        let groups: Vec<Group> = self.store.load_collection(collections::GROUPS)?;
        let users: Vec<User> = self.store.load_collection(collections::USERS)?;
        Ok(groups
            .into_iter()
            .map(|group| {
                let member_names = membership::resolve_member_names(&group.users, &users);
                GroupListing {
                    group,
                    member_names,
                }
            })
            .collect())
    }

    /// Create a group with no members.
    pub fn create(&self, name: &str) -> CohortResult<Group> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CohortError::MissingField {
                field: "group name",
            });
        }

        let mut groups: Vec<Group> = self.store.load_collection(collections::GROUPS)?;
        if groups.iter().any(|group| group.name == name) {
            return Err(CohortError::DuplicateName {
                name: name.to_string(),
            });
        }

        let group = Group::new(name);
        groups.push(group.clone());
        self.store.save_collection(collections::GROUPS, &groups)?;
        Ok(group)
    }

    /// Delete a group. Role references to it are left in place.
    pub fn delete(&self, name: &str) -> CohortResult<()> {
        let mut groups: Vec<Group> = self.store.load_collection(collections::GROUPS)?;
        let before = groups.len();
        groups.retain(|group| group.name != name);
        if groups.len() == before {
            return Err(not_found(name));
        }
        self.store.save_collection(collections::GROUPS, &groups)?;
        Ok(())
    }

    /// Users not yet referenced by the group. Empty means every user
    /// is already a member, or there are no users at all.
    pub fn addable_users(&self, name: &str) -> CohortResult<Candidates<User>> {
        let group = self.get(name)?;
        let users: Vec<User> = self.store.load_collection(collections::USERS)?;
        let split = membership::partition(&users, &group.users, |user| user.email.as_str());
        Ok(Candidates::addable(
            split.addable.into_iter().cloned().collect(),
        ))
    }

    /// Users currently referenced by the group. Dangling references
    /// resolve to no user and never appear here.
    pub fn removable_users(&self, name: &str) -> CohortResult<Candidates<User>> {
        let group = self.get(name)?;
        let users: Vec<User> = self.store.load_collection(collections::USERS)?;
        let split = membership::partition(&users, &group.users, |user| user.email.as_str());
        Ok(Candidates::removable(
            split.referenced.into_iter().cloned().collect(),
        ))
    }

    /// Union `emails` into the group's member list. Idempotent.
    pub fn add_members(&self, name: &str, emails: &[String]) -> CohortResult<Group> {
        if emails.is_empty() {
            return Err(CohortError::EmptySelection { entity: "user" });
        }
        self.mutate_members(name, |members| membership::union(members, emails))
    }

    /// Subtract `emails` from the group's member list.
    pub fn remove_members(&self, name: &str, emails: &[String]) -> CohortResult<Group> {
        if emails.is_empty() {
            return Err(CohortError::EmptySelection { entity: "user" });
        }
        self.mutate_members(name, |members| membership::subtract(members, emails))
    }

    fn mutate_members(
        &self,
        name: &str,
        apply: impl Fn(&[String]) -> Vec<String>,
    ) -> CohortResult<Group> {
        let mut groups: Vec<Group> = self.store.load_collection(collections::GROUPS)?;
        let group = groups
            .iter_mut()
            .find(|group| group.name == name)
            .ok_or_else(|| not_found(name))?;
        group.users = apply(&group.users);
        let updated = group.clone();
        self.store.save_collection(collections::GROUPS, &groups)?;
        Ok(updated)
    }

    fn get(&self, name: &str) -> CohortResult<Group> {
        let groups: Vec<Group> = self.store.load_collection(collections::GROUPS)?;
        groups
            .into_iter()
            .find(|group| group.name == name)
            .ok_or_else(|| not_found(name))
    }
}

fn not_found(name: &str) -> CohortError {
    CohortError::NotFound {
        entity: "group",
        key: name.to_string(),
    }
}
