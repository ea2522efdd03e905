//! Membership rules shared by the group and role registries.
//!
//! Reference lists are stored as insertion-ordered `Vec<String>` with
//! set semantics: no duplicates, union appends unseen entries in input
//! order, difference keeps survivors in place. Presence checks go
//! through a `HashSet` so the no-duplicates invariant holds for every
//! input order.

use std::collections::HashSet;

use crate::models::user::User;

/// Outcome of an addable/removable candidate computation.
///
/// The empty cases are informational, not errors: the operation simply
/// has nothing valid to do, and the caller reports that instead of a
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidates<T> {
    /// At least one candidate to act on.
    Available(Vec<T>),
    /// Every candidate is already referenced; nothing left to add.
    AllAlreadyAssigned,
    /// No candidate is currently referenced; nothing to remove.
    NothingToRemove,
}

impl<T> Candidates<T> {
    /// Wrap an addable-candidates list, mapping empty to
    /// [`Candidates::AllAlreadyAssigned`].
    pub fn addable(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::AllAlreadyAssigned
        } else {
            Self::Available(items)
        }
    }

    /// Wrap a removable-candidates list, mapping empty to
    /// [`Candidates::NothingToRemove`].
    pub fn removable(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::NothingToRemove
        } else {
            Self::Available(items)
        }
    }
}

/// Split of a candidate collection against an existing reference list.
#[derive(Debug)]
pub struct Partition<'a, T> {
    /// Candidates whose key already appears in the reference list.
    pub referenced: Vec<&'a T>,
    /// Candidates not yet referenced.
    pub addable: Vec<&'a T>,
}

/// Partition `candidates` by whether their key is present in `refs`.
///
/// `key` supplies the reference encoding for the entity kind at hand:
/// email for users-in-groups, username for users-in-roles, name for
/// groups-in-roles.
pub fn partition<'a, T, K>(candidates: &'a [T], refs: &[String], key: K) -> Partition<'a, T>
where
    K: Fn(&T) -> &str,
{
    let present: HashSet<&str> = refs.iter().map(String::as_str).collect();
    let mut split = Partition {
        referenced: Vec::new(),
        addable: Vec::new(),
    };
    for candidate in candidates {
        if present.contains(key(candidate)) {
            split.referenced.push(candidate);
        } else {
            split.addable.push(candidate);
        }
    }
    split
}

/// Union of two reference lists, first-seen order, duplicates dropped.
pub fn union(existing: &[String], additions: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(existing.len() + additions.len());
    let mut merged = Vec::with_capacity(existing.len() + additions.len());
    for entry in existing.iter().chain(additions) {
        if seen.insert(entry.as_str()) {
            merged.push(entry.clone());
        }
    }
    merged
}

/// `existing` minus `removals`, survivors kept in their original order.
pub fn subtract(existing: &[String], removals: &[String]) -> Vec<String> {
    let removals: HashSet<&str> = removals.iter().map(String::as_str).collect();
    existing
        .iter()
        .filter(|entry| !removals.contains(entry.as_str()))
        .cloned()
        .collect()
}

/// Resolve member emails to usernames for display.
///
/// References that no longer match a user are dropped from the result;
/// the stored list is untouched.
pub fn resolve_member_names(refs: &[String], users: &[User]) -> Vec<String> {
    refs.iter()
        .filter_map(|email| users.iter().find(|user| &user.email == email))
        .map(|user| user.username.clone())
        .collect()
}
