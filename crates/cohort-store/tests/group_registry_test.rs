//! Integration tests for the group registry using the in-memory
//! store.

use cohort_core::error::CohortError;
use cohort_core::membership::Candidates;
use cohort_core::models::user::CreateUser;
use cohort_store::{GroupRegistry, MemStore, UserRegistry};

/// Helper: in-memory store seeded with two users.
fn setup() -> (UserRegistry<MemStore>, GroupRegistry<MemStore>) {
    let store = MemStore::new();
    let users = UserRegistry::new(store.clone());
    users.create(user_input("alice", "alice@example.com")).unwrap();
    users.create(user_input("bob", "bob@example.com")).unwrap();
    (users, GroupRegistry::new(store))
}

fn user_input(username: &str, email: &str) -> CreateUser {
    CreateUser {
        username: username.into(),
        email: email.into(),
        first_name: "Test".into(),
        last_name: "User".into(),
    }
}

fn emails(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|e| e.to_string()).collect()
}

#[test]
fn create_and_list_groups() {
    let (_, repo) = setup();

    let group = repo.create("Developers").unwrap();
    assert_eq!(group.name, "Developers");
    assert!(group.users.is_empty());

    let listings = repo.list().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].group.name, "Developers");
    assert!(listings[0].member_names.is_empty());
}

#[test]
fn create_trims_name() {
    let (_, repo) = setup();
    let group = repo.create("  Team  ").unwrap();
    assert_eq!(group.name, "Team");
}

#[test]
fn empty_name_rejected() {
    let (_, repo) = setup();
    assert_eq!(
        repo.create("   "),
        Err(CohortError::MissingField {
            field: "group name"
        })
    );
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn duplicate_name_rejected() {
    let (_, repo) = setup();
    repo.create("Interns").unwrap();

    let result = repo.create("Interns");
    assert_eq!(
        result,
        Err(CohortError::DuplicateName {
            name: "Interns".into()
        })
    );
    assert_eq!(repo.list().unwrap().len(), 1);
}

#[test]
fn delete_group() {
    let (_, repo) = setup();
    repo.create("ToDelete").unwrap();

    repo.delete("ToDelete").unwrap();
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn delete_unknown_group_rejected() {
    let (_, repo) = setup();
    let result = repo.delete("Nobody");
    assert!(
        matches!(result, Err(CohortError::NotFound { entity: "group", .. })),
        "deleting a missing group should fail"
    );
}

#[test]
fn add_members_unions_and_dedups() {
    let (_, repo) = setup();
    repo.create("Team").unwrap();

    let group = repo
        .add_members("Team", &emails(&["alice@example.com", "alice@example.com"]))
        .unwrap();
    assert_eq!(group.users, emails(&["alice@example.com"]));

    // Adding the same selection again changes nothing.
    let group = repo
        .add_members("Team", &emails(&["alice@example.com"]))
        .unwrap();
    assert_eq!(group.users, emails(&["alice@example.com"]));

    let group = repo
        .add_members("Team", &emails(&["bob@example.com"]))
        .unwrap();
    assert_eq!(
        group.users,
        emails(&["alice@example.com", "bob@example.com"])
    );
}

#[test]
fn add_members_requires_a_selection() {
    let (_, repo) = setup();
    repo.create("Team").unwrap();

    assert_eq!(
        repo.add_members("Team", &[]),
        Err(CohortError::EmptySelection { entity: "user" })
    );
}

#[test]
fn add_members_to_unknown_group_rejected() {
    let (_, repo) = setup();
    let result = repo.add_members("Nobody", &emails(&["alice@example.com"]));
    assert!(matches!(
        result,
        Err(CohortError::NotFound { entity: "group", .. })
    ));
}

#[test]
fn remove_members_subtracts() {
    let (_, repo) = setup();
    repo.create("Team").unwrap();
    repo.add_members("Team", &emails(&["alice@example.com", "bob@example.com"]))
        .unwrap();

    let group = repo
        .remove_members("Team", &emails(&["alice@example.com"]))
        .unwrap();
    assert_eq!(group.users, emails(&["bob@example.com"]));
}

#[test]
fn remove_members_requires_a_selection() {
    let (_, repo) = setup();
    repo.create("Team").unwrap();

    assert_eq!(
        repo.remove_members("Team", &[]),
        Err(CohortError::EmptySelection { entity: "user" })
    );
}

#[test]
fn addable_users_excludes_current_members() {
    let (_, repo) = setup();
    repo.create("Team").unwrap();
    repo.add_members("Team", &emails(&["alice@example.com"])).unwrap();

    match repo.addable_users("Team").unwrap() {
        Candidates::Available(users) => {
            assert_eq!(users.len(), 1);
            assert_eq!(users[0].username, "bob");
        }
        other => panic!("expected addable candidates, got {other:?}"),
    }
}

#[test]
fn addable_users_reports_all_already_assigned() {
    let (_, repo) = setup();
    repo.create("Everyone").unwrap();
    repo.add_members(
        "Everyone",
        &emails(&["alice@example.com", "bob@example.com"]),
    )
    .unwrap();

    assert_eq!(
        repo.addable_users("Everyone").unwrap(),
        Candidates::AllAlreadyAssigned
    );
}

#[test]
fn addable_users_with_no_users_reports_all_already_assigned() {
    // No seeded users at all: nothing is addable.
    let store = MemStore::new();
    let repo = GroupRegistry::new(store);
    repo.create("Empty").unwrap();

    assert_eq!(
        repo.addable_users("Empty").unwrap(),
        Candidates::AllAlreadyAssigned
    );
}

#[test]
fn removable_users_after_removing_everyone() {
    let (_, repo) = setup();
    repo.create("Team").unwrap();
    repo.add_members("Team", &emails(&["alice@example.com", "bob@example.com"]))
        .unwrap();

    match repo.removable_users("Team").unwrap() {
        Candidates::Available(users) => assert_eq!(users.len(), 2),
        other => panic!("expected removable candidates, got {other:?}"),
    }

    repo.remove_members("Team", &emails(&["alice@example.com", "bob@example.com"]))
        .unwrap();

    assert_eq!(
        repo.removable_users("Team").unwrap(),
        Candidates::NothingToRemove
    );
}

#[test]
fn listing_resolves_member_names() {
    let (_, repo) = setup();
    repo.create("Team").unwrap();
    repo.add_members("Team", &emails(&["bob@example.com", "alice@example.com"]))
        .unwrap();

    let listings = repo.list().unwrap();
    // Names follow the stored reference order, resolved to usernames.
    assert_eq!(
        listings[0].member_names,
        vec!["bob".to_string(), "alice".to_string()]
    );
}

#[test]
fn listing_hides_dangling_references_but_keeps_them_stored() {
    let (users, repo) = setup();
    repo.create("Team").unwrap();
    repo.add_members("Team", &emails(&["alice@example.com", "bob@example.com"]))
        .unwrap();

    // Deleting alice orphans the group's reference to her.
    users.delete(1).unwrap();

    let listings = repo.list().unwrap();
    assert_eq!(listings[0].member_names, emails(&["bob"]));
    assert_eq!(
        listings[0].group.users,
        emails(&["alice@example.com", "bob@example.com"]),
        "the stored reference list is not cleaned up"
    );
}
