mod common;

use common::migrated_pool;
use products_hr::{Employee, EmployeeStore, NewEmployee, SaveOutcome};

fn hire(full_name: &str, role: Option<&str>) -> NewEmployee {
    NewEmployee {
        full_name: full_name.into(),
        role: role.map(Into::into),
        email: None,
    }
}

#[tokio::test]
async fn add_assigns_distinct_ids() {
    let store = EmployeeStore::new(migrated_pool().await);
    let alice = store.add(hire("Alice", Some("engineer"))).await.unwrap();
    let bob = store.add(hire("Bob", None)).await.unwrap();

    assert!(alice.id > 0);
    assert_ne!(alice.id, bob.id);
    assert_eq!(store.find(alice.id).await.unwrap(), Some(alice.clone()));

    let mut all = store.list_all().await.unwrap();
    all.sort_by_key(|employee| employee.id);
    assert_eq!(all, vec![alice, bob]);
}

#[tokio::test]
async fn find_missing_is_none() {
    let store = EmployeeStore::new(migrated_pool().await);
    assert_eq!(store.find(42).await.unwrap(), None);
    assert!(!store.exists(42).await.unwrap());
    assert!(!store.has_any().await.unwrap());
}

#[tokio::test]
async fn update_replaces_the_whole_record() {
    let store = EmployeeStore::new(migrated_pool().await);
    let created = store.add(hire("Alice", Some("engineer"))).await.unwrap();

    let replacement = Employee {
        id: created.id,
        full_name: "Alice Liddell".into(),
        role: None,
        email: Some("alice@example.test".into()),
    };
    let outcome = store.update(&replacement).await.unwrap();

    assert_eq!(outcome, SaveOutcome::Saved);
    assert_eq!(store.find(created.id).await.unwrap(), Some(replacement));
}

#[tokio::test]
async fn update_of_missing_row_is_a_conflict() {
    let store = EmployeeStore::new(migrated_pool().await);
    let ghost = Employee {
        id: 99,
        full_name: "Nobody".into(),
        role: None,
        email: None,
    };

    assert_eq!(store.update(&ghost).await.unwrap(), SaveOutcome::Conflict);
    assert!(!store.has_any().await.unwrap());
}

#[tokio::test]
async fn remove_deletes_only_the_target() {
    let store = EmployeeStore::new(migrated_pool().await);
    let alice = store.add(hire("Alice", None)).await.unwrap();
    let bob = store.add(hire("Bob", None)).await.unwrap();

    assert_eq!(store.remove(&alice).await.unwrap(), SaveOutcome::Saved);

    assert!(!store.exists(alice.id).await.unwrap());
    assert!(store.exists(bob.id).await.unwrap());
    assert!(store.has_any().await.unwrap());
}

#[tokio::test]
async fn remove_of_missing_row_is_a_conflict() {
    let store = EmployeeStore::new(migrated_pool().await);
    let alice = store.add(hire("Alice", None)).await.unwrap();
    assert_eq!(store.remove(&alice).await.unwrap(), SaveOutcome::Saved);

    assert_eq!(store.remove(&alice).await.unwrap(), SaveOutcome::Conflict);
}
