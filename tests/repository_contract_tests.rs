mod common;

use exam_auth_server::{
    errors::AppError,
    models::domain::{NewAccount, Role},
    repositories::AccountRepository,
};

use common::InMemoryAccountRepository;

fn new_account(email: &str) -> NewAccount {
    NewAccount::new("Test User", email, "$argon2id$v=19$placeholder")
}

#[tokio::test]
async fn account_repository_insert_and_lookup() {
    let repo = InMemoryAccountRepository::new();

    let created = repo
        .insert(Role::Attendee, new_account("amy@example.com"))
        .await
        .expect("insert should work");
    assert_eq!(created.role, Role::Attendee);

    let by_email = repo
        .find_by_email(Role::Attendee, "amy@example.com")
        .await
        .expect("find by email should work")
        .expect("account should exist");
    assert_eq!(by_email.id, created.id);

    let by_id = repo
        .find_by_id(Role::Attendee, created.id)
        .await
        .expect("find by id should work");
    assert_eq!(by_id, Some(by_email));
}

#[tokio::test]
async fn account_repository_email_is_unique_per_role() {
    let repo = InMemoryAccountRepository::new();

    repo.insert(Role::Attendee, new_account("sam@example.com"))
        .await
        .expect("first insert should work");

    let duplicate = repo
        .insert(Role::Attendee, new_account("sam@example.com"))
        .await;
    assert!(matches!(duplicate, Err(AppError::DuplicateEmail)));

    let other_role = repo
        .insert(Role::Proctor, new_account("sam@example.com"))
        .await
        .expect("same email under the other role should work");
    assert_eq!(other_role.role, Role::Proctor);
}

#[tokio::test]
async fn account_repository_roles_do_not_leak() {
    let repo = InMemoryAccountRepository::new();

    let proctor = repo
        .insert(Role::Proctor, new_account("pia@example.com"))
        .await
        .expect("insert should work");

    let as_attendee = repo
        .find_by_email(Role::Attendee, "pia@example.com")
        .await
        .expect("lookup should work");
    assert!(as_attendee.is_none());

    let by_id_wrong_table = repo
        .find_by_id(Role::Attendee, proctor.id)
        .await
        .expect("lookup should work");
    assert!(by_id_wrong_table.is_none());
}

#[tokio::test]
async fn account_repository_missing_rows_are_none() {
    let repo = InMemoryAccountRepository::new();

    let missing = repo
        .find_by_id(Role::Proctor, 404)
        .await
        .expect("lookup should work");
    assert!(missing.is_none());

    let created = repo
        .insert(Role::Proctor, new_account("gone@example.com"))
        .await
        .expect("insert should work");
    assert!(repo.remove(Role::Proctor, created.id).await);

    let after_delete = repo
        .find_by_email(Role::Proctor, "gone@example.com")
        .await
        .expect("lookup should work");
    assert!(after_delete.is_none());
}
