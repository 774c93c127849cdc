//! User service unit tests.

mod common;

use std::sync::Arc;

use mockall::predicate::eq;
use uuid::Uuid;

use common::{test_user, MockUsers, TestUnitOfWork};
use storefront::domain::Password;
use storefront::errors::AppError;
use storefront::services::{UserManager, UserService};
use storefront::types::PaginationParams;

fn service(repo: MockUsers) -> UserManager<TestUnitOfWork> {
    UserManager::new(Arc::new(TestUnitOfWork::with_users(repo)))
}

#[tokio::test]
async fn test_get_user_success() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUsers::new();
    repo.expect_find_by_id()
        .with(eq(user_id))
        .returning(|id| Ok(Some(test_user(id, "test@example.com"))));

    let user = service(repo).get_user(user_id).await.unwrap();
    assert_eq!(user.id, user_id);
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut repo = MockUsers::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let result = service(repo).get_user(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_list_users_builds_page_meta() {
    let mut repo = MockUsers::new();
    repo.expect_list()
        .withf(|params| params.page == 2 && params.limit() == 2)
        .returning(|_| {
            Ok((
                vec![
                    test_user(Uuid::new_v4(), "a@example.com"),
                    test_user(Uuid::new_v4(), "b@example.com"),
                ],
                5,
            ))
        });

    let page = service(repo)
        .list_users(PaginationParams::new(2, 2))
        .await
        .unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.meta.total, 5);
    assert_eq!(page.meta.total_pages, 3);
}

#[tokio::test]
async fn test_create_user_rejects_taken_email() {
    let mut repo = MockUsers::new();
    repo.expect_find_by_email()
        .returning(|email| Ok(Some(test_user(Uuid::new_v4(), email))));
    repo.expect_create().times(0);

    let result = service(repo)
        .create_user(
            "Wes".to_string(),
            "wes@example.com".to_string(),
            "password123".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_create_user_stores_hash_not_plain_text() {
    let mut repo = MockUsers::new();
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_create()
        .withf(|new_user| {
            new_user.password_hash != "password123"
                && Password::from_hash(new_user.password_hash.clone()).verify("password123")
        })
        .times(1)
        .returning(|new_user| {
            Ok(storefront::domain::User {
                name: new_user.name,
                password_hash: new_user.password_hash,
                ..test_user(Uuid::new_v4(), &new_user.email)
            })
        });

    let user = service(repo)
        .create_user(
            "Wes".to_string(),
            "wes@example.com".to_string(),
            "password123".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(user.email, "wes@example.com");
}

#[tokio::test]
async fn test_create_user_rejects_short_password() {
    let mut repo = MockUsers::new();
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_create().times(0);

    let result = service(repo)
        .create_user("Wes".to_string(), "wes@example.com".to_string(), "short".to_string())
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_update_user_keeping_own_email() {
    let user_id = Uuid::new_v4();

    let mut repo = MockUsers::new();
    repo.expect_find_by_email()
        .returning(move |email| Ok(Some(test_user(user_id, email))));
    repo.expect_update()
        .withf(move |id, changes| *id == user_id && changes.password_hash.is_none())
        .returning(|id, changes| {
            Ok(test_user(id, changes.email.as_deref().unwrap_or_default()))
        });

    let user = service(repo)
        .update_user(user_id, None, Some("same@example.com".to_string()), None)
        .await
        .unwrap();

    assert_eq!(user.email, "same@example.com");
}

#[tokio::test]
async fn test_update_user_email_owned_by_someone_else() {
    let mut repo = MockUsers::new();
    repo.expect_find_by_email()
        .returning(|email| Ok(Some(test_user(Uuid::new_v4(), email))));
    repo.expect_update().times(0);

    let result = service(repo)
        .update_user(Uuid::new_v4(), None, Some("taken@example.com".to_string()), None)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_delete_missing_user() {
    let mut repo = MockUsers::new();
    repo.expect_delete().returning(|_| Err(AppError::NotFound));

    let result = service(repo).delete_user(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}
