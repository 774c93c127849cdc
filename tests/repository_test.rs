//! Repository and Unit of Work tests against in-memory SQLite.

mod common;

use tokio_test::{assert_err, assert_ok};

use common::memory_db;
use storefront::domain::{
    NewProduct, NewProductImage, NewUser, ProductChanges, ProductImageChanges, ProductStatus,
    UserChanges,
};
use storefront::errors::AppError;
use storefront::infra::{Persistence, UnitOfWork};
use storefront::types::PaginationParams;
use storefront::with_transaction;

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Wes".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$hash".to_string(),
    }
}

fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: "Warm".to_string(),
        status: ProductStatus::Available,
        price: 3423,
    }
}

async fn persistence() -> Persistence {
    Persistence::new(memory_db().await.get_connection())
}

#[tokio::test]
async fn test_user_crud() {
    let uow = persistence().await;
    let users = uow.users();

    let created = users.create(new_user("wes@example.com")).await.unwrap();
    let found = users.find_by_email("wes@example.com").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(created.id));

    let updated = users
        .update(
            created.id,
            UserChanges {
                name: Some("Scott".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Scott");
    assert_eq!(updated.email, "wes@example.com");

    assert_ok!(users.delete(created.id).await);
    assert!(users.find_by_id(created.id).await.unwrap().is_none());
    assert!(matches!(users.delete(created.id).await, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_duplicate_email_rejected_by_database() {
    let uow = persistence().await;
    assert_ok!(uow.users().create(new_user("wes@example.com")).await);

    let duplicate = uow.users().create(new_user("wes@example.com")).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(ref e)) if e == "Email"));
}

#[tokio::test]
async fn test_update_to_taken_email_is_conflict() {
    let uow = persistence().await;
    assert_ok!(uow.users().create(new_user("wes@example.com")).await);
    let other = uow.users().create(new_user("scott@example.com")).await.unwrap();

    let result = uow
        .users()
        .update(
            other.id,
            UserChanges {
                email: Some("wes@example.com".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_user_pagination() {
    let uow = persistence().await;
    for i in 0..5 {
        uow.users()
            .create(new_user(&format!("user{}@example.com", i)))
            .await
            .unwrap();
    }

    let (page, total) = uow.users().list(&PaginationParams::new(2, 2)).await.unwrap();
    assert_eq!(total, 5);
    assert_eq!(page.len(), 2);

    let (last, _) = uow.users().list(&PaginationParams::new(3, 2)).await.unwrap();
    assert_eq!(last.len(), 1);
}

#[tokio::test]
async fn test_product_loaded_with_photo() {
    let uow = persistence().await;
    let product = uow.products().create(new_product("Yeti Hoodie")).await.unwrap();
    let photo = uow
        .product_images()
        .create(NewProductImage {
            image_url: Some("https://example.com/yeti.jpg".to_string()),
            alt_text: "Yeti".to_string(),
            product_id: Some(product.id),
        })
        .await
        .unwrap();

    let (found, found_photo) = uow.products().find_by_id(product.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Yeti Hoodie");
    assert_eq!(found.status, ProductStatus::Available);
    assert_eq!(found_photo.map(|p| p.id), Some(photo.id));

    let (rows, total) = uow.products().list(&PaginationParams::default()).await.unwrap();
    assert_eq!(total, 1);
    assert!(rows[0].1.is_some());
}

#[tokio::test]
async fn test_product_update_changes_only_given_fields() {
    let uow = persistence().await;
    let product = uow.products().create(new_product("Fanny Pack")).await.unwrap();

    let updated = uow
        .products()
        .update(
            product.id,
            ProductChanges {
                status: Some(ProductStatus::Unavailable),
                price: Some(0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Fanny Pack");
    assert_eq!(updated.status, ProductStatus::Unavailable);
    assert_eq!(updated.price, 0);
}

#[tokio::test]
async fn test_deleting_product_detaches_photo() {
    let uow = persistence().await;
    let product = uow.products().create(new_product("Airmax")).await.unwrap();
    let photo = uow
        .product_images()
        .create(NewProductImage {
            image_url: None,
            alt_text: "Shoe".to_string(),
            product_id: Some(product.id),
        })
        .await
        .unwrap();

    uow.products().delete(product.id).await.unwrap();

    let orphan = uow.product_images().find_by_id(photo.id).await.unwrap().unwrap();
    assert_eq!(orphan.product_id, None);
}

#[tokio::test]
async fn test_one_photo_per_product_enforced_by_database() {
    let uow = persistence().await;
    let product = uow.products().create(new_product("Rimowa")).await.unwrap();
    let image = |alt: &str| NewProductImage {
        image_url: None,
        alt_text: alt.to_string(),
        product_id: Some(product.id),
    };

    assert_ok!(uow.product_images().create(image("first")).await);
    assert!(matches!(
        uow.product_images().create(image("second")).await,
        Err(AppError::Conflict(_))
    ));
}

#[tokio::test]
async fn test_image_detach_via_changes() {
    let uow = persistence().await;
    let product = uow.products().create(new_product("KITH")).await.unwrap();
    let photo = uow
        .product_images()
        .create(NewProductImage {
            image_url: None,
            alt_text: "Hoodie".to_string(),
            product_id: Some(product.id),
        })
        .await
        .unwrap();

    let detached = uow
        .product_images()
        .update(
            photo.id,
            ProductImageChanges {
                product_id: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(detached.product_id, None);
    assert_eq!(detached.alt_text, "Hoodie");
    assert!(uow.product_images().find_by_product(product.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_transaction_commits_product_and_photo_together() {
    let uow = persistence().await;

    let product = with_transaction!(uow, |ctx| {
        let product = ctx.products().create(new_product("Vapormax")).await?;
        ctx.product_images()
            .create(NewProductImage {
                image_url: None,
                alt_text: "Sole".to_string(),
                product_id: Some(product.id),
            })
            .await?;
        Ok(product)
    })
    .unwrap();

    let (_, photo) = uow.products().find_by_id(product.id).await.unwrap().unwrap();
    assert!(photo.is_some());
}

#[tokio::test]
async fn test_failed_transaction_rolls_back() {
    let uow = persistence().await;

    let result: Result<(), AppError> = with_transaction!(uow, |ctx| {
        ctx.products().create(new_product("Ghost")).await?;
        Err(AppError::internal("abort"))
    });

    assert_err!(result);
    assert_eq!(uow.products().count().await.unwrap(), 0);
}
