//! Product image service tests: one photo per product.

mod common;

use std::sync::Arc;

use mockall::predicate::eq;
use uuid::Uuid;

use common::{test_image, test_product, MockImages, MockProducts, MockUsers, TestUnitOfWork};
use storefront::domain::{NewProductImage, ProductImageChanges};
use storefront::errors::AppError;
use storefront::services::{ProductImageManager, ProductImageService};

fn service(products: MockProducts, images: MockImages) -> ProductImageManager<TestUnitOfWork> {
    ProductImageManager::new(Arc::new(TestUnitOfWork::new(
        MockUsers::new(),
        products,
        images,
    )))
}

fn new_image(product_id: Option<Uuid>) -> NewProductImage {
    NewProductImage {
        image_url: Some("https://example.com/hoodie.jpg".to_string()),
        alt_text: "Hoodie".to_string(),
        product_id,
    }
}

#[tokio::test]
async fn test_create_detached_image_skips_product_checks() {
    let mut images = MockImages::new();
    images
        .expect_create()
        .times(1)
        .returning(|image| Ok(test_image(Uuid::new_v4(), image.product_id)));

    let image = service(MockProducts::new(), images)
        .create_image(new_image(None))
        .await
        .unwrap();

    assert_eq!(image.product_id, None);
}

#[tokio::test]
async fn test_create_for_unknown_product() {
    let mut products = MockProducts::new();
    products.expect_find_by_id().returning(|_| Ok(None));
    let mut images = MockImages::new();
    images.expect_create().times(0);

    let result = service(products, images)
        .create_image(new_image(Some(Uuid::new_v4())))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_second_photo_is_a_conflict() {
    let product_id = Uuid::new_v4();

    let mut products = MockProducts::new();
    products
        .expect_find_by_id()
        .with(eq(product_id))
        .returning(|id| Ok(Some((test_product(id), None))));
    let mut images = MockImages::new();
    images
        .expect_find_by_product()
        .with(eq(product_id))
        .returning(|id| Ok(Some(test_image(Uuid::new_v4(), Some(id)))));
    images.expect_create().times(0);

    let result = service(products, images)
        .create_image(new_image(Some(product_id)))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_reattaching_to_own_product_is_allowed() {
    let product_id = Uuid::new_v4();
    let image_id = Uuid::new_v4();

    let mut products = MockProducts::new();
    products
        .expect_find_by_id()
        .returning(|id| Ok(Some((test_product(id), None))));
    let mut images = MockImages::new();
    images
        .expect_find_by_product()
        .returning(move |id| Ok(Some(test_image(image_id, Some(id)))));
    images
        .expect_update()
        .with(eq(image_id), mockall::predicate::always())
        .times(1)
        .returning(move |id, _| Ok(test_image(id, Some(product_id))));

    let changes = ProductImageChanges {
        product_id: Some(Some(product_id)),
        ..Default::default()
    };
    let image = service(products, images)
        .update_image(image_id, changes)
        .await
        .unwrap();

    assert_eq!(image.product_id, Some(product_id));
}

#[tokio::test]
async fn test_detaching_needs_no_product_lookup() {
    let image_id = Uuid::new_v4();

    let mut images = MockImages::new();
    images
        .expect_update()
        .withf(|_, changes| changes.product_id == Some(None))
        .returning(|id, _| Ok(test_image(id, None)));

    let changes = ProductImageChanges {
        product_id: Some(None),
        ..Default::default()
    };
    let image = service(MockProducts::new(), images)
        .update_image(image_id, changes)
        .await
        .unwrap();

    assert_eq!(image.product_id, None);
}
