//! Seeding against in-memory SQLite.

mod common;

use common::memory_db;
use storefront::infra::{Persistence, UnitOfWork};
use storefront::seed::{on_connect, SeedData, Seeder};
use storefront::types::PaginationParams;

#[tokio::test]
async fn test_seed_inserts_every_bundled_product() {
    let db = memory_db().await;
    let seed = SeedData::bundled().unwrap();

    let inserted = seed.insert_seed_data(&db).await.unwrap();
    assert_eq!(inserted, seed.len());

    let uow = Persistence::new(db.get_connection());
    assert_eq!(uow.products().count().await.unwrap(), seed.len() as u64);

    let (products, _) = uow
        .products()
        .list(&PaginationParams::new(1, 100))
        .await
        .unwrap();
    let with_photo = products.iter().filter(|(_, photo)| photo.is_some()).count();
    assert_eq!(
        uow.product_images().count().await.unwrap(),
        with_photo as u64
    );
}

#[tokio::test]
async fn test_seeding_twice_duplicates_products() {
    let db = memory_db().await;
    let seed = SeedData::bundled().unwrap();

    seed.insert_seed_data(&db).await.unwrap();
    seed.insert_seed_data(&db).await.unwrap();

    let uow = Persistence::new(db.get_connection());
    assert_eq!(
        uow.products().count().await.unwrap(),
        2 * seed.len() as u64
    );
}

#[tokio::test]
async fn test_on_connect_with_flag_seeds() {
    let db = memory_db().await;
    let seed = SeedData::bundled().unwrap();

    let inserted = on_connect(&db, true, &seed).await.unwrap();
    assert_eq!(inserted, Some(seed.len()));
}

#[tokio::test]
async fn test_on_connect_without_flag_leaves_database_empty() {
    let db = memory_db().await;
    let seed = SeedData::bundled().unwrap();

    assert_eq!(on_connect(&db, false, &seed).await.unwrap(), None);

    let uow = Persistence::new(db.get_connection());
    assert_eq!(uow.products().count().await.unwrap(), 0);
}
