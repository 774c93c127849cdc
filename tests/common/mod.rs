//! Shared test fixtures: repository mocks, a mock-backed Unit of Work,
//! and SQLite-backed application state.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use storefront::api::AppState;
use storefront::config::Config;
use storefront::domain::{
    NewProduct, NewProductImage, NewUser, Password, Product, ProductChanges, ProductImage,
    ProductImageChanges, ProductStatus, User, UserChanges,
};
use storefront::errors::{AppError, AppResult};
use storefront::infra::{
    Database, ProductImageRepository, ProductRepository, ProductWithPhoto, TransactionContext,
    TxFuture, UnitOfWork, UserRepository,
};
use storefront::types::PaginationParams;

pub const TEST_SECRET: &str = "test-cookie-secret-for-testing-only-32chars";
pub const FRONTEND: &str = "http://localhost:7777";

// =============================================================================
// Repository mocks
// =============================================================================

mock! {
    pub Users {}

    #[async_trait]
    impl UserRepository for Users {
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
        async fn count(&self) -> AppResult<u64>;
        async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<User>, u64)>;
        async fn create(&self, user: NewUser) -> AppResult<User>;
        async fn update(&self, id: Uuid, changes: UserChanges) -> AppResult<User>;
        async fn delete(&self, id: Uuid) -> AppResult<()>;
    }
}

mock! {
    pub Products {}

    #[async_trait]
    impl ProductRepository for Products {
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProductWithPhoto>>;
        async fn count(&self) -> AppResult<u64>;
        async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<ProductWithPhoto>, u64)>;
        async fn create(&self, product: NewProduct) -> AppResult<Product>;
        async fn update(&self, id: Uuid, changes: ProductChanges) -> AppResult<Product>;
        async fn delete(&self, id: Uuid) -> AppResult<()>;
    }
}

mock! {
    pub Images {}

    #[async_trait]
    impl ProductImageRepository for Images {
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProductImage>>;
        async fn find_by_product(&self, product_id: Uuid) -> AppResult<Option<ProductImage>>;
        async fn count(&self) -> AppResult<u64>;
        async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<ProductImage>, u64)>;
        async fn create(&self, image: NewProductImage) -> AppResult<ProductImage>;
        async fn update(&self, id: Uuid, changes: ProductImageChanges) -> AppResult<ProductImage>;
        async fn delete(&self, id: Uuid) -> AppResult<()>;
    }
}

/// Unit of Work over repository mocks; transactions are not supported.
pub struct TestUnitOfWork {
    users: Arc<MockUsers>,
    products: Arc<MockProducts>,
    images: Arc<MockImages>,
}

impl TestUnitOfWork {
    pub fn new(users: MockUsers, products: MockProducts, images: MockImages) -> Self {
        Self {
            users: Arc::new(users),
            products: Arc::new(products),
            images: Arc::new(images),
        }
    }

    pub fn with_users(users: MockUsers) -> Self {
        Self::new(users, MockProducts::new(), MockImages::new())
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }

    fn product_images(&self) -> Arc<dyn ProductImageRepository> {
        self.images.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        Err(AppError::internal("Transactions not supported in test mock"))
    }

    async fn transaction_serializable<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn test_user(id: Uuid, email: &str) -> User {
    User {
        id,
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: "hashed".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A user whose stored hash matches `password`
pub fn user_with_password(email: &str, password: &str) -> User {
    User {
        password_hash: Password::new(password).unwrap().into_string(),
        ..test_user(Uuid::new_v4(), email)
    }
}

pub fn test_product(id: Uuid) -> Product {
    Product {
        id,
        name: "Yeti Hoodie".to_string(),
        description: "Warm".to_string(),
        status: ProductStatus::Available,
        price: 3423,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_image(id: Uuid, product_id: Option<Uuid>) -> ProductImage {
    ProductImage {
        id,
        image_url: Some("https://example.com/hoodie.jpg".to_string()),
        alt_text: "Hoodie".to_string(),
        product_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

// =============================================================================
// SQLite-backed state
// =============================================================================

pub fn test_config() -> Config {
    Config::new("sqlite::memory:", TEST_SECRET, vec![FRONTEND.to_string()]).unwrap()
}

/// Fresh in-memory database with every migration applied
pub async fn memory_db() -> Arc<Database> {
    Arc::new(Database::connect("sqlite::memory:").await.unwrap())
}

pub async fn test_state() -> AppState {
    AppState::from_config(memory_db().await, &test_config()).unwrap()
}
