//! Unit of Work pattern implementation.
//!
//! Centralizes access to the list repositories and runs multi-step writes
//! (first-item bootstrap, product + photo inserts) inside one transaction.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, EntityTrait, IsolationLevel,
    PaginatorTrait, TransactionTrait,
};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::repositories::entities::user::Entity as UserEntity;
use super::repositories::{
    insert_product, insert_product_image, insert_user, ProductImageRepository, ProductImageStore,
    ProductRepository, ProductStore, UserRepository, UserStore,
};
use crate::domain::{NewProduct, NewProductImage, NewUser, Product, ProductImage, User};
use crate::errors::{AppError, AppResult};

/// Boxed future returned by transactional closures
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly due to generic methods; tests mock the
/// repositories and implement this trait by hand.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn products(&self) -> Arc<dyn ProductRepository>;

    fn product_images(&self) -> Arc<dyn ProductImageRepository>;

    /// Run `f` in a ReadCommitted transaction; commit on Ok, roll back on Err.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;

    /// Same as `transaction` with serializable isolation.
    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Repository access bound to one open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository { txn: self.txn }
    }

    pub fn products(&self) -> TxProductRepository<'_> {
        TxProductRepository { txn: self.txn }
    }

    pub fn product_images(&self) -> TxProductImageRepository<'_> {
        TxProductImageRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    product_repo: Arc<ProductStore>,
    product_image_repo: Arc<ProductImageStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            product_repo: Arc::new(ProductStore::new(db.clone())),
            product_image_repo: Arc::new(ProductImageStore::new(db.clone())),
            db,
        }
    }

    async fn execute_transaction<F, T>(&self, isolation: IsolationLevel, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(isolation), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        let result = f(TransactionContext::new(&txn)).await;

        match result {
            Ok(value) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.product_repo.clone()
    }

    fn product_images(&self) -> Arc<dyn ProductImageRepository> {
        self.product_image_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::ReadCommitted, f).await
    }

    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::Serializable, f).await
    }
}

/// Transaction-bound user writes
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxUserRepository<'_> {
    pub async fn count(&self) -> AppResult<u64> {
        Ok(UserEntity::find().count(self.txn).await?)
    }

    pub async fn create(&self, user: NewUser) -> AppResult<User> {
        insert_user(self.txn, user).await
    }
}

/// Transaction-bound product writes
pub struct TxProductRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxProductRepository<'_> {
    pub async fn create(&self, product: NewProduct) -> AppResult<Product> {
        insert_product(self.txn, product).await
    }
}

/// Transaction-bound product image writes
pub struct TxProductImageRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxProductImageRepository<'_> {
    pub async fn create(&self, image: NewProductImage) -> AppResult<ProductImage> {
        insert_product_image(self.txn, image).await
    }
}

/// Run a block inside `UnitOfWork::transaction`.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(move |$ctx| Box::pin(async move { $body })).await
    };
}
