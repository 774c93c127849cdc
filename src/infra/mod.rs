//! Infrastructure layer - database connection, migrations, repositories
//! and the Unit of Work that ties them together.

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    ProductImageRepository, ProductImageStore, ProductRepository, ProductStore,
    ProductWithPhoto, UserRepository, UserStore,
};
pub use unit_of_work::{Persistence, TransactionContext, TxFuture, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockProductImageRepository, MockProductRepository, MockUserRepository};
