//! Repository layer - Data access abstraction
//!
//! One repository per list, each behind a trait so services can be tested
//! against mocks.

mod base;
pub(crate) mod entities;
mod product_image_repository;
mod product_repository;
mod user_repository;

pub use base::ReadRepository;
pub use product_image_repository::{ProductImageRepository, ProductImageStore};
pub use product_repository::{ProductRepository, ProductStore, ProductWithPhoto};
pub use user_repository::{UserRepository, UserStore};

pub(crate) use product_image_repository::insert_product_image;
pub(crate) use product_repository::insert_product;
pub(crate) use user_repository::insert_user;

#[cfg(any(test, feature = "test-utils"))]
pub use product_image_repository::MockProductImageRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
