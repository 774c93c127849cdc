//! Domain layer - Core business entities
//!
//! Entities for the three lists (users, products, product images) and the
//! password value object behind the secret field.

pub mod password;
pub mod product;
pub mod user;

pub use password::Password;
pub use product::{
    NewProduct, NewProductImage, Product, ProductChanges, ProductImage, ProductImageChanges,
    ProductImageResponse, ProductResponse, ProductStatus,
};
pub use user::{NewUser, User, UserChanges, UserResponse};
