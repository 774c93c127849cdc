//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain rules and persistence. Each one is a trait
//! with a `*Manager` implementation generic over the Unit of Work.

mod auth_service;
pub mod container;
mod product_image_service;
mod product_service;
mod user_service;

pub use container::{ServiceContainer, Services};

pub use auth_service::{AuthService, Authenticator, SignInResponse, SignedIn};
pub use product_image_service::{ProductImageManager, ProductImageService};
pub use product_service::{NewPhoto, ProductDraft, ProductManager, ProductService};
pub use user_service::{UserManager, UserService};
