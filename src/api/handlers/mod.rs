//! HTTP request handlers.

pub mod admin_handler;
pub mod auth_handler;
pub mod product_handler;
pub mod product_image_handler;
pub mod user_handler;

pub use admin_handler::admin_routes;
pub use auth_handler::auth_routes;
pub use product_handler::product_routes;
pub use product_image_handler::product_image_routes;
pub use user_handler::user_routes;
