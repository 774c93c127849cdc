//! Storefront - content backend for a small online shop.
//!
//! Declares three lists (users, products, product images), email/password
//! authentication with a one-time first-user bootstrap, stateless signed
//! session cookies and an admin surface gated on the session.
//!
//! # Architecture Layers
//!
//! - **cli** / **commands**: command-line interface and its commands
//! - **config**: settings from the environment and constants
//! - **schema**: list declarations and the auth declaration
//! - **domain**: core entities and password hashing
//! - **session**: stateless session tokens and item data
//! - **services**: use cases behind traits
//! - **infra**: database, migrations, repositories, Unit of Work
//! - **seed**: bundled sample data and the on-connect hook
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: shared pagination and response types
//! - **errors**: centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server, seeding sample products first
//! cargo run -- --seed-data
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod schema;
pub mod seed;
pub mod services;
pub mod session;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, Product, ProductImage, User};
pub use errors::{AppError, AppResult};
