//! API middleware.

mod admin;
mod session;

pub use admin::{admin_gate, is_access_allowed};
pub use session::session_middleware;
