//! Application configuration module
//!
//! Environment-driven settings (database, session policy, CORS) and the
//! constants shared by the lists, sessions and server.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
