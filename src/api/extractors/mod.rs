//! Custom request extractors.

mod session;
mod validated_json;

pub use session::MaybeSession;
pub use validated_json::ValidatedJson;
