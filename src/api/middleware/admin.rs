//! Admin access gate.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::errors::AppError;
use crate::session::Session;

/// Admin surface is open to any session that carries item data.
pub fn is_access_allowed(session: Option<&Session>) -> bool {
    session.is_some_and(|s| s.data.is_some())
}

/// Reject requests that fail `is_access_allowed` with 401.
pub async fn admin_gate(request: Request, next: Next) -> Result<Response, AppError> {
    if !is_access_allowed(request.extensions().get::<Session>()) {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
