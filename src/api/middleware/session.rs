//! Session middleware.
//!
//! Reads the session token from the cookie (or a bearer header), verifies
//! it, loads the item data and puts the resulting `Session` into the
//! request extensions. Missing or invalid tokens leave the request
//! anonymous; nothing is rejected here.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::api::AppState;
use crate::session::with_item_data;

pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let jar = CookieJar::from_headers(request.headers());

    if let Some(token) = state.sessions.token_from(&jar, request.headers()) {
        match state.sessions.get(&token) {
            Some(claims) => {
                let session = with_item_data(claims, state.services.users().as_ref()).await;
                request.extensions_mut().insert(session);
            }
            None => tracing::debug!("Ignoring invalid session token"),
        }
    }

    next.run(request).await
}
