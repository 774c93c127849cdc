//! Authentication handlers: sign in/out, current session, first-item init.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{MaybeSession, ValidatedJson};
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::services::SignInResponse;

/// Sign in request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignInRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "wes@example.com")]
    pub email: String,
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// First item request; fields follow the init declaration
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct InitFirstItemRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Wes Bos")]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "wes@example.com")]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// Currently signed-in item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CurrentSessionResponse {
    pub item: Option<UserResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InitStatusResponse {
    /// True while no user exists yet
    pub needs_init: bool,
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/session",
            get(current_session).post(sign_in).delete(sign_out),
        )
        .route("/init", get(init_status).post(init_first_item))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/session",
    tag = "Session",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in; session cookie set", body = SignInResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication failed")
    )
)]
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignInRequest>,
) -> AppResult<impl IntoResponse> {
    let signed_in = state
        .services
        .auth()
        .authenticate(payload.email, payload.password)
        .await?;

    let cookie = state.sessions.cookie(&signed_in.session_token);
    Ok((
        [(SET_COOKIE, cookie)],
        Json(SignInResponse::from(signed_in)),
    ))
}

/// Sign out by expiring the session cookie
#[utoipa::path(
    delete,
    path = "/api/session",
    tag = "Session",
    responses((status = 204, description = "Session cookie cleared"))
)]
pub async fn sign_out(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, state.sessions.removal_cookie())],
    )
}

/// The signed-in item, if any
#[utoipa::path(
    get,
    path = "/api/session",
    tag = "Session",
    responses((status = 200, description = "Current session item", body = CurrentSessionResponse))
)]
pub async fn current_session(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> AppResult<Json<CurrentSessionResponse>> {
    let item = state
        .services
        .auth()
        .authenticated_item(session.as_ref())
        .await?;

    Ok(Json(CurrentSessionResponse {
        item: item.map(UserResponse::from),
    }))
}

/// Whether the first item still has to be created
#[utoipa::path(
    get,
    path = "/api/init",
    tag = "Session",
    responses((status = 200, description = "Init status", body = InitStatusResponse))
)]
pub async fn init_status(State(state): State<AppState>) -> AppResult<Json<InitStatusResponse>> {
    let needs_init = state.services.auth().needs_init().await?;
    Ok(Json(InitStatusResponse { needs_init }))
}

/// Create the first user and sign it in
#[utoipa::path(
    post,
    path = "/api/init",
    tag = "Session",
    request_body = InitFirstItemRequest,
    responses(
        (status = 201, description = "First item created; session cookie set", body = SignInResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Users already exist")
    )
)]
pub async fn init_first_item(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<InitFirstItemRequest>,
) -> AppResult<impl IntoResponse> {
    let signed_in = state
        .services
        .auth()
        .init_first_item(payload.name, payload.email, payload.password)
        .await?;

    let cookie = state.sessions.cookie(&signed_in.session_token);
    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, cookie)],
        Json(SignInResponse::from(signed_in)),
    ))
}
