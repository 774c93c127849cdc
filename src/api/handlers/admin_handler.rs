//! Admin API handlers. Mounted behind `admin_gate`.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::{LIST_PRODUCT, LIST_PRODUCT_IMAGE, LIST_USER};
use crate::errors::AppResult;
use crate::schema::{AuthConfig, ListDefinition};

/// Declared lists and auth rules
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminMeta {
    pub lists: Vec<ListDefinition>,
    pub auth: AuthConfig,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListCount {
    pub key: String,
    pub path: String,
    pub count: u64,
}

/// Item counts per list
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminOverview {
    pub lists: Vec<ListCount>,
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/meta", get(meta))
        .route("/overview", get(overview))
}

/// Schema and auth declaration
#[utoipa::path(
    get,
    path = "/admin/api/meta",
    tag = "Admin",
    responses(
        (status = 200, description = "Declared lists", body = AdminMeta),
        (status = 401, description = "No session with item data")
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
pub async fn meta(State(state): State<AppState>) -> Json<AdminMeta> {
    Json(AdminMeta {
        lists: state.schema.lists().to_vec(),
        auth: state.services.auth().config().clone(),
    })
}

/// Number of items in every list
#[utoipa::path(
    get,
    path = "/admin/api/overview",
    tag = "Admin",
    responses(
        (status = 200, description = "Item counts", body = AdminOverview),
        (status = 401, description = "No session with item data")
    ),
    security(("session_cookie" = []), ("bearer_auth" = []))
)]
pub async fn overview(State(state): State<AppState>) -> AppResult<Json<AdminOverview>> {
    let (users, products, images) = (
        state.services.users(),
        state.services.products(),
        state.services.product_images(),
    );
    let (users, products, images) = tokio::try_join!(
        users.count_users(),
        products.count_products(),
        images.count_images(),
    )?;

    let lists = state
        .schema
        .lists()
        .iter()
        .map(|list| {
            let count = match list.key.as_str() {
                LIST_USER => users,
                LIST_PRODUCT => products,
                LIST_PRODUCT_IMAGE => images,
                _ => 0,
            };
            ListCount {
                key: list.key.clone(),
                path: list.path.clone(),
                count,
            }
        })
        .collect();

    Ok(Json(AdminOverview { lists }))
}
