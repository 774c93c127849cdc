//! Product list handlers. Products are returned with their photo.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{ProductChanges, ProductResponse, ProductStatus};
use crate::errors::AppResult;
use crate::services::{NewPhoto, ProductDraft};
use crate::types::{Created, NoContent, Paginated, PaginatedProducts, PaginationParams};

/// Photo created along with a product
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePhotoRequest {
    #[validate(url(message = "Image must be a URL"))]
    pub image_url: Option<String>,
    #[serde(default)]
    #[schema(example = "Front of the hoodie")]
    pub alt_text: String,
}

/// Create product request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Yeti Hoodie")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to DRAFT
    pub status: Option<ProductStatus>,
    /// Price in cents
    #[validate(range(min = 0, message = "Price must not be negative"))]
    #[schema(example = 4999)]
    pub price: i32,
    #[validate(nested)]
    pub photo: Option<CreatePhotoRequest>,
}

/// Update product request; omitted fields are left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProductStatus>,
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: Option<i32>,
}

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

/// List products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(PaginationParams),
    responses((status = 200, description = "Page of products", body = PaginatedProducts))
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<ProductResponse>>> {
    let page = state.services.products().list_products(params).await?;
    Ok(Json(page.map(|(product, photo)| ProductResponse::new(product, photo))))
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProductResponse>> {
    let (product, photo) = state.services.products().get_product(id).await?;
    Ok(Json(ProductResponse::new(product, photo)))
}

/// Create a product, optionally with its photo
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> AppResult<Created<ProductResponse>> {
    let draft = ProductDraft {
        name: payload.name,
        description: payload.description,
        status: payload.status,
        price: payload.price,
        photo: payload.photo.map(|photo| NewPhoto {
            image_url: photo.image_url,
            alt_text: photo.alt_text,
        }),
    };

    let (product, photo) = state.services.products().create_product(draft).await?;
    Ok(Created(ProductResponse::new(product, photo)))
}

/// Update a product
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateProductRequest>,
) -> AppResult<Json<ProductResponse>> {
    let products = state.services.products();
    products
        .update_product(
            id,
            ProductChanges {
                name: payload.name,
                description: payload.description,
                status: payload.status,
                price: payload.price,
            },
        )
        .await?;

    let (product, photo) = products.get_product(id).await?;
    Ok(Json(ProductResponse::new(product, photo)))
}

/// Delete a product; its photo is kept but detached
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.services.products().delete_product(id).await?;
    Ok(NoContent)
}
