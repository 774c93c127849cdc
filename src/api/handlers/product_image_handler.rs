//! Product image list handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewProductImage, ProductImageChanges, ProductImageResponse};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Paginated, PaginatedProductImages, PaginationParams};

/// Create product image request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductImageRequest {
    #[validate(url(message = "Image must be a URL"))]
    pub image_url: Option<String>,
    #[serde(default)]
    pub alt_text: String,
    /// Product this image is the photo of
    pub product_id: Option<Uuid>,
}

/// Update product image request.
///
/// An absent field is left unchanged; an explicit `null` clears it, so
/// `"product_id": null` detaches the image from its product.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProductImageRequest {
    #[serde(default, deserialize_with = "present")]
    #[validate(url(message = "Image must be a URL"))]
    #[schema(value_type = Option<String>, nullable)]
    pub image_url: Option<Option<String>>,
    pub alt_text: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<Uuid>, nullable)]
    pub product_id: Option<Option<Uuid>>,
}

/// Marks a field that appeared in the body, even as `null`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub fn product_image_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_images).post(create_image))
        .route(
            "/:id",
            get(get_image).patch(update_image).delete(delete_image),
        )
}

/// List product images
#[utoipa::path(
    get,
    path = "/api/product-images",
    tag = "Product images",
    params(PaginationParams),
    responses((status = 200, description = "Page of product images", body = PaginatedProductImages))
)]
pub async fn list_images(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<ProductImageResponse>>> {
    let page = state.services.product_images().list_images(params).await?;
    Ok(Json(page.map(ProductImageResponse::from)))
}

/// Get product image by ID
#[utoipa::path(
    get,
    path = "/api/product-images/{id}",
    tag = "Product images",
    params(("id" = Uuid, Path, description = "Product image ID")),
    responses(
        (status = 200, description = "Product image found", body = ProductImageResponse),
        (status = 404, description = "Product image not found")
    )
)]
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProductImageResponse>> {
    let image = state.services.product_images().get_image(id).await?;
    Ok(Json(ProductImageResponse::from(image)))
}

/// Create a product image
#[utoipa::path(
    post,
    path = "/api/product-images",
    tag = "Product images",
    request_body = CreateProductImageRequest,
    responses(
        (status = 201, description = "Product image created", body = ProductImageResponse),
        (status = 400, description = "Validation error or unknown product"),
        (status = 409, description = "Product already has a photo")
    )
)]
pub async fn create_image(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductImageRequest>,
) -> AppResult<Created<ProductImageResponse>> {
    let image = state
        .services
        .product_images()
        .create_image(NewProductImage {
            image_url: payload.image_url,
            alt_text: payload.alt_text,
            product_id: payload.product_id,
        })
        .await?;
    Ok(Created(ProductImageResponse::from(image)))
}

/// Update a product image
#[utoipa::path(
    patch,
    path = "/api/product-images/{id}",
    tag = "Product images",
    params(("id" = Uuid, Path, description = "Product image ID")),
    request_body = UpdateProductImageRequest,
    responses(
        (status = 200, description = "Product image updated", body = ProductImageResponse),
        (status = 404, description = "Product image not found"),
        (status = 409, description = "Product already has a photo")
    )
)]
pub async fn update_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateProductImageRequest>,
) -> AppResult<Json<ProductImageResponse>> {
    let image = state
        .services
        .product_images()
        .update_image(
            id,
            ProductImageChanges {
                image_url: payload.image_url,
                alt_text: payload.alt_text,
                product_id: payload.product_id,
            },
        )
        .await?;
    Ok(Json(ProductImageResponse::from(image)))
}

/// Delete a product image
#[utoipa::path(
    delete,
    path = "/api/product-images/{id}",
    tag = "Product images",
    params(("id" = Uuid, Path, description = "Product image ID")),
    responses(
        (status = 204, description = "Product image deleted"),
        (status = 404, description = "Product image not found")
    )
)]
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.services.product_images().delete_image(id).await?;
    Ok(NoContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_null_are_distinct() {
        let absent: UpdateProductImageRequest = serde_json::from_str(r#"{"alt_text":"x"}"#).unwrap();
        assert_eq!(absent.product_id, None);

        let cleared: UpdateProductImageRequest =
            serde_json::from_str(r#"{"product_id":null}"#).unwrap();
        assert_eq!(cleared.product_id, Some(None));

        let id = Uuid::new_v4();
        let set: UpdateProductImageRequest =
            serde_json::from_str(&format!(r#"{{"product_id":"{}"}}"#, id)).unwrap();
        assert_eq!(set.product_id, Some(Some(id)));
    }

    #[test]
    fn test_update_checks_image_url() {
        let bad: UpdateProductImageRequest =
            serde_json::from_str(r#"{"image_url":"not a url"}"#).unwrap();
        assert!(bad.validate().is_err());

        let cleared: UpdateProductImageRequest =
            serde_json::from_str(r#"{"image_url":null}"#).unwrap();
        assert!(cleared.validate().is_ok());

        let good: UpdateProductImageRequest =
            serde_json::from_str(r#"{"image_url":"https://example.com/a.jpg"}"#).unwrap();
        assert!(good.validate().is_ok());
    }
}
