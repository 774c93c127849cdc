//! Product and product image entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{STATUS_AVAILABLE, STATUS_DRAFT, STATUS_UNAVAILABLE};
use crate::errors::AppError;

/// Publication status of a product
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    #[default]
    Draft,
    Available,
    Unavailable,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => STATUS_DRAFT,
            ProductStatus::Available => STATUS_AVAILABLE,
            ProductStatus::Unavailable => STATUS_UNAVAILABLE,
        }
    }
}

impl TryFrom<&str> for ProductStatus {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            STATUS_DRAFT => Ok(ProductStatus::Draft),
            STATUS_AVAILABLE => Ok(ProductStatus::Available),
            STATUS_UNAVAILABLE => Ok(ProductStatus::Unavailable),
            other => Err(AppError::validation(format!("Unknown product status: {}", other))),
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: ProductStatus,
    /// Price in cents
    pub price: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product image domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct ProductImage {
    pub id: Uuid,
    pub image_url: Option<String>,
    pub alt_text: String,
    pub product_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub status: ProductStatus,
    pub price: i32,
}

#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProductStatus>,
    pub price: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewProductImage {
    pub image_url: Option<String>,
    pub alt_text: String,
    pub product_id: Option<Uuid>,
}

/// `product_id` is doubly optional: `Some(None)` detaches the image.
#[derive(Debug, Clone, Default)]
pub struct ProductImageChanges {
    pub image_url: Option<Option<String>>,
    pub alt_text: Option<String>,
    pub product_id: Option<Option<Uuid>>,
}

/// Product image response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductImageResponse {
    pub id: Uuid,
    #[schema(example = "https://res.cloudinary.com/demo/image/upload/hoodie.jpg")]
    pub image_url: Option<String>,
    #[schema(example = "Front of the hoodie")]
    pub alt_text: String,
    pub product_id: Option<Uuid>,
}

impl From<ProductImage> for ProductImageResponse {
    fn from(image: ProductImage) -> Self {
        Self {
            id: image.id,
            image_url: image.image_url,
            alt_text: image.alt_text,
            product_id: image.product_id,
        }
    }
}

/// Product response, with its photo when one is attached
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: Uuid,
    #[schema(example = "Yeti Hoodie")]
    pub name: String,
    pub description: String,
    pub status: ProductStatus,
    /// Price in cents
    #[schema(example = 4999)]
    pub price: i32,
    pub photo: Option<ProductImageResponse>,
    pub created_at: DateTime<Utc>,
}

impl ProductResponse {
    pub fn new(product: Product, photo: Option<ProductImage>) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            status: product.status,
            price: product.price,
            photo: photo.map(ProductImageResponse::from),
            created_at: product.created_at,
        }
    }
}
