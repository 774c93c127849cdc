//! Seed data and the on-connect hook that optionally inserts it.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::ProductStatus;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, Persistence};
use crate::services::{NewPhoto, ProductDraft, ProductManager, ProductService};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const BUNDLED_PRODUCTS: &str = include_str!("products.json");

/// Something that can fill an empty database with sample content.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Seeder: Send + Sync {
    /// Insert the seed content and return how many products were added.
    async fn insert_seed_data(&self, db: &Database) -> AppResult<usize>;
}

#[derive(Debug, Clone, Deserialize)]
struct SeedPhoto {
    image_url: Option<String>,
    alt_text: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SeedProduct {
    name: String,
    description: String,
    #[serde(default)]
    status: ProductStatus,
    price: i32,
    photo: Option<SeedPhoto>,
}

impl From<SeedProduct> for ProductDraft {
    fn from(product: SeedProduct) -> Self {
        Self {
            name: product.name,
            description: product.description,
            status: Some(product.status),
            price: product.price,
            photo: product.photo.map(|photo| NewPhoto {
                image_url: photo.image_url,
                alt_text: photo.alt_text,
            }),
        }
    }
}

/// Products bundled with the binary.
///
/// Not idempotent: every run inserts the full set again.
#[derive(Debug, Clone)]
pub struct SeedData {
    products: Vec<SeedProduct>,
}

impl SeedData {
    pub fn bundled() -> AppResult<Self> {
        let products = serde_json::from_str(BUNDLED_PRODUCTS)
            .map_err(|e| AppError::internal(format!("Invalid bundled seed data: {}", e)))?;
        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl Seeder for SeedData {
    async fn insert_seed_data(&self, db: &Database) -> AppResult<usize> {
        let products = ProductManager::new(Arc::new(Persistence::new(db.get_connection())));

        tracing::info!(count = self.products.len(), "Inserting seed data");

        // One transaction per product; earlier products stay if a later one fails.
        for product in &self.products {
            tracing::info!(name = %product.name, "Adding product");
            products.create_product(product.clone().into()).await?;
        }

        tracing::info!("Seed data inserted");
        Ok(self.products.len())
    }
}

/// Runs once the database is reachable. Seeds when asked to.
pub async fn on_connect(
    db: &Database,
    seed_requested: bool,
    seeder: &dyn Seeder,
) -> AppResult<Option<usize>> {
    tracing::info!("connected to db");

    if !seed_requested {
        return Ok(None);
    }

    let inserted = seeder.insert_seed_data(db).await?;
    Ok(Some(inserted))
}
