//! Product service - CRUD over the `Product` list, including the nested photo.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewProduct, NewProductImage, Product, ProductChanges, ProductStatus};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{ProductWithPhoto, UnitOfWork};
use crate::types::{Paginated, PaginationParams};

/// Photo created together with its product
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub image_url: Option<String>,
    pub alt_text: String,
}

/// Input for product creation
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub status: Option<ProductStatus>,
    pub price: i32,
    pub photo: Option<NewPhoto>,
}

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn get_product(&self, id: Uuid) -> AppResult<ProductWithPhoto>;

    async fn list_products(&self, params: PaginationParams)
        -> AppResult<Paginated<ProductWithPhoto>>;

    /// Create a product and, when given, its photo in one transaction
    async fn create_product(&self, draft: ProductDraft) -> AppResult<ProductWithPhoto>;

    async fn update_product(&self, id: Uuid, changes: ProductChanges) -> AppResult<Product>;

    /// Delete a product; its photo stays behind, detached
    async fn delete_product(&self, id: Uuid) -> AppResult<()>;

    async fn count_products(&self) -> AppResult<u64>;
}

fn check_price(price: i32) -> AppResult<()> {
    if price < 0 {
        return Err(AppError::validation("Price must not be negative"));
    }
    Ok(())
}

/// Concrete implementation of ProductService using Unit of Work.
pub struct ProductManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProductManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork + 'static> ProductService for ProductManager<U> {
    async fn get_product(&self, id: Uuid) -> AppResult<ProductWithPhoto> {
        self.uow.products().find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_products(
        &self,
        params: PaginationParams,
    ) -> AppResult<Paginated<ProductWithPhoto>> {
        let (products, total) = self.uow.products().list(&params).await?;
        Ok(Paginated::new(products, &params, total))
    }

    async fn create_product(&self, draft: ProductDraft) -> AppResult<ProductWithPhoto> {
        check_price(draft.price)?;

        let ProductDraft {
            name,
            description,
            status,
            price,
            photo,
        } = draft;
        let new_product = NewProduct {
            name,
            description,
            status: status.unwrap_or_default(),
            price,
        };

        let created = crate::with_transaction!(self.uow, |ctx| {
            let product = ctx.products().create(new_product).await?;
            let photo = match photo {
                Some(photo) => Some(
                    ctx.product_images()
                        .create(NewProductImage {
                            image_url: photo.image_url,
                            alt_text: photo.alt_text,
                            product_id: Some(product.id),
                        })
                        .await?,
                ),
                None => None,
            };
            Ok((product, photo))
        })?;

        tracing::info!(product_id = %created.0.id, "Created product");
        Ok(created)
    }

    async fn update_product(&self, id: Uuid, changes: ProductChanges) -> AppResult<Product> {
        if let Some(price) = changes.price {
            check_price(price)?;
        }
        self.uow.products().update(id, changes).await
    }

    async fn delete_product(&self, id: Uuid) -> AppResult<()> {
        self.uow.products().delete(id).await?;
        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }

    async fn count_products(&self) -> AppResult<u64> {
        self.uow.products().count().await
    }
}
