//! Product image service - CRUD over the `ProductImage` list.
//!
//! A product has at most one photo; attaching a second one is a conflict.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewProductImage, ProductImage, ProductImageChanges};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::{Paginated, PaginationParams};

/// Product image service trait for dependency injection.
#[async_trait]
pub trait ProductImageService: Send + Sync {
    async fn get_image(&self, id: Uuid) -> AppResult<ProductImage>;

    async fn list_images(&self, params: PaginationParams) -> AppResult<Paginated<ProductImage>>;

    async fn create_image(&self, image: NewProductImage) -> AppResult<ProductImage>;

    async fn update_image(&self, id: Uuid, changes: ProductImageChanges) -> AppResult<ProductImage>;

    async fn delete_image(&self, id: Uuid) -> AppResult<()>;

    async fn count_images(&self) -> AppResult<u64>;
}

/// Concrete implementation of ProductImageService using Unit of Work.
pub struct ProductImageManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProductImageManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// The product must exist and carry no photo other than `image_id`.
    async fn ensure_attachable(&self, product_id: Uuid, image_id: Option<Uuid>) -> AppResult<()> {
        if self.uow.products().find_by_id(product_id).await?.is_none() {
            return Err(AppError::validation(format!(
                "Product {} does not exist",
                product_id
            )));
        }

        match self.uow.product_images().find_by_product(product_id).await? {
            Some(existing) if Some(existing.id) != image_id => {
                Err(AppError::conflict("Photo for this product"))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<U: UnitOfWork + 'static> ProductImageService for ProductImageManager<U> {
    async fn get_image(&self, id: Uuid) -> AppResult<ProductImage> {
        self.uow.product_images().find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_images(&self, params: PaginationParams) -> AppResult<Paginated<ProductImage>> {
        let (images, total) = self.uow.product_images().list(&params).await?;
        Ok(Paginated::new(images, &params, total))
    }

    async fn create_image(&self, image: NewProductImage) -> AppResult<ProductImage> {
        if let Some(product_id) = image.product_id {
            self.ensure_attachable(product_id, None).await?;
        }

        let image = self.uow.product_images().create(image).await?;
        tracing::info!(image_id = %image.id, "Created product image");
        Ok(image)
    }

    async fn update_image(&self, id: Uuid, changes: ProductImageChanges) -> AppResult<ProductImage> {
        if let Some(Some(product_id)) = changes.product_id {
            self.ensure_attachable(product_id, Some(id)).await?;
        }
        self.uow.product_images().update(id, changes).await
    }

    async fn delete_image(&self, id: Uuid) -> AppResult<()> {
        self.uow.product_images().delete(id).await?;
        tracing::info!(image_id = %id, "Deleted product image");
        Ok(())
    }

    async fn count_images(&self) -> AppResult<u64> {
        self.uow.product_images().count().await
    }
}
