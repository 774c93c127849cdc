//! Product repository - products are always read together with their photo.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use super::entities::product_image::{self, Entity as ProductImageEntity};
use crate::domain::{NewProduct, Product, ProductChanges, ProductImage};
use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// A product and the image attached to it, if any
pub type ProductWithPhoto = (Product, Option<ProductImage>);

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProductWithPhoto>>;

    async fn count(&self) -> AppResult<u64>;

    /// One page of products, oldest first, with the total count
    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<ProductWithPhoto>, u64)>;

    async fn create(&self, product: NewProduct) -> AppResult<Product>;

    async fn update(&self, id: Uuid, changes: ProductChanges) -> AppResult<Product>;

    /// Delete a product; its photo is kept but detached
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

fn with_photo(
    (product, photo): (product::Model, Option<product_image::Model>),
) -> ProductWithPhoto {
    (Product::from(product), photo.map(ProductImage::from))
}

/// Insert a product on any connection (plain or transactional).
pub(crate) async fn insert_product<C: ConnectionTrait>(
    db: &C,
    product: NewProduct,
) -> AppResult<Product> {
    let now = chrono::Utc::now();
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(product.name),
        description: Set(product.description),
        status: Set(product.status.as_str().to_string()),
        price: Set(product.price),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let model = active_model.insert(db).await?;
    Ok(Product::from(model))
}

/// SeaORM-backed ProductRepository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProductWithPhoto>> {
        let result = ProductEntity::find_by_id(id)
            .find_also_related(ProductImageEntity)
            .one(&self.db)
            .await?;

        Ok(result.map(with_photo))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(ProductEntity::find().count(&self.db).await?)
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<ProductWithPhoto>, u64)> {
        let total = ProductEntity::find().count(&self.db).await?;
        let rows = ProductEntity::find()
            .find_also_related(ProductImageEntity)
            .order_by_asc(product::Column::CreatedAt)
            .offset(params.offset())
            .limit(params.limit())
            .all(&self.db)
            .await?;

        Ok((rows.into_iter().map(with_photo).collect(), total))
    }

    async fn create(&self, product: NewProduct) -> AppResult<Product> {
        insert_product(&self.db, product).await
    }

    async fn update(&self, id: Uuid, changes: ProductChanges) -> AppResult<Product> {
        let product = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = product.into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(status) = changes.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await?;
        Ok(Product::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ProductEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
