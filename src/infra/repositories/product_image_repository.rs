//! Product image repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use uuid::Uuid;

use super::base::ReadRepository;
use super::entities::product_image::{self, ActiveModel, Entity as ProductImageEntity};
use crate::domain::{NewProductImage, ProductImage, ProductImageChanges};
use crate::errors::{AppError, AppResult, DbResultExt};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductImageRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProductImage>>;

    /// The photo attached to a product
    async fn find_by_product(&self, product_id: Uuid) -> AppResult<Option<ProductImage>>;

    async fn count(&self) -> AppResult<u64>;

    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<ProductImage>, u64)>;

    async fn create(&self, image: NewProductImage) -> AppResult<ProductImage>;

    async fn update(&self, id: Uuid, changes: ProductImageChanges) -> AppResult<ProductImage>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Insert a product image on any connection (plain or transactional).
pub(crate) async fn insert_product_image<C: ConnectionTrait>(
    db: &C,
    image: NewProductImage,
) -> AppResult<ProductImage> {
    let now = chrono::Utc::now();
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        image_url: Set(image.image_url),
        alt_text: Set(image.alt_text),
        product_id: Set(image.product_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let model = active_model.insert(db).await.or_conflict("Photo for this product")?;
    Ok(ProductImage::from(model))
}

/// SeaORM-backed ProductImageRepository
pub struct ProductImageStore {
    db: DatabaseConnection,
}

impl ProductImageStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<ProductImageEntity, product_image::Model> for ProductImageStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn base_query(&self) -> Select<ProductImageEntity> {
        ProductImageEntity::find().order_by_asc(product_image::Column::CreatedAt)
    }
}

#[async_trait]
impl ProductImageRepository for ProductImageStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProductImage>> {
        let result = ProductImageEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(ProductImage::from))
    }

    async fn find_by_product(&self, product_id: Uuid) -> AppResult<Option<ProductImage>> {
        let result = ProductImageEntity::find()
            .filter(product_image::Column::ProductId.eq(product_id))
            .one(&self.db)
            .await?;

        Ok(result.map(ProductImage::from))
    }

    async fn count(&self) -> AppResult<u64> {
        self.count_rows().await
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<ProductImage>, u64)> {
        let (models, total) = self.find_page(params).await?;
        Ok((models.into_iter().map(ProductImage::from).collect(), total))
    }

    async fn create(&self, image: NewProductImage) -> AppResult<ProductImage> {
        insert_product_image(&self.db, image).await
    }

    async fn update(&self, id: Uuid, changes: ProductImageChanges) -> AppResult<ProductImage> {
        let image = ProductImageEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = image.into();

        if let Some(image_url) = changes.image_url {
            active.image_url = Set(image_url);
        }
        if let Some(alt_text) = changes.alt_text {
            active.alt_text = Set(alt_text);
        }
        if let Some(product_id) = changes.product_id {
            active.product_id = Set(product_id);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.or_conflict("Photo for this product")?;
        Ok(ProductImage::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ProductImageEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
