//! Base repository trait shared by every list store.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, Select};

use crate::errors::AppResult;
use crate::types::PaginationParams;

/// Paged reads over one entity
#[async_trait]
pub trait ReadRepository<E, M>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult + 'static,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Query the pages are cut from; stores add their ordering here
    fn base_query(&self) -> Select<E> {
        E::find()
    }

    /// Fetch one page plus the total number of rows
    async fn find_page(&self, params: &PaginationParams) -> AppResult<(Vec<M>, u64)> {
        let paginator = self.base_query().paginate(self.db(), params.limit());
        let total = paginator.num_items().await?;
        let data = paginator.fetch_page(params.page() - 1).await?;
        Ok((data, total))
    }

    /// Count all rows
    async fn count_rows(&self) -> AppResult<u64> {
        E::find().count(self.db()).await.map_err(Into::into)
    }
}
