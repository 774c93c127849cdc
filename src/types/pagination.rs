//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_NUMBER, MAX_PAGE_SIZE};
use crate::domain::{ProductImageResponse, ProductResponse, UserResponse};

/// Pagination query parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (max 100)
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// Page number clamped to `1..=MAX_PAGE_NUMBER`
    pub fn page(&self) -> u64 {
        self.page.clamp(1, MAX_PAGE_NUMBER)
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        (self.page() - 1).saturating_mul(self.limit())
    }

    /// Page size clamped to `1..=MAX_PAGE_SIZE`
    pub fn limit(&self) -> u64 {
        self.per_page.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[aliases(
    PaginatedUsers = Paginated<UserResponse>,
    PaginatedProducts = Paginated<ProductResponse>,
    PaginatedProductImages = Paginated<ProductImageResponse>
)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Build a page from already-fetched rows
    pub fn new(data: Vec<T>, params: &PaginationParams, total: u64) -> Self {
        let per_page = params.limit();
        Self {
            data,
            meta: PaginationMeta {
                page: params.page(),
                per_page,
                total,
                total_pages: total.div_ceil(per_page),
            },
        }
    }

    /// Convert every row, keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        let params = PaginationParams::new(3, 10);
        assert_eq!(params.offset(), 20);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn test_limit_clamped() {
        assert_eq!(PaginationParams::new(1, 1000).limit(), MAX_PAGE_SIZE);
        assert_eq!(PaginationParams::new(1, 0).limit(), 1);
        assert_eq!(PaginationParams::new(0, 10).offset(), 0);
    }

    #[test]
    fn test_huge_page_clamped() {
        let params = PaginationParams::new(u64::MAX, MAX_PAGE_SIZE);
        assert_eq!(params.page(), MAX_PAGE_NUMBER);
        assert_eq!(params.offset(), (MAX_PAGE_NUMBER - 1) * MAX_PAGE_SIZE);

        let page: Paginated<u8> = Paginated::new(vec![], &params, 3);
        assert_eq!(page.meta.page, MAX_PAGE_NUMBER);
    }

    #[test]
    fn test_total_pages() {
        let page = Paginated::new(vec![1, 2], &PaginationParams::new(1, 2), 5);
        assert_eq!(page.meta.total_pages, 3);

        let empty: Paginated<u8> = Paginated::new(vec![], &PaginationParams::default(), 0);
        assert_eq!(empty.meta.total_pages, 0);
    }

    #[test]
    fn test_map_keeps_meta() {
        let page = Paginated::new(vec![1, 2], &PaginationParams::new(2, 2), 4).map(|n| n * 10);
        assert_eq!(page.data, vec![10, 20]);
        assert_eq!(page.meta.page, 2);
    }
}
