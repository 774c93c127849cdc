//! Shared request/response types.

mod pagination;
mod response;

pub use pagination::{
    Paginated, PaginatedProductImages, PaginatedProducts, PaginatedUsers, PaginationMeta,
    PaginationParams,
};
pub use response::{Created, NoContent};
