//! The User, Product and ProductImage lists.

use super::fields::{FieldDefinition, ListDefinition};
use crate::config::{
    LIST_PRODUCT, LIST_PRODUCT_IMAGE, LIST_USER, PRODUCT_STATUSES, STATUS_DRAFT,
};

pub fn user() -> ListDefinition {
    ListDefinition::new(
        LIST_USER,
        "users",
        vec![
            FieldDefinition::text("name").required(),
            FieldDefinition::text("email").required().unique(),
            FieldDefinition::password("password").required(),
        ],
    )
}

pub fn product() -> ListDefinition {
    ListDefinition::new(
        LIST_PRODUCT,
        "products",
        vec![
            FieldDefinition::text("name").required(),
            FieldDefinition::textarea("description"),
            FieldDefinition::relationship("photo", LIST_PRODUCT_IMAGE, "product"),
            FieldDefinition::select("status", PRODUCT_STATUSES, Some(STATUS_DRAFT)),
            FieldDefinition::integer("price"),
        ],
    )
}

pub fn product_image() -> ListDefinition {
    ListDefinition::new(
        LIST_PRODUCT_IMAGE,
        "product-images",
        vec![
            FieldDefinition::image("image"),
            FieldDefinition::text("alt_text"),
            FieldDefinition::relationship("product", LIST_PRODUCT, "photo"),
        ],
    )
}

/// Every list of the storefront, in declaration order.
pub fn all() -> Vec<ListDefinition> {
    vec![user(), product(), product_image()]
}
