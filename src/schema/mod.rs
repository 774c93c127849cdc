//! List schema - declarative description of every list.
//!
//! `create_schema` assembles list declarations and checks that they are
//! consistent; the result drives the admin metadata endpoint and the
//! validation of the auth declaration.

pub mod auth;
pub mod fields;
pub mod lists;

use std::collections::HashSet;

use serde::Serialize;
use utoipa::ToSchema;

pub use auth::{AuthConfig, InitFirstItem};
pub use fields::{FieldDefinition, FieldKind, ListDefinition};

use crate::errors::{AppError, AppResult};

/// Validated set of lists
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Schema {
    lists: Vec<ListDefinition>,
}

impl Schema {
    pub fn lists(&self) -> &[ListDefinition] {
        &self.lists
    }

    pub fn list(&self, key: &str) -> Option<&ListDefinition> {
        self.lists.iter().find(|l| l.key == key)
    }
}

/// Assemble lists into a schema.
///
/// # Errors
/// Duplicate list keys or paths, duplicate field names, and relationships
/// whose target list or back-reference is missing.
pub fn create_schema(lists: Vec<ListDefinition>) -> AppResult<Schema> {
    let mut keys = HashSet::new();
    let mut paths = HashSet::new();
    for list in &lists {
        if !keys.insert(list.key.as_str()) {
            return Err(AppError::schema(format!("duplicate list '{}'", list.key)));
        }
        if !paths.insert(list.path.as_str()) {
            return Err(AppError::schema(format!("duplicate list path '{}'", list.path)));
        }

        let mut names = HashSet::new();
        for field in &list.fields {
            if !names.insert(field.name.as_str()) {
                return Err(AppError::schema(format!(
                    "duplicate field '{}.{}'",
                    list.key, field.name
                )));
            }
        }
    }

    let schema = Schema { lists };
    for list in schema.lists() {
        for field in &list.fields {
            if let FieldKind::Relationship { ref_list, ref_field } = &field.kind {
                check_back_reference(&schema, &list.key, &field.name, ref_list, ref_field)?;
            }
        }
    }

    Ok(schema)
}

fn check_back_reference(
    schema: &Schema,
    list_key: &str,
    field_name: &str,
    ref_list: &str,
    ref_field: &str,
) -> AppResult<()> {
    let target = schema.list(ref_list).ok_or_else(|| {
        AppError::schema(format!(
            "'{}.{}' references unknown list '{}'",
            list_key, field_name, ref_list
        ))
    })?;

    match target.field(ref_field).map(|f| &f.kind) {
        Some(FieldKind::Relationship {
            ref_list: back_list,
            ref_field: back_field,
        }) if back_list == list_key && back_field == field_name => Ok(()),
        _ => Err(AppError::schema(format!(
            "'{}.{}' expects back-reference '{}.{}'",
            list_key, field_name, ref_list, ref_field
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_lists_are_consistent() {
        let schema = create_schema(lists::all()).unwrap();
        let keys: Vec<_> = schema.lists().iter().map(|l| l.key.as_str()).collect();
        assert_eq!(keys, vec!["User", "Product", "ProductImage"]);
        assert!(schema.list("User").unwrap().field("email").unwrap().unique);
    }

    #[test]
    fn test_duplicate_list_rejected() {
        let result = create_schema(vec![lists::user(), lists::user()]);
        assert!(matches!(result, Err(AppError::Schema(_))));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let list = ListDefinition::new(
            "Tag",
            "tags",
            vec![FieldDefinition::text("name"), FieldDefinition::text("name")],
        );
        assert!(create_schema(vec![list]).is_err());
    }

    #[test]
    fn test_missing_relationship_target_rejected() {
        // Product without ProductImage
        let result = create_schema(vec![lists::user(), lists::product()]);
        assert!(matches!(result, Err(AppError::Schema(msg)) if msg.contains("ProductImage")));
    }

    #[test]
    fn test_one_sided_relationship_rejected() {
        let image = ListDefinition::new(
            "ProductImage",
            "product-images",
            vec![FieldDefinition::text("alt_text")],
        );
        let result = create_schema(vec![lists::product(), image]);
        assert!(result.is_err());
    }
}
