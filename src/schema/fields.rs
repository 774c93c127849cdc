//! Field and list declarations.

use serde::Serialize;
use utoipa::ToSchema;

/// Kind of a declared field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    Password,
    Integer,
    Select {
        options: Vec<String>,
        default: Option<String>,
    },
    /// Two-sided relationship; `ref_field` is the back-reference on `ref_list`
    Relationship {
        ref_list: String,
        ref_field: String,
    },
    Image,
}

/// A single declared field of a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldDefinition {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub unique: bool,
}

impl FieldDefinition {
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required: false,
            unique: false,
        }
    }

    pub fn text(name: &str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn textarea(name: &str) -> Self {
        Self::new(name, FieldKind::Textarea)
    }

    pub fn password(name: &str) -> Self {
        Self::new(name, FieldKind::Password)
    }

    pub fn integer(name: &str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    pub fn image(name: &str) -> Self {
        Self::new(name, FieldKind::Image)
    }

    pub fn select(name: &str, options: &[&str], default: Option<&str>) -> Self {
        Self::new(
            name,
            FieldKind::Select {
                options: options.iter().map(|o| o.to_string()).collect(),
                default: default.map(str::to_string),
            },
        )
    }

    pub fn relationship(name: &str, ref_list: &str, ref_field: &str) -> Self {
        Self::new(
            name,
            FieldKind::Relationship {
                ref_list: ref_list.to_string(),
                ref_field: ref_field.to_string(),
            },
        )
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// A list: one entity type, one table, one API collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ListDefinition {
    /// List key, e.g. `ProductImage`
    pub key: String,
    /// URL segment of the list's API collection, e.g. `product-images`
    pub path: String,
    pub fields: Vec<FieldDefinition>,
}

impl ListDefinition {
    pub fn new(key: &str, path: &str, fields: Vec<FieldDefinition>) -> Self {
        Self {
            key: key.to_string(),
            path: path.to_string(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}
