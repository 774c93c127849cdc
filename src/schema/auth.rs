//! Authentication declaration: which list signs in, by which fields, and
//! how the very first item is bootstrapped.

use serde::Serialize;
use utoipa::ToSchema;

use super::{FieldKind, Schema};
use crate::config::LIST_USER;
use crate::errors::{AppError, AppResult};

/// Fields collected when creating the first item
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InitFirstItem {
    pub fields: Vec<String>,
}

/// Authentication declaration
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthConfig {
    pub list_key: String,
    pub identity_field: String,
    pub secret_field: String,
    pub init_first_item: Option<InitFirstItem>,
}

impl Default for AuthConfig {
    /// Users sign in with email and password; the first user is created
    /// from name, email and password.
    fn default() -> Self {
        Self {
            list_key: LIST_USER.to_string(),
            identity_field: "email".to_string(),
            secret_field: "password".to_string(),
            init_first_item: Some(InitFirstItem {
                fields: vec![
                    "name".to_string(),
                    "email".to_string(),
                    "password".to_string(),
                ],
            }),
        }
    }
}

impl AuthConfig {
    /// Check the declaration against the schema it will run on.
    pub fn validate(&self, schema: &Schema) -> AppResult<()> {
        let list = schema.list(&self.list_key).ok_or_else(|| {
            AppError::schema(format!("auth list '{}' is not declared", self.list_key))
        })?;

        let identity = list.field(&self.identity_field).ok_or_else(|| {
            AppError::schema(format!(
                "identity field '{}.{}' is not declared",
                self.list_key, self.identity_field
            ))
        })?;
        if !identity.unique {
            return Err(AppError::schema(format!(
                "identity field '{}.{}' must be unique",
                self.list_key, self.identity_field
            )));
        }

        match list.field(&self.secret_field).map(|f| &f.kind) {
            Some(FieldKind::Password) => {}
            _ => {
                return Err(AppError::schema(format!(
                    "secret field '{}.{}' must be a password field",
                    self.list_key, self.secret_field
                )))
            }
        }

        if let Some(init) = &self.init_first_item {
            if let Some(missing) = init.fields.iter().find(|f| list.field(f).is_none()) {
                return Err(AppError::schema(format!(
                    "init field '{}.{}' is not declared",
                    self.list_key, missing
                )));
            }
            for required in [&self.identity_field, &self.secret_field] {
                if !init.fields.contains(required) {
                    return Err(AppError::schema(format!(
                        "init fields must include '{}'",
                        required
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{create_schema, lists};

    fn schema() -> Schema {
        create_schema(lists::all()).unwrap()
    }

    #[test]
    fn test_default_declaration_is_valid() {
        assert!(AuthConfig::default().validate(&schema()).is_ok());
    }

    #[test]
    fn test_unknown_list_rejected() {
        let config = AuthConfig {
            list_key: "Customer".to_string(),
            ..AuthConfig::default()
        };
        assert!(config.validate(&schema()).is_err());
    }

    #[test]
    fn test_non_unique_identity_rejected() {
        let config = AuthConfig {
            identity_field: "name".to_string(),
            ..AuthConfig::default()
        };
        assert!(config.validate(&schema()).is_err());
    }

    #[test]
    fn test_secret_must_be_password_kind() {
        let config = AuthConfig {
            secret_field: "name".to_string(),
            ..AuthConfig::default()
        };
        assert!(config.validate(&schema()).is_err());
    }

    #[test]
    fn test_init_fields_must_cover_credentials() {
        let config = AuthConfig {
            init_first_item: Some(InitFirstItem {
                fields: vec!["name".to_string(), "email".to_string()],
            }),
            ..AuthConfig::default()
        };
        assert!(config.validate(&schema()).is_err());
    }
}
