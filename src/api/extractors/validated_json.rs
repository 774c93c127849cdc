//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON body that has passed its `validator` rules.
///
/// Malformed bodies and failed rules both become `AppError::Validation` (400).
///
/// ```rust,ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateProductRequest {
///     #[validate(length(min = 1))]
///     name: String,
///     #[validate(range(min = 0))]
///     price: i32,
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateProductRequest>) {}
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Price {
        #[validate(range(min = 0, message = "Price must not be negative"))]
        price: i32,
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn test_custom_message_used() {
        let errors = Price {
            price: -1,
            name: "Hoodie".to_string(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(format_validation_errors(&errors), "Price must not be negative");
    }

    #[test]
    fn test_fallback_message_names_field() {
        let errors = Price {
            price: 1,
            name: String::new(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(format_validation_errors(&errors), "name is invalid");
    }
}
