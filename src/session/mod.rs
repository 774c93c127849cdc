//! Sessions - stateless signed tokens plus the item data attached to them.

mod stateless;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

pub use stateless::{SessionClaims, SessionConfig, StatelessSessions};

use crate::config::LIST_USER;
use crate::errors::AppError;
use crate::services::UserService;

/// Item data selected for the session (`User: 'id'`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SessionItemData {
    pub id: Uuid,
}

/// Session attached to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub list_key: String,
    pub item_id: Uuid,
    /// `None` when the signed-in item no longer exists
    pub data: Option<SessionItemData>,
}

/// Resolve the item behind verified claims and attach its data.
pub async fn with_item_data(claims: SessionClaims, users: &dyn UserService) -> Session {
    let data = if claims.list_key == LIST_USER {
        match users.get_user(claims.sub).await {
            Ok(user) => Some(SessionItemData { id: user.id }),
            Err(AppError::NotFound) => None,
            Err(e) => {
                tracing::warn!(error = %e, item_id = %claims.sub, "Failed to load session item");
                None
            }
        }
    } else {
        None
    };

    Session {
        list_key: claims.list_key,
        item_id: claims.sub,
        data,
    }
}
