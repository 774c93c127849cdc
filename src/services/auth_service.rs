//! Authentication service - sign in, first-item bootstrap, session issue.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::domain::{NewUser, Password, User, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::schema::AuthConfig;
use crate::session::{Session, StatelessSessions};

/// Result of a successful sign in or first-item creation
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub session_token: String,
    pub item: User,
}

/// Body returned to clients after signing in
#[derive(Debug, Clone, Serialize, serde::Deserialize, ToSchema)]
pub struct SignInResponse {
    /// Same token as the session cookie, for clients that send it as a bearer header
    pub session_token: String,
    pub item: UserResponse,
}

impl From<SignedIn> for SignInResponse {
    fn from(signed_in: SignedIn) -> Self {
        Self {
            session_token: signed_in.session_token,
            item: UserResponse::from(signed_in.item),
        }
    }
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check identity and secret, then start a session
    async fn authenticate(&self, identity: String, secret: String) -> AppResult<SignedIn>;

    /// True while the auth list has no items
    async fn needs_init(&self) -> AppResult<bool>;

    /// Create the very first item and sign it in
    async fn init_first_item(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> AppResult<SignedIn>;

    /// The item behind a session, if the session carries item data
    async fn authenticated_item(&self, session: Option<&Session>) -> AppResult<Option<User>>;

    /// The declaration this service enforces
    fn config(&self) -> &AuthConfig;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    sessions: StatelessSessions,
    config: AuthConfig,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, sessions: StatelessSessions, config: AuthConfig) -> Self {
        Self {
            uow,
            sessions,
            config,
        }
    }

    fn start_session(&self, item: User) -> AppResult<SignedIn> {
        let session_token = self.sessions.start(&self.config.list_key, item.id)?;
        Ok(SignedIn {
            session_token,
            item,
        })
    }
}

#[async_trait]
impl<U: UnitOfWork + 'static> AuthService for Authenticator<U> {
    async fn authenticate(&self, identity: String, secret: String) -> AppResult<SignedIn> {
        let user = self.uow.users().find_by_email(&identity).await?;

        // Verify against a real hash even when the identity is unknown so
        // both failures take the same time.
        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.clone()),
            None => Password::dummy(),
        };
        let secret_valid = stored.verify(&secret);

        match user {
            Some(user) if secret_valid => {
                tracing::info!(item_id = %user.id, "Authenticated");
                self.start_session(user)
            }
            _ => {
                tracing::debug!("Authentication failed");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    async fn needs_init(&self) -> AppResult<bool> {
        Ok(self.uow.users().count().await? == 0)
    }

    async fn init_first_item(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> AppResult<SignedIn> {
        if self.config.init_first_item.is_none() {
            return Err(AppError::forbidden("First item initialisation is disabled"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let new_user = NewUser {
            name,
            email,
            password_hash,
        };

        let user = self
            .uow
            .transaction_serializable(move |ctx| {
                Box::pin(async move {
                    if ctx.users().count().await? > 0 {
                        return Err(AppError::forbidden("Initial item has already been created"));
                    }
                    ctx.users().create(new_user).await
                })
            })
            .await?;

        tracing::info!(item_id = %user.id, "Created first item");
        self.start_session(user)
    }

    async fn authenticated_item(&self, session: Option<&Session>) -> AppResult<Option<User>> {
        let Some(data) = session.and_then(|s| s.data.as_ref()) else {
            return Ok(None);
        };
        self.uow.users().find_by_id(data.id).await
    }

    fn config(&self) -> &AuthConfig {
        &self.config
    }
}
