//! User service - CRUD over the `User` list.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewUser, Password, User, UserChanges};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::{Paginated, PaginationParams};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    async fn list_users(&self, params: PaginationParams) -> AppResult<Paginated<User>>;

    /// Create a user; the email must not be taken
    async fn create_user(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Update the given fields; a new password is re-hashed
    async fn update_user(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<User>;

    async fn delete_user(&self, id: Uuid) -> AppResult<()>;

    async fn count_users(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn ensure_email_free(&self, email: &str, owner: Option<Uuid>) -> AppResult<()> {
        match self.uow.users().find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => Err(AppError::conflict("Email")),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<U: UnitOfWork + 'static> UserService for UserManager<U> {
    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.uow.users().find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self, params: PaginationParams) -> AppResult<Paginated<User>> {
        let (users, total) = self.uow.users().list(&params).await?;
        Ok(Paginated::new(users, &params, total))
    }

    async fn create_user(&self, name: String, email: String, password: String) -> AppResult<User> {
        self.ensure_email_free(&email, None).await?;
        let password_hash = Password::new(&password)?.into_string();

        let user = self
            .uow
            .users()
            .create(NewUser {
                name,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn update_user(
        &self,
        id: Uuid,
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> AppResult<User> {
        if let Some(email) = &email {
            self.ensure_email_free(email, Some(id)).await?;
        }

        let password_hash = password
            .map(|plain| Password::new(&plain).map(Password::into_string))
            .transpose()?;

        self.uow
            .users()
            .update(
                id,
                UserChanges {
                    name,
                    email,
                    password_hash,
                },
            )
            .await
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.uow.users().delete(id).await?;
        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }

    async fn count_users(&self) -> AppResult<u64> {
        self.uow.users().count().await
    }
}
