//! User repository - persistence for the User list.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Select, Set,
};
use uuid::Uuid;

use super::base::ReadRepository;
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User, UserChanges};
use crate::errors::{AppError, AppResult, DbResultExt};
use crate::types::PaginationParams;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by the identity field (email)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Number of users
    async fn count(&self) -> AppResult<u64>;

    /// One page of users, oldest first, with the total count
    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<User>, u64)>;

    /// Create a new user
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Apply a partial update
    async fn update(&self, id: Uuid, changes: UserChanges) -> AppResult<User>;

    /// Delete user by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Insert a user on any connection (plain or transactional).
pub(crate) async fn insert_user<C: ConnectionTrait>(db: &C, user: NewUser) -> AppResult<User> {
    let now = chrono::Utc::now();
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(user.name),
        email: Set(user.email),
        password_hash: Set(user.password_hash),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let model = active_model.insert(db).await.or_conflict("Email")?;
    Ok(User::from(model))
}

/// SeaORM-backed UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadRepository<UserEntity, user::Model> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn base_query(&self) -> Select<UserEntity> {
        UserEntity::find().order_by_asc(user::Column::CreatedAt)
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn count(&self) -> AppResult<u64> {
        self.count_rows().await
    }

    async fn list(&self, params: &PaginationParams) -> AppResult<(Vec<User>, u64)> {
        let (models, total) = self.find_page(params).await?;
        Ok((models.into_iter().map(User::from).collect(), total))
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        insert_user(&self.db, user).await
    }

    async fn update(&self, id: Uuid, changes: UserChanges) -> AppResult<User> {
        let user = UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = user.into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(email) = changes.email {
            active.email = Set(email);
        }
        if let Some(password_hash) = changes.password_hash {
            active.password_hash = Set(password_hash);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.or_conflict("Email")?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
