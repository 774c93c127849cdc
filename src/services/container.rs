//! Service Container - Centralized service access.
//!
//! Handlers depend on the `ServiceContainer` trait, never on the concrete
//! managers, so routers can be tested against hand-built containers.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, ProductImageManager, ProductImageService, ProductManager,
    ProductService, UserManager, UserService,
};
use crate::infra::{Persistence, UnitOfWork};
use crate::schema::AuthConfig;
use crate::session::StatelessSessions;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn products(&self) -> Arc<dyn ProductService>;

    fn product_images(&self) -> Arc<dyn ProductImageService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    product_service: Arc<dyn ProductService>,
    product_image_service: Arc<dyn ProductImageService>,
}

impl Services {
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        product_service: Arc<dyn ProductService>,
        product_image_service: Arc<dyn ProductImageService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            product_service,
            product_image_service,
        }
    }

    /// Wire every manager over one shared Unit of Work
    pub fn from_unit_of_work<U: UnitOfWork + 'static>(
        uow: Arc<U>,
        sessions: StatelessSessions,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), sessions, auth_config)),
            user_service: Arc::new(UserManager::new(uow.clone())),
            product_service: Arc::new(ProductManager::new(uow.clone())),
            product_image_service: Arc::new(ProductImageManager::new(uow)),
        }
    }

    /// Create service container from a database connection
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        sessions: StatelessSessions,
        auth_config: AuthConfig,
    ) -> Self {
        Self::from_unit_of_work(Arc::new(Persistence::new(db)), sessions, auth_config)
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }

    fn product_images(&self) -> Arc<dyn ProductImageService> {
        self.product_image_service.clone()
    }
}
