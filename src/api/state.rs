//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;
use crate::schema::{create_schema, lists, AuthConfig, Schema};
use crate::services::{ServiceContainer, Services};
use crate::session::{SessionConfig, StatelessSessions};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<dyn ServiceContainer>,
    /// Token signing and cookie policy
    pub sessions: Arc<StatelessSessions>,
    /// Declared lists, served by the admin metadata endpoint
    pub schema: Arc<Schema>,
    pub database: Arc<Database>,
}

impl AppState {
    /// Build the schema and auth declaration, check them, and wire services.
    ///
    /// # Errors
    /// Fails when the list declarations or the auth declaration are inconsistent.
    pub fn from_config(database: Arc<Database>, config: &Config) -> AppResult<Self> {
        let schema = create_schema(lists::all())?;
        let auth_config = AuthConfig::default();
        auth_config.validate(&schema)?;

        let sessions = StatelessSessions::new(SessionConfig::from(config));
        let services = Services::from_connection(
            database.get_connection(),
            sessions.clone(),
            auth_config,
        );

        Ok(Self::new(Arc::new(services), sessions, schema, database))
    }

    /// Create state with manually injected services.
    pub fn new(
        services: Arc<dyn ServiceContainer>,
        sessions: StatelessSessions,
        schema: Schema,
        database: Arc<Database>,
    ) -> Self {
        Self {
            services,
            sessions: Arc::new(sessions),
            schema: Arc::new(schema),
            database,
        }
    }
}
