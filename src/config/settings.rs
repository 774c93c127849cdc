//! Application settings loaded from environment variables.

use axum::http::HeaderValue;
use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_FRONTEND_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_SESSION_MAX_AGE_SECONDS, DEV_COOKIE_SECRET, MIN_COOKIE_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    cookie_secret: String,
    pub session_max_age_seconds: i64,
    pub cookie_secure: bool,
    pub frontend_origins: Vec<String>,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("cookie_secret", &"[REDACTED]")
            .field("session_max_age_seconds", &self.session_max_age_seconds)
            .field("cookie_secure", &self.cookie_secure)
            .field("frontend_origins", &self.frontend_origins)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Fails if COOKIE_SECRET is missing in a release build or shorter than
    /// the minimum length, or if a FRONTEND_URL entry is not a valid origin.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let cookie_secret = match env::var("COOKIE_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("COOKIE_SECRET not set, using insecure default for development");
                DEV_COOKIE_SECRET.to_string()
            }
            Err(_) => {
                return Err(AppError::config(
                    "COOKIE_SECRET environment variable must be set in production",
                ))
            }
        };

        let frontend_origins = parse_origins(
            &env::var("FRONTEND_URL").unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
        );

        Self::new(
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            cookie_secret,
            frontend_origins,
        )
        .map(|config| Self {
            session_max_age_seconds: env::var("SESSION_MAX_AGE_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SESSION_MAX_AGE_SECONDS),
            cookie_secure: env::var("COOKIE_SECURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(!cfg!(debug_assertions)),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            ..config
        })
    }

    /// Build a configuration with defaults for everything but the
    /// connection string, secret and allowed origins.
    pub fn new(
        database_url: impl Into<String>,
        cookie_secret: impl Into<String>,
        frontend_origins: Vec<String>,
    ) -> AppResult<Self> {
        let cookie_secret = cookie_secret.into();
        if cookie_secret.len() < MIN_COOKIE_SECRET_LENGTH {
            return Err(AppError::config(format!(
                "COOKIE_SECRET must be at least {} characters long",
                MIN_COOKIE_SECRET_LENGTH
            )));
        }

        if let Some(bad) = frontend_origins
            .iter()
            .find(|origin| HeaderValue::from_str(origin).is_err())
        {
            return Err(AppError::config(format!("Invalid FRONTEND_URL origin: {:?}", bad)));
        }

        Ok(Self {
            database_url: database_url.into(),
            cookie_secret,
            session_max_age_seconds: DEFAULT_SESSION_MAX_AGE_SECONDS,
            cookie_secure: false,
            frontend_origins,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        })
    }

    /// Get cookie secret bytes for session signing/verification.
    pub fn cookie_secret_bytes(&self) -> &[u8] {
        self.cookie_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Split a comma separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "a-test-cookie-secret-that-is-long-enough";

    #[test]
    fn test_short_secret_rejected() {
        let result = Config::new("sqlite::memory:", "too-short", vec![]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::new("sqlite::memory:", SECRET, vec![]).unwrap();
        assert_eq!(config.session_max_age_seconds, 31_104_000);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert_eq!(config.cookie_secret_bytes(), SECRET.as_bytes());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = Config::new("postgres://user:pw@host/db", SECRET, vec![]).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains(SECRET));
        assert!(!debug.contains("pw@host"));
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let result = Config::new("sqlite::memory:", SECRET, vec!["http://bad\norigin".to_string()]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://a.test, http://b.test,,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(parse_origins("").is_empty());
    }
}
