//! Stateless sessions: the whole session lives in a signed token carried by
//! a cookie (or a bearer header), nothing is stored server side.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{Config, BEARER_TOKEN_PREFIX, SESSION_COOKIE_NAME};
use crate::errors::AppResult;

/// Session cookie policy
#[derive(Clone)]
pub struct SessionConfig {
    /// How long a session stays valid, in seconds
    pub max_age_seconds: i64,
    secret: Vec<u8>,
    /// Mark the cookie `Secure`
    pub secure: bool,
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("max_age_seconds", &self.max_age_seconds)
            .field("secret", &"[REDACTED]")
            .field("secure", &self.secure)
            .finish()
    }
}

impl SessionConfig {
    pub fn new(max_age_seconds: i64, secret: impl Into<Vec<u8>>, secure: bool) -> Self {
        Self {
            max_age_seconds,
            secret: secret.into(),
            secure,
        }
    }
}

impl From<&Config> for SessionConfig {
    fn from(config: &Config) -> Self {
        Self::new(
            config.session_max_age_seconds,
            config.cookie_secret_bytes(),
            config.cookie_secure,
        )
    }
}

/// Signed session payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Id of the signed-in item
    pub sub: Uuid,
    /// List the item belongs to
    pub list_key: String,
    pub iat: i64,
    pub exp: i64,
}

/// Token-in-cookie session strategy
#[derive(Clone)]
pub struct StatelessSessions {
    config: SessionConfig,
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl StatelessSessions {
    pub fn new(config: SessionConfig) -> Self {
        let encoding = EncodingKey::from_secret(&config.secret);
        let decoding = DecodingKey::from_secret(&config.secret);
        Self {
            config,
            encoding,
            decoding,
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn max_age_seconds(&self) -> i64 {
        self.config.max_age_seconds
    }

    /// Sign a new session token for an item.
    pub fn start(&self, list_key: &str, item_id: Uuid) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: item_id,
            list_key: list_key.to_string(),
            iat: now,
            exp: now + self.config.max_age_seconds,
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify a token. Bad signatures, expired and malformed tokens all
    /// read as "no session".
    pub fn get(&self, token: &str) -> Option<SessionClaims> {
        match decode::<SessionClaims>(token, &self.decoding, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected session token");
                None
            }
        }
    }

    /// Session token from the cookie, falling back to a bearer header.
    pub fn token_from(&self, jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
        if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
            return Some(cookie.value().to_string());
        }

        headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix(BEARER_TOKEN_PREFIX))
            .map(str::to_string)
    }

    /// `Set-Cookie` value carrying a session token.
    pub fn cookie(&self, token: &str) -> String {
        let cookie = Cookie::build((SESSION_COOKIE_NAME, token.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.config.secure)
            .max_age(time::Duration::seconds(self.config.max_age_seconds))
            .build();

        cookie.to_string()
    }

    /// `Set-Cookie` value that clears the session cookie.
    pub fn removal_cookie(&self) -> String {
        let mut cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.config.secure)
            .build();
        cookie.make_removal();
        cookie.to_string()
    }
}
