//! Session cookies with JWT tokens.
//!
//! A visitor who opens the gate receives a signed `gotham_session` cookie.
//! The cookie carries no identity; it only marks the browser as having
//! passed the gate.

use axum::http::{header, HeaderMap};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "gotham_session";

/// Session management error
#[derive(Debug, Error)]
pub enum SessionError {
    /// JWT encoding failed
    #[error("Failed to encode JWT: {0}")]
    JwtEncode(#[from] jsonwebtoken::errors::Error),

    /// Token expired
    #[error("Session token expired")]
    TokenExpired,

    /// Invalid token
    #[error("Invalid session token")]
    InvalidToken,
}

/// JWT claims for session tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Always "visitor"
    pub sub: String,

    /// Issued at timestamp (Unix epoch)
    pub iat: u64,

    /// Expiration timestamp (Unix epoch), absent when sessions never expire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

/// Session manager handles JWT token generation and validation
pub struct SessionManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_secs: Option<u64>,
}

impl SessionManager {
    /// Create a new session manager with the given secret and optional expiry
    pub fn new(secret: &str, expiry_secs: Option<u64>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_secs,
        }
    }

    /// Issue a token for a visitor who just passed the gate
    pub fn generate_token(&self) -> Result<String, SessionError> {
        let now = now_secs();
        let claims = SessionClaims {
            sub: "visitor".to_string(),
            iat: now,
            exp: self.expiry_secs.map(|secs| now + secs),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Validate a session token and extract claims
    pub fn validate_token(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let mut validation = Validation::default();
        if self.expiry_secs.is_none() {
            validation.required_spec_claims.clear();
        }

        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::TokenExpired,
                _ => SessionError::InvalidToken,
            })?;

        Ok(token_data.claims)
    }

    /// Whether the request carries a valid session cookie
    pub fn has_valid_session(&self, headers: &HeaderMap) -> bool {
        token_from_headers(headers)
            .map(|token| self.validate_token(token).is_ok())
            .unwrap_or(false)
    }

    /// `Set-Cookie` value carrying `token`
    pub fn session_cookie(&self, token: &str) -> String {
        let mut cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, token);
        if let Some(secs) = self.expiry_secs {
            cookie.push_str(&format!("; Max-Age={}", secs));
        }
        cookie
    }
}

/// `Set-Cookie` value that removes the session cookie
pub fn clear_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

/// Read the session token from the request's `Cookie` headers
pub fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, token)| token)
        .filter(|token| !token.is_empty())
}

fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
