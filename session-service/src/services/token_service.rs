//! Session token issuance and verification.
//!
//! `TokenService` signs the portal's session tokens (HS256 over
//! header.payload) and verifies them on every request. It is built once from
//! the immutable `Config` and shared through an `Arc` without locking: the
//! key material never changes after construction.
//!
//! Verification is all-or-nothing. A malformed, forged or expired token yields
//! `None` and the reason is only logged, so callers never learn why a token
//! was turned away.
use std::sync::Arc;

use axum_extra::extract::CookieJar;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::{SessionUser, SigningKeys, UserClaims, VerifyFailure};
use crate::utils::config::{Config, ConfigError};
use crate::utils::consts::defaults;

#[derive(Clone)]
pub struct TokenService {
    keys: Arc<SigningKeys>,
    cookie_name: String,
}

#[derive(Debug, Error)]
pub enum IssueError {
    #[error("session ttl must be positive, got {0}")]
    InvalidTtl(i64),

    #[error("session ttl overflows the expiry timestamp")]
    ExpiryOverflow,

    #[error("failed to sign session token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl TokenService {
    /// The secret was already validated when `Config` was built.
    pub fn new(config: &Config) -> Self {
        Self {
            keys: Arc::new(SigningKeys::from_secret(config.jwt_secret().as_bytes())),
            cookie_name: config.session_cookie_name().to_owned(),
        }
    }

    /// Standalone instance reading the default cookie name.
    pub fn from_secret(secret: &str) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::Invalid("JWT_SECRET"));
        }
        Ok(Self {
            keys: Arc::new(SigningKeys::from_secret(secret.as_bytes())),
            cookie_name: defaults::SESSION_COOKIE_NAME.to_owned(),
        })
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Sign a session token for `user`, valid for `ttl_seconds` from now.
    pub async fn issue(&self, user: &SessionUser, ttl_seconds: i64) -> Result<String, IssueError> {
        self.issue_at(user, ttl_seconds, Utc::now())
    }

    pub fn issue_at(
        &self,
        user: &SessionUser,
        ttl_seconds: i64,
        now: DateTime<Utc>,
    ) -> Result<String, IssueError> {
        if ttl_seconds <= 0 {
            return Err(IssueError::InvalidTtl(ttl_seconds));
        }

        let iat = now.timestamp();
        let exp = iat
            .checked_add(ttl_seconds)
            .ok_or(IssueError::ExpiryOverflow)?;

        let claims = UserClaims {
            user: user.clone(),
            iat,
            exp,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            self.keys.encoding_key(),
        )
        .map_err(IssueError::from)
    }

    /// Verify signature and expiry, returning the claims only if both hold.
    pub async fn verify(&self, token: &str) -> Option<UserClaims> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Option<UserClaims> {
        match self.check(token, now) {
            Ok(claims) => Some(claims),
            Err(reason) => {
                tracing::debug!(%reason, "session token rejected");
                None
            }
        }
    }

    fn check(&self, token: &str, now: DateTime<Utc>) -> Result<UserClaims, VerifyFailure> {
        let mut validation = Validation::new(Algorithm::HS256);
        // exp is compared below against `now`, with no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = decode::<UserClaims>(token, self.keys.decoding_key(), &validation)?.claims;

        if now.timestamp() >= claims.exp {
            return Err(VerifyFailure::Expired);
        }
        Ok(claims)
    }

    /// Read the payload of a token signed by someone else, without checking
    /// its signature or expiry.
    ///
    /// Only for display-level fields forwarded from the upstream identity
    /// provider. Never an authentication decision.
    pub fn decode_unverified<T: DeserializeOwned>(token: &str) -> Option<T> {
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        match decode::<T>(token, &DecodingKey::from_secret(&[]), &validation) {
            Ok(data) => Some(data.claims),
            Err(err) => {
                tracing::debug!(error = %err, "could not decode upstream token");
                None
            }
        }
    }

    /// Who is calling, according to the session cookie in `jar`.
    pub async fn current_user(&self, jar: &CookieJar) -> Option<UserClaims> {
        let cookie = jar.get(&self.cookie_name)?;
        self.verify(cookie.value()).await
    }
}
