use std::env;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts::{defaults, env as keys};

/// Process configuration, read once at startup and shared read-only.
#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    session_ttl_seconds: i64,
    session_cookie_name: String,
    session_cookie_secure: bool,
    upstream_api_url: String,
    upstream_timeout_seconds: u64,
    listen_addr: String,
}

impl Config {
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
    pub fn session_ttl_seconds(&self) -> i64 {
        self.session_ttl_seconds
    }
    pub fn session_cookie_name(&self) -> &str {
        &self.session_cookie_name
    }
    pub fn session_cookie_secure(&self) -> bool {
        self.session_cookie_secure
    }
    pub fn upstream_api_url(&self) -> &str {
        &self.upstream_api_url
    }
    pub fn upstream_timeout_seconds(&self) -> u64 {
        self.upstream_timeout_seconds
    }
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Load from the process environment (and `.env` in dev).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup(keys::JWT_SECRET).ok_or(ConfigError::Missing(keys::JWT_SECRET))?;
        let mut config = Self::with_secret(jwt_secret)?;

        if let Some(raw) = lookup(keys::SESSION_TTL_SECONDS) {
            let ttl = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::Invalid(keys::SESSION_TTL_SECONDS))?;
            config = config.with_session_ttl_seconds(ttl)?;
        }
        if let Some(name) = lookup(keys::SESSION_COOKIE_NAME) {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(keys::SESSION_COOKIE_NAME));
            }
            config.session_cookie_name = name;
        }
        if let Some(raw) = lookup(keys::SESSION_COOKIE_SECURE) {
            config.session_cookie_secure = parse_bool(&raw)
                .ok_or(ConfigError::Invalid(keys::SESSION_COOKIE_SECURE))?;
        }
        if let Some(url) = lookup(keys::UPSTREAM_API_URL) {
            config.upstream_api_url = url;
        }
        if let Some(raw) = lookup(keys::UPSTREAM_TIMEOUT_SECONDS) {
            config.upstream_timeout_seconds = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid(keys::UPSTREAM_TIMEOUT_SECONDS))?;
        }
        if let Some(addr) = lookup(keys::LISTEN_ADDR) {
            config.listen_addr = addr;
        }

        Ok(config)
    }

    /// Defaults for everything except the secret.
    pub fn with_secret(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let jwt_secret = secret.into();
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid(keys::JWT_SECRET));
        }

        Ok(Self {
            jwt_secret,
            session_ttl_seconds: defaults::SESSION_TTL_SECONDS,
            session_cookie_name: defaults::SESSION_COOKIE_NAME.to_owned(),
            session_cookie_secure: true,
            upstream_api_url: defaults::UPSTREAM_API_URL.to_owned(),
            upstream_timeout_seconds: defaults::UPSTREAM_TIMEOUT_SECONDS,
            listen_addr: defaults::LISTEN_ADDR.to_owned(),
        })
    }

    /// Session lifetime; must be positive.
    pub fn with_session_ttl_seconds(mut self, ttl: i64) -> Result<Self, ConfigError> {
        if ttl <= 0 {
            return Err(ConfigError::Invalid(keys::SESSION_TTL_SECONDS));
        }
        self.session_ttl_seconds = ttl;
        Ok(self)
    }

    pub fn with_session_cookie_secure(mut self, secure: bool) -> Self {
        self.session_cookie_secure = secure;
        self
    }

    pub fn with_upstream_api_url(mut self, url: impl Into<String>) -> Self {
        self.upstream_api_url = url.into();
        self
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
