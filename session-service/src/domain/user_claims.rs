use serde::{Deserialize, Serialize};

use super::RoleKey;

/// Identity carried in a session token, before the timing claims are stamped.
///
/// `role` and `role_id` come from different sources (the token issuer and the
/// upstream data model) and nothing here keeps them in agreement. Callers pick
/// the one that is authoritative for their decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(rename = "sub")]
    pub subject: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    #[serde(default)]
    pub approval_level: i64,
}

impl SessionUser {
    pub fn new(subject: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            username: username.into(),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// The role key, if the `role` claim names one we know.
    pub fn role_key(&self) -> Option<RoleKey> {
        self.role.as_deref().and_then(|role| role.parse().ok())
    }
}

/// Decoded payload of a verified session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    #[serde(flatten)]
    pub user: SessionUser,
    pub iat: i64, // Issued at (Unix seconds)
    pub exp: i64, // Expiration time (Unix seconds)
}

impl UserClaims {
    pub fn ttl_seconds(&self) -> i64 {
        self.exp - self.iat
    }
}
