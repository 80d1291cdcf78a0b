use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{RoleId, SessionUser};
use crate::services::role_id_to_key;

/// Successful login as returned by the upstream budgeting API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamLogin {
    pub access_token: String,
    pub user: UpstreamUser,
}

/// The upstream either wraps its payload in `{"data": ...}` or returns it bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UpstreamEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> UpstreamEnvelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            UpstreamEnvelope::Wrapped { data } => data,
            UpstreamEnvelope::Bare(inner) => inner,
        }
    }
}

/// User record from the upstream data model. Ids arrive as numbers or strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamUser {
    pub id: Value,
    pub username: String,
    #[serde(default)]
    pub role_id: Value,
    #[serde(default)]
    pub organization_id: Value,
    #[serde(default)]
    pub department_id: Value,
    #[serde(default)]
    pub approval_level: Option<i64>,
}

/// Fields read from the upstream access token. Not trusted for authentication.
///
/// `sub` is kept untyped: issuers send it as a string or a number.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamIdentityClaims {
    #[serde(default)]
    pub sub: Option<Value>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UpstreamUser {
    /// Builds the identity for our own session token.
    ///
    /// `role` is taken from the upstream token issuer when it names one,
    /// otherwise derived from `role_id`. `role_id` is always the upstream
    /// record's value. Returns `None` when the record has no usable id.
    pub fn to_session_user(&self, identity: &UpstreamIdentityClaims) -> Option<SessionUser> {
        let subject = id_string(&self.id).or_else(|| identity.sub.as_ref().and_then(id_string))?;
        let role = identity
            .role
            .clone()
            .filter(|role| !role.is_empty())
            .or_else(|| role_id_to_key(&self.role_id).map(|key| key.as_str().to_owned()));
        let role_id = match self.role_id {
            Value::Null => None,
            ref other => RoleId::coerce(other).map(|id| id.value()),
        };

        Some(SessionUser {
            subject,
            username: self.username.clone(),
            role,
            role_id,
            organization_id: id_string(&self.organization_id),
            department_id: id_string(&self.department_id),
            approval_level: self.approval_level.unwrap_or_default(),
        })
    }
}

fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
