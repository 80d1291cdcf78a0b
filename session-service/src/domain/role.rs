use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Symbolic role used for routing and authorization in the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleKey {
    DepartmentUser,
    DepartmentHead,
    Planning,
    Director,
    Admin,
    Hr,
}

impl RoleKey {
    pub const ALL: [RoleKey; 6] = [
        RoleKey::DepartmentUser,
        RoleKey::DepartmentHead,
        RoleKey::Planning,
        RoleKey::Director,
        RoleKey::Admin,
        RoleKey::Hr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKey::DepartmentUser => "department_user",
            RoleKey::DepartmentHead => "department_head",
            RoleKey::Planning => "planning",
            RoleKey::Director => "director",
            RoleKey::Admin => "admin",
            RoleKey::Hr => "hr",
        }
    }

    /// Landing page after login.
    pub fn home_route(&self) -> &'static str {
        match self {
            RoleKey::DepartmentUser => "/dashboard/department",
            RoleKey::DepartmentHead => "/dashboard/department-head",
            RoleKey::Planning => "/dashboard/planning",
            RoleKey::Director => "/dashboard/director",
            RoleKey::Admin => "/dashboard/admin",
            RoleKey::Hr => "/dashboard/hr",
        }
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role key {0:?}")]
pub struct UnknownRoleKey(pub String);

impl FromStr for RoleKey {
    type Err = UnknownRoleKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownRoleKey(s.to_owned()))
    }
}

/// Where unauthenticated callers and unknown roles are sent.
pub const FALLBACK_ROUTE: &str = "/login";

/// Numeric role identifier as used by the upstream data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleId(i64);

impl RoleId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Numeric coercion of an untyped upstream value.
    ///
    /// Numbers pass through, strings are trimmed and parsed (an empty string
    /// is 0, unsigned `0x`/`0o`/`0b` literals are read in their radix),
    /// booleans are 1/0 and null is 0. Arrays, objects, unparsable strings
    /// and non-finite or fractional numbers yield `None`.
    pub fn coerce(value: &Value) -> Option<Self> {
        let n = match value {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => parse_number(s.trim())?,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Null => 0.0,
            Value::Array(_) | Value::Object(_) => return None,
        };

        if !n.is_finite() || n.fract() != 0.0 {
            return None;
        }
        Some(Self(n as i64))
    }
}

fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(0.0);
    }
    let radix = match s.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return s.parse::<f64>().ok(),
    };
    // No sign after the prefix; from_str_radix would accept one.
    let digits = &s[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok().map(|n| n as f64)
}

impl From<i64> for RoleId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleMapEntry {
    pub id: i64,
    pub key: RoleKey,
    pub label: &'static str,
}

/// Role ids are dense from 1, so `ROLE_MAP[id - 1]` is the entry for `id`.
pub const ROLE_MAP: [RoleMapEntry; 6] = [
    RoleMapEntry { id: 1, key: RoleKey::DepartmentUser, label: "Department User" },
    RoleMapEntry { id: 2, key: RoleKey::DepartmentHead, label: "Department Head" },
    RoleMapEntry { id: 3, key: RoleKey::Planning, label: "Planning" },
    RoleMapEntry { id: 4, key: RoleKey::Director, label: "Director" },
    RoleMapEntry { id: 5, key: RoleKey::Admin, label: "Administrator" },
    RoleMapEntry { id: 6, key: RoleKey::Hr, label: "Human Resources" },
];

pub fn role_map_entry(id: RoleId) -> Option<&'static RoleMapEntry> {
    let index = usize::try_from(id.value().checked_sub(1)?).ok()?;
    ROLE_MAP.get(index)
}
