use serde_json::Value;

use crate::domain::{role_map_entry, RoleId, RoleKey, FALLBACK_ROUTE};

/// Resolves role capabilities for request handlers.
///
/// `StaticRoleMap` is the built-in table; a richer policy source can stand in
/// behind the same trait without touching the handlers.
pub trait RoleResolver: Send + Sync {
    fn key_for(&self, id: RoleId) -> Option<RoleKey>;

    fn label_for(&self, id: RoleId) -> Option<&str>;

    /// Landing route for `role`. Total: `None` gets the fallback route.
    fn home_route(&self, role: Option<RoleKey>) -> &str;

    fn key_for_value(&self, id: &Value) -> Option<RoleKey> {
        RoleId::coerce(id).and_then(|id| self.key_for(id))
    }

    fn label_for_value(&self, id: &Value) -> Option<&str> {
        RoleId::coerce(id).and_then(|id| self.label_for(id))
    }

    fn home_route_for(&self, role: Option<&str>) -> &str {
        self.home_route(role.and_then(|role| role.parse().ok()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRoleMap;

impl RoleResolver for StaticRoleMap {
    fn key_for(&self, id: RoleId) -> Option<RoleKey> {
        role_map_entry(id).map(|entry| entry.key)
    }

    fn label_for(&self, id: RoleId) -> Option<&str> {
        role_map_entry(id).map(|entry| entry.label)
    }

    fn home_route(&self, role: Option<RoleKey>) -> &str {
        role.map_or(FALLBACK_ROUTE, |role| role.home_route())
    }
}

/// Resolver behind the free functions below.
const DEFAULT_RESOLVER: &StaticRoleMap = &StaticRoleMap;

/// Role key for an untyped role id, or `None` if it is not in the table.
pub fn role_id_to_key(id: &Value) -> Option<RoleKey> {
    DEFAULT_RESOLVER.key_for_value(id)
}

pub fn role_id_to_label(id: &Value) -> Option<&'static str> {
    DEFAULT_RESOLVER.label_for_value(id)
}

/// Landing route for a role key as found in session claims.
pub fn home_route_for_role(role: Option<&str>) -> &'static str {
    DEFAULT_RESOLVER.home_route_for(role)
}
