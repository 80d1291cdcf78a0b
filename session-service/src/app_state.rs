use std::sync::Arc;

use crate::services::{RoleResolver, StaticRoleMap, TokenService, UpstreamAuth};
use crate::utils::Config;

// Everything here is read-only after startup, so no locks.
pub type TokenServiceType = Arc<TokenService>;
pub type RoleResolverType = Arc<dyn RoleResolver>;
pub type UpstreamAuthType = Arc<dyn UpstreamAuth>;
pub type ConfigType = Arc<Config>;

#[derive(Clone)]
pub struct AppState {
    pub config: ConfigType,
    pub token_service: TokenServiceType,
    pub role_resolver: RoleResolverType,
    pub upstream_auth: UpstreamAuthType,
}

impl AppState {
    pub fn new(
        config: ConfigType,
        token_service: TokenServiceType,
        role_resolver: RoleResolverType,
        upstream_auth: UpstreamAuthType,
    ) -> Self {
        Self {
            config,
            token_service,
            role_resolver,
            upstream_auth,
        }
    }

    /// Token service and static role table derived from `config`.
    pub fn from_config(config: Config, upstream_auth: UpstreamAuthType) -> Self {
        let token_service = Arc::new(TokenService::new(&config));
        Self::new(
            Arc::new(config),
            token_service,
            Arc::new(StaticRoleMap),
            upstream_auth,
        )
    }
}
