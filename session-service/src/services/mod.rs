pub mod hashmap_upstream_auth;
pub mod role_resolver;
pub mod token_service;
pub mod upstream_auth;

pub use hashmap_upstream_auth::*;
pub use role_resolver::*;
pub use token_service::*;
pub use upstream_auth::*;
