pub mod env {
    pub const JWT_SECRET: &str = "JWT_SECRET";
    pub const SESSION_TTL_SECONDS: &str = "SESSION_TTL_SECONDS";
    pub const SESSION_COOKIE_NAME: &str = "SESSION_COOKIE_NAME";
    pub const SESSION_COOKIE_SECURE: &str = "SESSION_COOKIE_SECURE";
    pub const UPSTREAM_API_URL: &str = "UPSTREAM_API_URL";
    pub const UPSTREAM_TIMEOUT_SECONDS: &str = "UPSTREAM_TIMEOUT_SECONDS";
    pub const LISTEN_ADDR: &str = "LISTEN_ADDR";
}

pub mod defaults {
    pub const SESSION_TTL_SECONDS: i64 = 8 * 60 * 60;
    pub const SESSION_COOKIE_NAME: &str = "session";
    pub const UPSTREAM_API_URL: &str = "http://localhost:8000/api";
    pub const UPSTREAM_TIMEOUT_SECONDS: u64 = 10;
    pub const LISTEN_ADDR: &str = "0.0.0.0:3000";
}
