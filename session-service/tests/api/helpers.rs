use std::sync::Arc;

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::cookie::Jar;
use reqwest::{Client, Response, Url};
use serde::Serialize;
use serde_json::{json, Value};

use session_service::app_state::AppState;
use session_service::domain::{UpstreamLogin, UpstreamUser};
use session_service::services::{HashmapUpstreamAuth, TokenService};
use session_service::utils::Config;
use session_service::Application;

pub const TEST_SECRET: &str = "api-test-secret";
pub const SESSION_TTL_SECONDS: i64 = 600;
pub const PASSWORD: &str = "Passw0rd!";

#[derive(Serialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub cookie_jar: Arc<Jar>,
    pub token_service: TokenService,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_upstream(default_upstream()).await
    }

    pub async fn with_upstream(upstream: HashmapUpstreamAuth) -> Self {
        let config = Config::with_secret(TEST_SECRET)
            .expect("failed to build test config")
            .with_session_ttl_seconds(SESSION_TTL_SECONDS)
            .expect("test TTL must be positive")
            // Secure cookies are never sent back over plain http.
            .with_session_cookie_secure(false);

        let app_state = AppState::from_config(config, Arc::new(upstream));
        let token_service = app_state.token_service.as_ref().clone();

        let app = Application::build(app_state, "127.0.0.1:0")
            .await
            .expect("failed binding to an ephemeral port");
        let address = app.address.clone();

        tokio::spawn(async move {
            if let Err(e) = app.run().await {
                eprintln!("Test server error: {}", e);
            }
        });

        let cookie_jar = Arc::new(Jar::default());
        let http_client = Client::builder()
            .cookie_provider(cookie_jar.clone())
            .build()
            .expect("failed to build http client");

        TestApp {
            address,
            http_client,
            cookie_jar,
            token_service,
        }
    }

    pub fn url(&self) -> Url {
        Url::parse(&self.address).expect("Failed to parse URL")
    }

    pub fn set_session_cookie(&self, token: &str) {
        self.cookie_jar.add_cookie_str(
            &format!("{}={}; HttpOnly; SameSite=Lax; Path=/", self.token_service.cookie_name(), token),
            &self.url(),
        );
    }

    pub async fn get_health(&self) -> Response {
        self.http_client
            .get(format!("{}/health", &self.address))
            .send()
            .await
            .expect("Failed to execute health request.")
    }

    pub async fn login(&self, username: &str, password: &str) -> Response {
        let body = LoginBody {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        self.post_login(&body).await
    }

    pub async fn post_login<Body: Serialize>(&self, body: &Body) -> Response {
        self.http_client
            .post(format!("{}/api/auth/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    pub async fn logout(&self) -> Response {
        self.http_client
            .post(format!("{}/api/auth/logout", &self.address))
            .send()
            .await
            .expect("Failed to execute logout request.")
    }

    pub async fn me(&self) -> Response {
        self.http_client
            .get(format!("{}/api/auth/me", &self.address))
            .send()
            .await
            .expect("Failed to execute me request.")
    }
}

/// A token as the upstream identity provider would sign it, with its own key.
pub fn upstream_token(claims: Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"upstream-signing-key"),
    )
    .expect("failed to sign upstream token")
}

pub fn upstream_login(id: Value, username: &str, role_id: Value, token_role: Option<&str>) -> UpstreamLogin {
    // The id goes into `sub` as-is, so numeric ids give a numeric `sub`.
    let sub = id.clone();
    let claims = match token_role {
        Some(role) => json!({"sub": sub, "role": role}),
        None => json!({"sub": sub}),
    };
    UpstreamLogin {
        access_token: upstream_token(claims),
        user: UpstreamUser {
            id,
            username: username.to_owned(),
            role_id,
            organization_id: json!("org-1"),
            department_id: json!(12),
            approval_level: Some(2),
        },
    }
}

/// alice: issuer says director, bob: role only via roleId 6 (hr),
/// carol: roleId outside the table and no issuer role,
/// frank: issuer says planning while roleId 4 would be director.
pub fn default_upstream() -> HashmapUpstreamAuth {
    HashmapUpstreamAuth::new()
        .with_user(PASSWORD, upstream_login(json!(42), "alice", json!(4), Some("director")))
        .with_user(PASSWORD, upstream_login(json!("u-7"), "bob", json!("6"), None))
        .with_user(PASSWORD, upstream_login(json!(8), "carol", json!(99), None))
        .with_user(PASSWORD, upstream_login(json!(51), "frank", json!(4), Some("planning")))
}

pub fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_owned)
        .collect()
}
