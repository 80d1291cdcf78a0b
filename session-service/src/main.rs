use std::sync::Arc;
use std::time::Duration;

use session_service::app_state::AppState;
use session_service::services::HttpUpstreamAuth;
use session_service::utils::Config;
use session_service::Application;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().expect("Failed to load config");

    let upstream_auth = HttpUpstreamAuth::new(
        config.upstream_api_url(),
        Duration::from_secs(config.upstream_timeout_seconds()),
    )
    .expect("Failed to build upstream client");

    let address = config.listen_addr().to_owned();
    let app_state = AppState::from_config(config, Arc::new(upstream_auth));

    let app = Application::build(app_state, &address)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
