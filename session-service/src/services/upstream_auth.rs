use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::domain::{LoginRequestBody, UpstreamEnvelope, UpstreamLogin};

#[derive(Debug, Error)]
pub enum UpstreamAuthError {
    #[error("upstream rejected the credentials")]
    InvalidCredentials,

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected upstream status {0}")]
    UnexpectedStatus(u16),
}

/// Credential check against the upstream budgeting API.
#[async_trait::async_trait]
pub trait UpstreamAuth: Send + Sync {
    async fn login(&self, credentials: &LoginRequestBody) -> Result<UpstreamLogin, UpstreamAuthError>;
}

pub struct HttpUpstreamAuth {
    client: Client,
    login_url: String,
}

impl HttpUpstreamAuth {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            login_url: format!("{}/auth/login", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait::async_trait]
impl UpstreamAuth for HttpUpstreamAuth {
    async fn login(&self, credentials: &LoginRequestBody) -> Result<UpstreamLogin, UpstreamAuthError> {
        let response = self
            .client
            .post(&self.login_url)
            .json(credentials)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let envelope = response.json::<UpstreamEnvelope<UpstreamLogin>>().await?;
                Ok(envelope.into_inner())
            }
            StatusCode::BAD_REQUEST
            | StatusCode::UNAUTHORIZED
            | StatusCode::FORBIDDEN
            | StatusCode::UNPROCESSABLE_ENTITY => Err(UpstreamAuthError::InvalidCredentials),
            status => Err(UpstreamAuthError::UnexpectedStatus(status.as_u16())),
        }
    }
}
