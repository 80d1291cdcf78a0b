use std::collections::HashMap;

use super::{UpstreamAuth, UpstreamAuthError};
use crate::domain::{LoginRequestBody, UpstreamLogin};

/// In-memory stand-in for the upstream login endpoint, for tests and local runs.
#[derive(Default)]
pub struct HashmapUpstreamAuth {
    users: HashMap<String, (String, UpstreamLogin)>,
    unavailable: bool,
}

impl HashmapUpstreamAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, password: &str, login: UpstreamLogin) -> Self {
        self.users
            .insert(login.user.username.clone(), (password.to_owned(), login));
        self
    }

    /// Every login fails as if the upstream answered 503.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }
}

#[async_trait::async_trait]
impl UpstreamAuth for HashmapUpstreamAuth {
    async fn login(&self, credentials: &LoginRequestBody) -> Result<UpstreamLogin, UpstreamAuthError> {
        if self.unavailable {
            return Err(UpstreamAuthError::UnexpectedStatus(503));
        }
        match self.users.get(&credentials.username) {
            Some((password, login)) if *password == credentials.password => Ok(login.clone()),
            _ => Err(UpstreamAuthError::InvalidCredentials),
        }
    }
}
