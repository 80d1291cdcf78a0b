use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("not authenticated")]
    Unauthenticated,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            SessionError::Unauthenticated => StatusCode::UNAUTHORIZED,
        };

        (status, self.to_string()).into_response()
    }
}
