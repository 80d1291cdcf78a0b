use jsonwebtoken::errors::{Error, ErrorKind};
use thiserror::Error;

/// Why a session token was rejected.
///
/// Only ever logged. Callers of the token service see a plain `None`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VerifyFailure {
    #[error("malformed token")]
    Malformed,

    #[error("bad signature")]
    BadSignature,

    #[error("token expired")]
    Expired,
}

impl From<Error> for VerifyFailure {
    fn from(err: Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => VerifyFailure::BadSignature,
            ErrorKind::ExpiredSignature => VerifyFailure::Expired,
            _ => VerifyFailure::Malformed,
        }
    }
}
