use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::UserClaims;
use crate::errors::SessionError;

/// The verified caller, if any. Never rejects.
pub struct CurrentUser(pub Option<UserClaims>);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(CurrentUser(state.token_service.current_user(&jar).await))
    }
}

/// The verified caller; rejects with 401 when there is none.
pub struct RequireUser(pub UserClaims);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = SessionError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state)
            .await
            .unwrap_or(CurrentUser(None));
        user.map(RequireUser).ok_or(SessionError::Unauthenticated)
    }
}
