use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::{LoginRequestBody, LoginResponse, UpstreamIdentityClaims};
use crate::errors::LoginError;
use crate::services::{TokenService, UpstreamAuthError};
use crate::utils::cookie_helpers::session_cookie;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequestBody>,
) -> Result<(CookieJar, impl IntoResponse), LoginError> {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }

    let upstream = state
        .upstream_auth
        .login(&request)
        .await
        .map_err(|err| match err {
            UpstreamAuthError::InvalidCredentials => LoginError::InvalidCredentials,
            other => {
                tracing::warn!(error = %other, "upstream login failed");
                LoginError::UpstreamUnavailable
            }
        })?;

    // The upstream token is only read for its `role` claim; trust comes from
    // the upstream having accepted the credentials.
    let identity: UpstreamIdentityClaims =
        TokenService::decode_unverified(&upstream.access_token).unwrap_or_default();

    let user = upstream.user.to_session_user(&identity).ok_or_else(|| {
        tracing::warn!(username = %request.username, "upstream user record has no id");
        LoginError::UpstreamUnavailable
    })?;

    let ttl = state.config.session_ttl_seconds();
    let token = state
        .token_service
        .issue(&user, ttl)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "failed to issue session token");
            LoginError::InternalServerError
        })?;

    // Routing follows the issuer's role key, not the upstream roleId.
    let redirect = state
        .role_resolver
        .home_route_for(user.role.as_deref())
        .to_owned();

    tracing::info!(subject = %user.subject, role = ?user.role, "session issued");

    let jar = jar.add(session_cookie(
        state.token_service.cookie_name(),
        &token,
        ttl,
        state.config.session_cookie_secure(),
    ));

    Ok((
        jar,
        (StatusCode::OK, Json(LoginResponse { user, redirect })),
    ))
}
