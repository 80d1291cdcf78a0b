use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;

use crate::{
    app_state::AppState, domain::LogoutResponse, utils::clear_cookie, utils::CurrentUser,
};

/// Always succeeds; an absent or invalid session is simply cleared.
pub async fn logout(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    jar: CookieJar,
) -> (CookieJar, impl IntoResponse) {
    if let Some(claims) = &user {
        tracing::info!(subject = %claims.user.subject, "session ended");
    }

    let jar = jar.add(clear_cookie(
        state.token_service.cookie_name(),
        state.config.session_cookie_secure(),
    ));

    (
        jar,
        (
            StatusCode::OK,
            Json(LogoutResponse {
                message: "Logged out successfully".to_string(),
            }),
        ),
    )
}
