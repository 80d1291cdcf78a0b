use axum::extract::State;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{CurrentUserResponse, RoleId};
use crate::utils::RequireUser;

pub async fn current_user(
    State(state): State<AppState>,
    RequireUser(claims): RequireUser,
) -> Json<CurrentUserResponse> {
    // The label describes the upstream roleId; the home route follows the
    // issuer's role key. The two are not required to agree.
    let role_label = claims
        .user
        .role_id
        .map(RoleId::new)
        .and_then(|id| state.role_resolver.label_for(id))
        .map(str::to_owned);
    let home = state
        .role_resolver
        .home_route_for(claims.user.role.as_deref())
        .to_owned();

    Json(CurrentUserResponse {
        user: claims,
        role_label,
        home,
    })
}
