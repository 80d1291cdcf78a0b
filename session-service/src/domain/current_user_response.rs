use serde::{Deserialize, Serialize};

use super::UserClaims;

#[derive(Deserialize, Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub user: UserClaims,
    pub role_label: Option<String>,
    pub home: String,
}
