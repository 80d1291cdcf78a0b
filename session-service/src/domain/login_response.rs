use serde::{Deserialize, Serialize};

use super::SessionUser;

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct LoginResponse {
    pub user: SessionUser,
    pub redirect: String,
}
