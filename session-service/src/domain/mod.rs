pub mod current_user_response;
pub mod login_request;
pub mod login_response;
pub mod logout_response;
pub mod role;
pub mod signing_keys;
pub mod upstream;
pub mod user_claims;
pub mod verify_failure;

pub use current_user_response::*;
pub use login_request::*;
pub use login_response::*;
pub use logout_response::*;
pub use role::*;
pub use signing_keys::*;
pub use upstream::*;
pub use user_claims::*;
pub use verify_failure::*;
