pub(crate) mod current_user;
pub(crate) mod health;
pub(crate) mod login;
pub(crate) mod logout;

// re-export items from sub-modules
pub use current_user::*;
pub use health::*;
pub use login::*;
pub use logout::*;
