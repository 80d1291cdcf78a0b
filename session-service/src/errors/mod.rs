mod login;
mod session;

pub use login::*;
pub use session::*;
