mod change_password;
mod login;
mod verify;

pub use change_password::*;
pub use login::*;
pub use verify::*;
