pub mod bootstrap_admin;
pub mod change_password;
pub mod login_admin;
