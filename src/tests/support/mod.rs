pub mod app_state_builder;
pub mod auth_helper;
pub mod fixtures;
pub mod stubs;

pub use app_state_builder::TestAppStateBuilder;
pub use auth_helper::{bearer_token, test_token_provider};
