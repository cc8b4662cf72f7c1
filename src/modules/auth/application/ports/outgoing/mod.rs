pub mod admin_repository;
pub mod password_hasher;
pub mod token_provider;
