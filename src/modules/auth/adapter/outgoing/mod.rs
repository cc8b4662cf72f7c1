pub mod admin_repository_mongo;
pub mod jwt;
pub mod security;
