use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;

const TEST_SECRET: &str = "FAKE_JWT_SECRET_DO_NOT_USE_1234567890";
const TEST_ADMIN_ID: &str = "507f1f77bcf86cd799439011";

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig::new(TEST_SECRET.to_string(), 3600))
}

/// Token provider app data in the shape `AuthenticatedAdmin` extracts from.
pub fn test_token_provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(Arc::new(test_jwt_service()) as Arc<dyn TokenProvider + Send + Sync>)
}

/// `Authorization` header value holding a freshly issued admin token.
pub fn bearer_token() -> String {
    let token = test_jwt_service()
        .issue_token(TEST_ADMIN_ID, "admin")
        .expect("test token should always issue");
    format!("Bearer {token}")
}
