use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::error::InternalError;
use actix_web::{dev::Payload, web, Error, FromRequest, HttpRequest};
use tracing::debug;

use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Identity of the caller, proven by a valid bearer token. Handlers that take
/// this extractor are admin-only.
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub admin_id: String,
    pub username: String,
}

fn extract_token_from_header(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn unauthorized(message: &str) -> Error {
    InternalError::from_response(message.to_string(), ApiResponse::unauthorized(message)).into()
}

impl FromRequest for AuthenticatedAdmin {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(token) = extract_token_from_header(req) else {
            return ready(Err(unauthorized("No token provided")));
        };

        let Some(provider) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        else {
            return ready(Err(unauthorized("No token provided")));
        };

        match provider.verify_token(token) {
            Ok(claims) => ready(Ok(AuthenticatedAdmin {
                admin_id: claims.sub,
                username: claims.username,
            })),
            Err(e) => {
                debug!("Token verification failed: {e}");
                ready(Err(unauthorized("Invalid token")))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use actix_web::test::TestRequest;

    fn provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let service = JwtTokenService::new(JwtConfig::new(
            "FAKE_JWT_SECRET_DO_NOT_USE_1234567890".to_string(),
            3600,
        ));
        web::Data::new(Arc::new(service) as Arc<dyn TokenProvider + Send + Sync>)
    }

    #[actix_web::test]
    async fn test_valid_bearer_token_yields_identity() {
        let provider = provider();
        let token = provider
            .issue_token("507f1f77bcf86cd799439011", "admin")
            .unwrap();

        let req = TestRequest::default()
            .app_data(provider)
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_http_request();

        let admin = AuthenticatedAdmin::from_request(&req, &mut Payload::None)
            .await
            .expect("extraction should succeed");

        assert_eq!(admin.admin_id, "507f1f77bcf86cd799439011");
        assert_eq!(admin.username, "admin");
    }

    #[actix_web::test]
    async fn test_missing_header_is_rejected() {
        let req = TestRequest::default().app_data(provider()).to_http_request();

        let result = AuthenticatedAdmin::from_request(&req, &mut Payload::None).await;
        assert!(result.is_err());
    }

    #[actix_web::test]
    async fn test_non_bearer_scheme_is_rejected() {
        let req = TestRequest::default()
            .app_data(provider())
            .insert_header(("Authorization", "Basic YWRtaW46YWRtaW4="))
            .to_http_request();

        let result = AuthenticatedAdmin::from_request(&req, &mut Payload::None).await;
        assert!(result.is_err());
    }

    #[actix_web::test]
    async fn test_invalid_token_is_rejected() {
        let req = TestRequest::default()
            .app_data(provider())
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_http_request();

        let result = AuthenticatedAdmin::from_request(&req, &mut Payload::None).await;
        assert!(result.is_err());
    }
}
