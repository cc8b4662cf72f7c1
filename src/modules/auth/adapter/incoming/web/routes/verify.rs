use actix_web::{get, Responder};
use serde_json::json;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::shared::api::ApiResponse;

/// Token introspection for the admin SPA. The extractor does the actual
/// verification; reaching the handler body means the token is good.
#[utoipa::path(
    get,
    path = "/api/auth/verify",
    responses(
        (status = 200, description = "Token is valid"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
#[get("/api/auth/verify")]
pub async fn verify(admin: AuthenticatedAdmin) -> impl Responder {
    ApiResponse::ok(json!({
        "valid": true,
        "username": admin.username,
        "message": "Token is valid",
    }))
}
