use actix_web::{put, web, Responder};
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::content::application::domain::sections::{
    SectionContent, SectionValidationError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::SectionResponseDto;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpsertContentDto {
    pub content: Value,
}

#[utoipa::path(
    put,
    path = "/api/portfolio-content/{section}",
    params(("section" = String, Path, description = "Section name, e.g. hero")),
    request_body = UpsertContentDto,
    responses(
        (status = 200, description = "Section created or replaced"),
        (status = 400, description = "Content does not match the section's shape"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "content"
)]
#[put("/api/portfolio-content/{section}")]
pub async fn upsert_section(
    state: web::Data<AppState>,
    _admin: AuthenticatedAdmin,
    path: web::Path<String>,
    body: web::Json<UpsertContentDto>,
) -> impl Responder {
    let section = path.into_inner();

    let content = match SectionContent::parse(&section, &body.content) {
        Ok(content) => content,
        Err(SectionValidationError::NotAnObject) => {
            return ApiResponse::bad_request("Content must be a JSON object");
        }
        Err(e) => {
            return ApiResponse::validation_failed("Invalid content data", vec![e.to_string()]);
        }
    };

    let canonical = content.to_value().to_string();

    match state.content_repo.upsert(&section, &canonical).await {
        Ok(stored) => ApiResponse::ok(SectionResponseDto::from_entity(&stored)),
        Err(e) => {
            error!("Failed to upsert content section {section}: {e}");
            ApiResponse::internal_error("Failed to update portfolio content")
        }
    }
}
