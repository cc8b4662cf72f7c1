use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::experience::application::ports::outgoing::experience_repository::ExperienceRepositoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/experiences/{id}",
    params(("id" = String, Path, description = "Experience id")),
    responses(
        (status = 204, description = "Experience deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Experience not found")
    ),
    security(("bearer_auth" = [])),
    tag = "experiences"
)]
#[delete("/api/experiences/{id}")]
pub async fn delete_experience(
    state: web::Data<AppState>,
    _admin: AuthenticatedAdmin,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match state.experience_repo.delete(&id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(ExperienceRepositoryError::NotFound) => ApiResponse::not_found("Experience not found"),
        Err(e) => {
            error!("Failed to delete experience {id}: {e}");
            ApiResponse::internal_error("Failed to delete experience")
        }
    }
}
