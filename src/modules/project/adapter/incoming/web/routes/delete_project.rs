use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepositoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Project not found")
    ),
    security(("bearer_auth" = [])),
    tag = "projects"
)]
#[delete("/api/projects/{id}")]
pub async fn delete_project(
    state: web::Data<AppState>,
    _admin: AuthenticatedAdmin,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match state.project_repo.delete(&id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(ProjectRepositoryError::NotFound) => ApiResponse::not_found("Project not found"),
        Err(e) => {
            error!("Failed to delete project {id}: {e}");
            ApiResponse::internal_error("Failed to delete project")
        }
    }
}
