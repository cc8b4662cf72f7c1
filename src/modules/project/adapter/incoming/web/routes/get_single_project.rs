use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(("id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project found"),
        (status = 404, description = "Project not found")
    ),
    tag = "projects"
)]
#[get("/api/projects/{id}")]
pub async fn get_single_project(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match state.project_repo.find_by_id(&id).await {
        Ok(Some(project)) => ApiResponse::ok(project),
        Ok(None) => ApiResponse::not_found("Project not found"),
        Err(e) => {
            error!("Failed to fetch project {id}: {e}");
            ApiResponse::internal_error("Failed to fetch project")
        }
    }
}
