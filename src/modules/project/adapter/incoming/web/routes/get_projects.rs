use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "All projects, newest first")
    ),
    tag = "projects"
)]
#[get("/api/projects")]
pub async fn get_projects(state: web::Data<AppState>) -> impl Responder {
    match state.project_repo.find_all().await {
        Ok(projects) => ApiResponse::ok(projects),
        Err(e) => {
            error!("Failed to fetch projects: {e}");
            ApiResponse::internal_error("Failed to fetch projects")
        }
    }
}
