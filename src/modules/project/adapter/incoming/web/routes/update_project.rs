use actix_web::{put, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::project::application::domain::entities::ProjectPatch;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepositoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub featured: Option<bool>,
}

fn validate(dto: &UpdateProjectDto) -> Vec<String> {
    let mut errors = Vec::new();
    if matches!(&dto.title, Some(t) if t.trim().is_empty()) {
        errors.push("Title cannot be empty".to_string());
    }
    if matches!(&dto.description, Some(d) if d.trim().is_empty()) {
        errors.push("Description cannot be empty".to_string());
    }
    if matches!(&dto.technologies, Some(t) if t.is_empty()) {
        errors.push("At least one technology is required".to_string());
    }
    errors
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    params(("id" = String, Path, description = "Project id")),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Project updated"),
        (status = 400, description = "Invalid project data"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Project not found")
    ),
    security(("bearer_auth" = [])),
    tag = "projects"
)]
#[put("/api/projects/{id}")]
pub async fn update_project(
    state: web::Data<AppState>,
    _admin: AuthenticatedAdmin,
    path: web::Path<String>,
    body: web::Json<UpdateProjectDto>,
) -> impl Responder {
    let id = path.into_inner();
    let dto = body.into_inner();

    let errors = validate(&dto);
    if !errors.is_empty() {
        return ApiResponse::validation_failed("Invalid project data", errors);
    }

    let patch = ProjectPatch {
        title: dto.title.map(|t| t.trim().to_string()),
        description: dto.description,
        long_description: dto.long_description,
        technologies: dto.technologies,
        github_url: dto.github_url,
        live_url: dto.live_url,
        image_url: dto.image_url,
        start_date: dto.start_date,
        end_date: dto.end_date,
        featured: dto.featured,
    };

    match state.project_repo.update(&id, patch).await {
        Ok(project) => ApiResponse::ok(project),
        Err(ProjectRepositoryError::NotFound) => ApiResponse::not_found("Project not found"),
        Err(e) => {
            error!("Failed to update project {id}: {e}");
            ApiResponse::internal_error("Failed to update project")
        }
    }
}
