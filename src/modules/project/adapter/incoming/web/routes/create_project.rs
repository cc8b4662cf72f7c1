use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::project::application::domain::entities::NewProject;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectDto {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub featured: bool,
}

fn validate(dto: &CreateProjectDto) -> Vec<String> {
    let mut errors = Vec::new();
    if dto.title.trim().is_empty() {
        errors.push("Title is required".to_string());
    }
    if dto.description.trim().is_empty() {
        errors.push("Description is required".to_string());
    }
    if dto.technologies.is_empty() {
        errors.push("At least one technology is required".to_string());
    }
    errors
}

#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Project created"),
        (status = 400, description = "Invalid project data"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "projects"
)]
#[post("/api/projects")]
pub async fn create_project(
    state: web::Data<AppState>,
    _admin: AuthenticatedAdmin,
    body: web::Json<CreateProjectDto>,
) -> impl Responder {
    let dto = body.into_inner();

    let errors = validate(&dto);
    if !errors.is_empty() {
        return ApiResponse::validation_failed("Invalid project data", errors);
    }

    let new_project = NewProject {
        title: dto.title.trim().to_string(),
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

    match state.project_repo.create(new_project).await {
        Ok(project) => ApiResponse::created(project),
        Err(e) => {
            error!("Failed to create project: {e}");
            ApiResponse::internal_error("Failed to create project")
        }
    }
}
