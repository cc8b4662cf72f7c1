use actix_web::{put, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::experience::application::domain::entities::ExperiencePatch;
use crate::modules::experience::application::ports::outgoing::experience_repository::ExperienceRepositoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExperienceDto {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub current: Option<bool>,
}

fn validate(dto: &UpdateExperienceDto) -> Vec<String> {
    let mut errors = Vec::new();
    if matches!(&dto.title, Some(t) if t.trim().is_empty()) {
        errors.push("Title cannot be empty".to_string());
    }
    if matches!(&dto.company, Some(c) if c.trim().is_empty()) {
        errors.push("Company cannot be empty".to_string());
    }
    if matches!(&dto.description, Some(d) if d.trim().is_empty()) {
        errors.push("Description cannot be empty".to_string());
    }
    errors
}

#[utoipa::path(
    put,
    path = "/api/experiences/{id}",
    params(("id" = String, Path, description = "Experience id")),
    request_body = UpdateExperienceDto,
    responses(
        (status = 200, description = "Experience updated"),
        (status = 400, description = "Invalid experience data"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Experience not found")
    ),
    security(("bearer_auth" = [])),
    tag = "experiences"
)]
#[put("/api/experiences/{id}")]
pub async fn update_experience(
    state: web::Data<AppState>,
    _admin: AuthenticatedAdmin,
    path: web::Path<String>,
    body: web::Json<UpdateExperienceDto>,
) -> impl Responder {
    let id = path.into_inner();
    let dto = body.into_inner();

    let errors = validate(&dto);
    if !errors.is_empty() {
        return ApiResponse::validation_failed("Invalid experience data", errors);
    }

    let patch = ExperiencePatch {
        title: dto.title.map(|t| t.trim().to_string()),
        company: dto.company.map(|c| c.trim().to_string()),
        location: dto.location,
        description: dto.description,
        technologies: dto.technologies,
        start_date: dto.start_date,
        end_date: dto.end_date,
        current: dto.current,
    };

    match state.experience_repo.update(&id, patch).await {
        Ok(experience) => ApiResponse::ok(experience),
        Err(ExperienceRepositoryError::NotFound) => ApiResponse::not_found("Experience not found"),
        Err(e) => {
            error!("Failed to update experience {id}: {e}");
            ApiResponse::internal_error("Failed to update experience")
        }
    }
}
