use actix_web::{post, web, Responder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::experience::application::domain::entities::NewExperience;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceDto {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
}

fn validate(dto: &CreateExperienceDto) -> Vec<String> {
    let mut errors = Vec::new();
    if dto.title.trim().is_empty() {
        errors.push("Title is required".to_string());
    }
    if dto.company.trim().is_empty() {
        errors.push("Company is required".to_string());
    }
    if dto.description.trim().is_empty() {
        errors.push("Description is required".to_string());
    }
    errors
}

#[utoipa::path(
    post,
    path = "/api/experiences",
    request_body = CreateExperienceDto,
    responses(
        (status = 201, description = "Experience created"),
        (status = 400, description = "Invalid experience data"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "experiences"
)]
#[post("/api/experiences")]
pub async fn create_experience(
    state: web::Data<AppState>,
    _admin: AuthenticatedAdmin,
    body: web::Json<CreateExperienceDto>,
) -> impl Responder {
    let dto = body.into_inner();

    let errors = validate(&dto);
    if !errors.is_empty() {
        return ApiResponse::validation_failed("Invalid experience data", errors);
    }

    let new_experience = NewExperience {
        title: dto.title.trim().to_string(),
        company: dto.company.trim().to_string(),
        location: dto.location,
        description: dto.description,
        technologies: dto.technologies,
        start_date: dto.start_date,
        end_date: dto.end_date,
        current: dto.current,
    };

    match state.experience_repo.create(new_experience).await {
        Ok(experience) => ApiResponse::created(experience),
        Err(e) => {
            error!("Failed to create experience: {e}");
            ApiResponse::internal_error("Failed to create experience")
        }
    }
}
