use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experiences/{id}",
    params(("id" = String, Path, description = "Experience id")),
    responses(
        (status = 200, description = "Experience found"),
        (status = 404, description = "Experience not found")
    ),
    tag = "experiences"
)]
#[get("/api/experiences/{id}")]
pub async fn get_single_experience(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match state.experience_repo.find_by_id(&id).await {
        Ok(Some(experience)) => ApiResponse::ok(experience),
        Ok(None) => ApiResponse::not_found("Experience not found"),
        Err(e) => {
            error!("Failed to fetch experience {id}: {e}");
            ApiResponse::internal_error("Failed to fetch experience")
        }
    }
}
