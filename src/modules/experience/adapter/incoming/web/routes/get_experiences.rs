use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experiences",
    responses(
        (status = 200, description = "All experiences, most recent first")
    ),
    tag = "experiences"
)]
#[get("/api/experiences")]
pub async fn get_experiences(state: web::Data<AppState>) -> impl Responder {
    match state.experience_repo.find_all().await {
        Ok(experiences) => ApiResponse::ok(experiences),
        Err(e) => {
            error!("Failed to fetch experiences: {e}");
            ApiResponse::internal_error("Failed to fetch experiences")
        }
    }
}
