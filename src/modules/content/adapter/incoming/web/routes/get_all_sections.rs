use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

use super::SectionResponseDto;

#[utoipa::path(
    get,
    path = "/api/portfolio-content",
    responses(
        (status = 200, description = "All stored content sections")
    ),
    tag = "content"
)]
#[get("/api/portfolio-content")]
pub async fn get_all_sections(state: web::Data<AppState>) -> impl Responder {
    match state.content_repo.find_all().await {
        Ok(sections) => {
            let body: Vec<SectionResponseDto> =
                sections.iter().map(SectionResponseDto::from_entity).collect();
            ApiResponse::ok(body)
        }
        Err(e) => {
            error!("Failed to fetch portfolio content sections: {e}");
            ApiResponse::internal_error("Failed to fetch portfolio content")
        }
    }
}
