use actix_web::{get, web, Responder};
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::AppState;

use super::SectionResponseDto;

#[utoipa::path(
    get,
    path = "/api/portfolio-content/{section}",
    params(("section" = String, Path, description = "Section name, e.g. hero")),
    responses(
        (status = 200, description = "Section content, or an empty object if never written")
    ),
    tag = "content"
)]
#[get("/api/portfolio-content/{section}")]
pub async fn get_section(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let section = path.into_inner();

    match state.content_repo.find_by_section(&section).await {
        Ok(Some(content)) => ApiResponse::ok(SectionResponseDto::from_entity(&content)),
        Ok(None) => ApiResponse::ok(SectionResponseDto::empty(&section)),
        Err(e) => {
            error!("Failed to fetch portfolio content section {section}: {e}");
            ApiResponse::internal_error("Failed to fetch portfolio content")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::sample_content;
    use crate::tests::support::stubs::StubContentRepository;
    use crate::tests::support::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_get_section_returns_stored_content() {
        let state = TestAppStateBuilder::new()
            .with_content_repo(Arc::new(StubContentRepository::with_sections(vec![
                sample_content(
                    "507f1f77bcf86cd799439031",
                    "about",
                    serde_json::json!({"title": "About Me", "description": "Hello"}),
                ),
            ])))
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_section)).await;
        let req = test::TestRequest::get().uri("/api/portfolio-content/about").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["section"], "about");
        assert_eq!(body["content"]["title"], "About Me");
        assert_eq!(body["id"], "507f1f77bcf86cd799439031");
    }

    #[actix_web::test]
    async fn test_get_unwritten_section_is_empty_object_not_404() {
        let state = TestAppStateBuilder::new().build();

        let app = test::init_service(App::new().app_data(state).service(get_section)).await;
        let req = test::TestRequest::get().uri("/api/portfolio-content/hero").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["section"], "hero");
        assert_eq!(body["content"], serde_json::json!({}));
        assert!(body.get("id").is_none());
    }

    #[actix_web::test]
    async fn test_get_section_database_failure_is_500() {
        let state = TestAppStateBuilder::new()
            .with_content_repo(Arc::new(StubContentRepository::failing()))
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_section)).await;
        let req = test::TestRequest::get().uri("/api/portfolio-content/hero").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
