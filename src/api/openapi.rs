use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::modules::auth::adapter::incoming::web::routes as auth_routes;
use crate::modules::contact::adapter::incoming::web::routes as contact_routes;
use crate::modules::content::adapter::incoming::web::routes as content_routes;
use crate::modules::experience::adapter::incoming::web::routes as experience_routes;
use crate::modules::project::adapter::incoming::web::routes as project_routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Backend API",
        description = "CRUD, content management and contact relay for a personal portfolio site"
    ),
    paths(
        crate::health::health,
        crate::health::readiness,
        auth_routes::login,
        auth_routes::change_password,
        auth_routes::verify,
        project_routes::get_projects,
        project_routes::get_single_project,
        project_routes::create_project,
        project_routes::update_project,
        project_routes::delete_project,
        experience_routes::get_experiences,
        experience_routes::get_single_experience,
        experience_routes::create_experience,
        experience_routes::update_experience,
        experience_routes::delete_experience,
        content_routes::get_all_sections,
        content_routes::get_section,
        content_routes::upsert_section,
        contact_routes::send_message,
    ),
    components(schemas(
        MessageResponse,
        ErrorResponse,
        auth_routes::LoginRequestDto,
        auth_routes::LoginResponseDto,
        auth_routes::ChangePasswordDto,
        project_routes::CreateProjectDto,
        project_routes::UpdateProjectDto,
        experience_routes::CreateExperienceDto,
        experience_routes::UpdateExperienceDto,
        content_routes::SectionResponseDto,
        content_routes::UpsertContentDto,
        contact_routes::ContactFormDto,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin authentication"),
        (name = "projects", description = "Project CRUD"),
        (name = "experiences", description = "Experience CRUD"),
        (name = "content", description = "Page content sections"),
        (name = "contact", description = "Contact form relay"),
        (name = "health", description = "Liveness and readiness"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
