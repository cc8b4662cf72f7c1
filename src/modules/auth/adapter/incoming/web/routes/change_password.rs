use actix_web::{post, web, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAdmin;
use crate::modules::auth::application::use_cases::change_password::ChangePasswordError;
use crate::shared::api::ApiResponse;
use crate::AppState;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Validation failed or current password incorrect"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
#[post("/api/auth/change-password")]
pub async fn change_password(
    state: web::Data<AppState>,
    admin: AuthenticatedAdmin,
    body: web::Json<ChangePasswordDto>,
) -> impl Responder {
    let payload = body.into_inner();

    if payload.new_password.len() < MIN_PASSWORD_LEN {
        return ApiResponse::bad_request("New password must be at least 6 characters");
    }

    match state
        .change_password_use_case
        .execute(
            &admin.username,
            &payload.current_password,
            &payload.new_password,
        )
        .await
    {
        Ok(()) => ApiResponse::ok(json!({ "message": "Password changed successfully" })),
        Err(ChangePasswordError::CurrentPasswordIncorrect) => {
            ApiResponse::bad_request("Current password is incorrect")
        }
        Err(ChangePasswordError::AdminNotFound) => ApiResponse::not_found("Admin not found"),
        Err(e) => {
            error!("Password change failed: {e}");
            ApiResponse::internal_error("Failed to change password")
        }
    }
}
