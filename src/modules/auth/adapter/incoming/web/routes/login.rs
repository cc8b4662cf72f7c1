use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::modules::auth::application::use_cases::login_admin::LoginError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequestDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponseDto {
    pub token: String,
    pub username: String,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseDto),
        (status = 400, description = "Missing credentials"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
#[post("/api/auth/login")]
pub async fn login(state: web::Data<AppState>, body: web::Json<LoginRequestDto>) -> impl Responder {
    let payload = body.into_inner();

    if payload.username.trim().is_empty() || payload.password.is_empty() {
        return ApiResponse::bad_request("Username and password are required");
    }

    match state
        .login_admin_use_case
        .execute(payload.username.trim(), &payload.password)
        .await
    {
        Ok(outcome) => {
            let message = if outcome.must_change_password {
                "Login successful. Password change required."
            } else {
                "Login successful"
            };
            HttpResponse::Ok().json(LoginResponseDto {
                token: outcome.token,
                username: outcome.username,
                message: message.to_string(),
            })
        }
        Err(LoginError::InvalidCredentials) => ApiResponse::unauthorized("Invalid credentials"),
        Err(e) => {
            error!("Login failed: {e}");
            ApiResponse::internal_error("Login failed")
        }
    }
}
