use actix_web::{post, web, HttpResponse, Responder};
use email_address::EmailAddress;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::modules::contact::application::ports::outgoing::contact_notifier::ContactMessage;
use crate::AppState;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ContactFormDto {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

fn validate(dto: &ContactFormDto) -> Vec<String> {
    let mut errors = Vec::new();
    if dto.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }
    if !EmailAddress::is_valid(dto.email.trim()) {
        errors.push("A valid email address is required".to_string());
    }
    if dto.message.trim().is_empty() {
        errors.push("Message is required".to_string());
    }
    errors
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactFormDto,
    responses(
        (status = 200, description = "Message relayed to the portfolio owner"),
        (status = 400, description = "Invalid form data"),
        (status = 500, description = "Delivery failed")
    ),
    tag = "contact"
)]
#[post("/api/contact")]
pub async fn send_message(
    state: web::Data<AppState>,
    body: web::Json<ContactFormDto>,
) -> impl Responder {
    let dto = body.into_inner();

    let errors = validate(&dto);
    if !errors.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": "Invalid form data",
            "errors": errors,
        }));
    }

    let message = ContactMessage {
        name: dto.name.trim().to_string(),
        email: dto.email.trim().to_string(),
        subject: dto.subject.filter(|s| !s.trim().is_empty()),
        message: dto.message,
    };

    match state.contact_notifier.notify(&message).await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Message sent successfully! I'll get back to you soon.",
        })),
        Err(e) => {
            error!("Failed to relay contact message: {e}");
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "message": "Failed to send message. Please try again later.",
            }))
        }
    }
}
