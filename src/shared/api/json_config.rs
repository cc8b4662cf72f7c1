use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Rejected JSON bodies (missing fields, wrong types, malformed JSON) become
/// a 400 with the deserializer detail instead of actix's default plain text.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::validation_failed("Invalid input", vec![detail]),
        )
        .into()
    })
}
