use actix_web::{error::JsonPayloadError, HttpRequest};

use crate::core::AppError;
use crate::middleware::request_id::request_id;

const REQUEST_ERROR_TARGET: &str = "adsplit::request";

/// Turns JSON extractor failures into the standard error envelope
///
/// Registered through `web::JsonConfig`, so an unreadable body answers
/// `400 {"error": {"message", "code"}}` like every other validation error.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(
        target: REQUEST_ERROR_TARGET,
        request_id = request_id(req).as_deref().unwrap_or("-"),
        path = %req.path(),
        error = %err,
        "Rejected request body"
    );

    AppError::validation(format!("Invalid request body: {}", err)).into()
}
