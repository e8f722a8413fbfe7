use axum::Json;
use axum::response::{IntoResponse, Response};
use beacon_core::{ErrorResponse, Failure};
use http::StatusCode;
use serde_json::json;

/// Convert a failure into its HTTP response
///
/// This is the error seam: the failure is recorded on the active span first
/// (preferring a wrapped cause over its wrapper), then translated into the
/// wire shape `{message, metadata?}`. Passthrough values are sent as-is
/// with no status override.
pub fn failure_response(failure: &Failure) -> Response {
    beacon_telemetry::record_failure(failure);

    match failure.to_error_response() {
        ErrorResponse::Message {
            status,
            message,
            metadata,
        } => {
            tracing::debug!(%status, "request failed");
            let body = match metadata {
                Some(metadata) => json!({ "message": message, "metadata": metadata }),
                None => json!({ "message": message }),
            };
            (status, Json(body)).into_response()
        }
        ErrorResponse::Passthrough(value) => (StatusCode::OK, Json(value)).into_response(),
    }
}
