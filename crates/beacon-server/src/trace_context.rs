use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use http::HeaderValue;

/// Middleware that stamps the active span's trace context onto every
/// outgoing response, success or failure
///
/// Runs inside the request span, after the response is built. Responses are
/// left untouched when no span is active.
pub async fn trace_context_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    if let Some(traceparent) = beacon_telemetry::current_traceparent()
        && let Ok(value) = HeaderValue::from_str(&traceparent)
    {
        response
            .headers_mut()
            .insert(beacon_telemetry::TRACEPARENT_HEADER, value);
    }

    response
}
