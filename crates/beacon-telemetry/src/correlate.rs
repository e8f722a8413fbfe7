//! Correlation between failures and the active tracing span
//!
//! The "active span" is the current `tracing` span, which the hosting layer
//! enters for the whole request and the OpenTelemetry layer mirrors as an
//! OTel span. That makes span lookup request-scoped across `.await` points
//! without any global state. Recording goes through the
//! [`OpenTelemetrySpanExt`] methods on the `tracing` span — the context
//! returned by `context()` only carries span identifiers, not a recordable
//! span, so it is used solely for trace-context derivation. Every function
//! here is a no-op without an active span and never panics: correlation
//! failures must not affect the response.

use std::borrow::Cow;

use beacon_core::Failure;
use opentelemetry::KeyValue;
use opentelemetry::trace::TraceContextExt;
use opentelemetry_semantic_conventions::attribute::EXCEPTION_MESSAGE;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Response header carrying the active span's trace context
pub const TRACEPARENT_HEADER: &str = "traceparent";

/// Record a failure as an exception on the active span
///
/// A classified error that wraps a cause records the cause — the original
/// failure — rather than the reclassification wrapper. Non-error values are
/// never recorded.
pub fn record_failure(failure: &Failure) {
    match failure {
        Failure::Application(error) => match error.cause() {
            Some(cause) => record_exception(cause),
            None => record_exception(error),
        },
        Failure::Validation(error) => record_exception(error),
        Failure::Other(error) => {
            let cause: &(dyn std::error::Error + 'static) = error.as_ref();
            record_exception(cause);
        }
        Failure::Value(_) => {}
    }
}

/// Record an arbitrary error as an exception event on the active span
pub fn record_exception(error: &dyn std::error::Error) {
    tracing::Span::current().add_event(
        "exception",
        vec![KeyValue::new(EXCEPTION_MESSAGE, error.to_string())],
    );
}

/// Add an event with attributes to the active span, if any
pub fn add_span_event(name: impl Into<Cow<'static, str>>, attributes: Vec<KeyValue>) {
    tracing::Span::current().add_event(name, attributes);
}

/// Set an attribute on the active span, if any
pub fn set_span_attribute(key: impl Into<opentelemetry::Key>, value: impl Into<opentelemetry::Value>) {
    tracing::Span::current().set_attribute(key, value);
}

/// W3C trace-context value for the active span
///
/// Format: `00-<32-hex trace id>-<16-hex span id>-<2-hex flags>`. None when
/// no span is active for the current request.
#[must_use]
pub fn current_traceparent() -> Option<String> {
    let context = tracing::Span::current().context();
    let span = context.span();
    let span_context = span.span_context();
    if !span_context.is_valid() {
        return None;
    }

    Some(format!(
        "00-{}-{}-{:02x}",
        span_context.trace_id(),
        span_context.span_id(),
        span_context.trace_flags().to_u8()
    ))
}
