//! Demo routes raising every failure shape the pipeline classifies
//!
//! Each endpoint surfaces one path through the error seam: a classified
//! application error, a reclassified cause, validation failures (form and
//! field shapes), an unrecognized error, a non-error value, and the two
//! span-only endpoints that record without failing the request.

use std::str::FromStr;
use std::time::Duration;

use axum::Json;
use axum::extract::{Query, RawQuery};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use beacon_core::{ApplicationError, ErrorKind, Failure, ValidationError};
use beacon_telemetry::KeyValue;
use serde::Deserialize;
use serde_json::json;
use tracing::Instrument;

use crate::failure::failure_response;

/// Paths registered by [`router`]; kept in sync with the route table below
/// so the configurable health path can be checked for collisions
pub const RESERVED_PATHS: &[&str] = &[
    "/",
    "/application-error",
    "/application-error-with-cause",
    "/validation-error",
    "/unexpected-error",
    "/non-error",
    "/record-and-swallow",
    "/log",
    "/capturing-a-span",
];

pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/application-error", get(application_error))
        .route("/application-error-with-cause", get(application_error_with_cause))
        .route("/validation-error", get(validation_error))
        .route("/unexpected-error", get(unexpected_error))
        .route("/non-error", get(non_error))
        .route("/record-and-swallow", get(record_and_swallow))
        .route("/log", get(log_event))
        .route("/capturing-a-span", get(capturing_a_span))
}

async fn root() -> Response {
    ().into_response()
}

#[derive(Debug, Deserialize)]
struct ErrorParams {
    code: Option<String>,
}

/// Raise an `ApplicationError` with the kind named in the `code` query
/// parameter; an unusable `code` is itself a validation failure
async fn application_error(Query(params): Query<ErrorParams>) -> Response {
    let kind = match params.code.as_deref().map(ErrorKind::from_str) {
        Some(Ok(kind)) => kind,
        Some(Err(_)) => {
            return failure_response(&Failure::Validation(ValidationError::field(
                "code",
                "must name a known error kind",
            )));
        }
        None => {
            return failure_response(&Failure::Validation(ValidationError::field("code", "is required")));
        }
    };

    failure_response(&Failure::Application(ApplicationError::new(
        "intentionally raising an error from the application",
        kind,
    )))
}

/// Catch an unexpected error and reclassify it into the taxonomy
async fn application_error_with_cause() -> Response {
    let unexpected: Result<(), std::io::Error> =
        Err(std::io::Error::other("not an application error, simulating an unexpected failure"));

    match unexpected {
        Ok(()) => ().into_response(),
        Err(cause) => failure_response(&Failure::Application(ApplicationError::from_cause(
            cause,
            "capturing and reclassifying an unexpected failure",
            ErrorKind::AlreadyExists,
        ))),
    }
}

#[derive(Debug, Deserialize)]
struct ValidationParams {
    foo: Option<String>,
}

/// Validate the query: an empty query string is a form-level failure, a
/// `foo` that is not a number is a field-level failure
async fn validation_error(RawQuery(raw): RawQuery, Query(params): Query<ValidationParams>) -> Response {
    if raw.as_deref().is_none_or(str::is_empty) {
        return failure_response(&Failure::Validation(ValidationError::form("the query string is empty")));
    }

    let Some(foo) = params.foo else {
        return failure_response(&Failure::Validation(ValidationError::field("foo", "is required")));
    };

    match foo.parse::<i64>() {
        Ok(number) => Json(json!({ "foo": number })).into_response(),
        Err(_) => failure_response(&Failure::Validation(ValidationError::field("foo", "expected a number"))),
    }
}

/// Surface an error that was never classified
async fn unexpected_error() -> Response {
    failure_response(&Failure::Other(anyhow::anyhow!("simulating an unhandled failure")))
}

/// Surface a non-error value where an error was expected
async fn non_error() -> Response {
    failure_response(&Failure::Value(json!({ "outcome": "not an error" })))
}

/// Record an exception on the active span without failing the request
async fn record_and_swallow() -> Response {
    let error = std::io::Error::other("recorded but not surfaced");
    beacon_telemetry::record_exception(&error);
    ().into_response()
}

/// Open an explicit child span, annotate it, and record an exception from
/// deep inside nested awaited calls, where the span resolves implicitly
async fn capturing_a_span() -> Response {
    tokio::time::sleep(Duration::from_millis(5)).await;

    async {
        beacon_telemetry::set_span_attribute("abc.foo", "bar");
        beacon_telemetry::set_span_attribute("abc.version", "1.2.3");
        tokio::time::sleep(Duration::from_millis(5)).await;
        beacon_telemetry::add_span_event("some-log", vec![KeyValue::new("foo", "bar")]);
        tokio::time::sleep(Duration::from_millis(5)).await;
        deeply_nested_recording().await;
    }
    .instrument(tracing::info_span!("capture demo span"))
    .await;

    tokio::time::sleep(Duration::from_millis(5)).await;
    ().into_response()
}

/// Resolves the active span without it being passed down the call chain
async fn deeply_nested_recording() {
    tokio::time::sleep(Duration::from_millis(5)).await;
    beacon_telemetry::record_exception(&std::io::Error::other("raised deep inside the child span"));
}

/// Add a span event for a successful response
async fn log_event() -> Response {
    beacon_telemetry::add_span_event(
        "if-log-is-needed-for-success-responses",
        vec![KeyValue::new("foo", "bar")],
    );
    ().into_response()
}
