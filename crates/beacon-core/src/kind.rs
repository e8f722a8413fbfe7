use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Outward message for failures that must not leak internal detail
pub const MASKED_MESSAGE: &str = "it's not you it's me";

/// Semantic failure category, independent of transport
///
/// The set is closed: every kind maps to exactly one status code, and the
/// mapping plus the exposure policy below match exhaustively, so adding a
/// kind fails compilation until both are updated. Wire names are
/// SCREAMING_SNAKE_CASE (`NOT_FOUND`, `INVALID_ARGUMENT`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    Canceled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
}

impl ErrorKind {
    /// HTTP status code for this kind
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Canceled | Self::DeadlineExceeded => StatusCode::REQUEST_TIMEOUT,
            Self::Unknown | Self::Internal | Self::DataLoss => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidArgument | Self::OutOfRange => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::Unimplemented => StatusCode::NOT_FOUND,
            Self::AlreadyExists | Self::Aborted => StatusCode::CONFLICT,
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::ResourceExhausted => StatusCode::TOO_MANY_REQUESTS,
            Self::FailedPrecondition => StatusCode::PRECONDITION_FAILED,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
        }
    }

    /// Whether the outward message is replaced by [`MASKED_MESSAGE`]
    ///
    /// `UNKNOWN` and `INTERNAL` describe unexpected failures whose messages
    /// tend to carry internal detail.
    #[must_use]
    pub const fn masks_message(&self) -> bool {
        matches!(self, Self::Unknown | Self::Internal)
    }

    /// Whether attached metadata is exposed in the response
    ///
    /// Only kinds whose detail is caller-actionable pass metadata through;
    /// everything else drops it.
    #[must_use]
    pub const fn exposes_metadata(&self) -> bool {
        matches!(self, Self::InvalidArgument | Self::AlreadyExists | Self::FailedPrecondition)
    }
}
