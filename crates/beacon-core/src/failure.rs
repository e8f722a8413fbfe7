use http::StatusCode;
use serde_json::{Value, json};

use crate::{ApplicationError, MASKED_MESSAGE, ValidationError};

/// Any failure a request handler can surface, tagged by shape
///
/// Translation dispatches exhaustively over this enum; a new shape cannot be
/// added without deciding how it maps to a response.
#[derive(Debug)]
pub enum Failure {
    /// A failure classified into the taxonomy
    Application(ApplicationError),
    /// A structured input-validation failure
    Validation(ValidationError),
    /// Any other error; its message never reaches the caller
    Other(anyhow::Error),
    /// A non-error value surfaced where an error was expected
    Value(Value),
}

impl From<ApplicationError> for Failure {
    fn from(error: ApplicationError) -> Self {
        Self::Application(error)
    }
}

impl From<ValidationError> for Failure {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<anyhow::Error> for Failure {
    fn from(error: anyhow::Error) -> Self {
        Self::Other(error)
    }
}

/// Transport-level description of a failed request
///
/// Produced fresh per failure and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorResponse {
    /// Status line plus a `{message, metadata?}` JSON body
    Message {
        status: StatusCode,
        message: String,
        metadata: Option<Value>,
    },
    /// A raw value sent through as the body with no status override
    Passthrough(Value),
}

impl Failure {
    /// Translate this failure into its transport response
    ///
    /// Total, pure, and idempotent: every shape maps to exactly one
    /// descriptor and nothing is mutated along the way.
    #[must_use]
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            Self::Application(error) => {
                let kind = error.kind();
                let message = if kind.masks_message() {
                    MASKED_MESSAGE.to_owned()
                } else {
                    error.message().to_owned()
                };
                let metadata = if kind.exposes_metadata() {
                    error.metadata().and_then(|metadata| serde_json::to_value(metadata).ok())
                } else {
                    None
                };

                ErrorResponse::Message {
                    status: kind.status_code(),
                    message,
                    metadata,
                }
            }
            Self::Validation(ValidationError::Form { errors }) => ErrorResponse::Message {
                status: StatusCode::BAD_REQUEST,
                message: "The form has errors".to_owned(),
                metadata: Some(json!({ "type": "formErrors", "formErrors": errors })),
            },
            Self::Validation(ValidationError::Fields { errors }) => {
                let mut metadata = serde_json::Map::new();
                metadata.insert("type".to_owned(), Value::from("fieldErrors"));
                for (field, messages) in errors {
                    metadata.insert(field.clone(), json!(messages));
                }

                ErrorResponse::Message {
                    status: StatusCode::BAD_REQUEST,
                    message: "The fields have errors".to_owned(),
                    metadata: Some(Value::Object(metadata)),
                }
            }
            Self::Other(_) => ErrorResponse::Message {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: MASKED_MESSAGE.to_owned(),
                metadata: None,
            },
            Self::Value(value) => ErrorResponse::Passthrough(value.clone()),
        }
    }
}
