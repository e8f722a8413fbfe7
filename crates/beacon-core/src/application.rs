use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ErrorKind;

/// Caller-supplied detail attached to an error, in insertion order
pub type Metadata = IndexMap<String, MetadataValue>;

/// A metadata entry: a single string or a list of strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_owned())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for MetadataValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// A failure classified into the taxonomy at the point it was detected
///
/// Immutable after construction; carried up the call stack unchanged and
/// consumed once by translation and once by span recording. The cause, when
/// present, exists for diagnostics only — it is recorded on the active span
/// and never surfaces in a response body.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApplicationError {
    message: String,
    kind: ErrorKind,
    metadata: Option<Metadata>,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ApplicationError {
    /// Create an error with a message and kind
    pub fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
            metadata: None,
            cause: None,
        }
    }

    /// Attach metadata
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Reclassify an arbitrary underlying error into the taxonomy
    ///
    /// The original error is kept as the cause so span recording can prefer
    /// it over this wrapper.
    pub fn from_cause(
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
        message: impl Into<String>,
        kind: ErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            metadata: None,
            cause: Some(cause.into()),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub const fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    /// The wrapped underlying error, if this error reclassified one
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}
