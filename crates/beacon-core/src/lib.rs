//! Error classification and translation for Beacon
//!
//! A closed taxonomy of semantic failure kinds, the structured error values
//! that carry them, and a pure translator from any failure shape to a
//! transport response descriptor. This crate knows nothing about axum or
//! tracing; the hosting layer wires it to both.

mod application;
mod failure;
mod kind;
mod validation;

pub use application::{ApplicationError, Metadata, MetadataValue};
pub use failure::{ErrorResponse, Failure};
pub use kind::{ErrorKind, MASKED_MESSAGE};
pub use validation::ValidationError;
