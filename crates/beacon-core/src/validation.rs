use indexmap::IndexMap;
use thiserror::Error;

/// Structured failure from an input-validation collaborator
///
/// Two shapes: whole-object (form) errors and per-field errors. A report
/// that carries any form-level errors never emits the field shape — form
/// errors take precedence, enforced by [`ValidationError::flattened`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the form has errors")]
    Form { errors: Vec<String> },
    #[error("the fields have errors")]
    Fields { errors: IndexMap<String, Vec<String>> },
}

impl ValidationError {
    /// Build from a flattened validation report, form errors winning
    #[must_use]
    pub fn flattened(form_errors: Vec<String>, field_errors: IndexMap<String, Vec<String>>) -> Self {
        if form_errors.is_empty() {
            Self::Fields { errors: field_errors }
        } else {
            Self::Form { errors: form_errors }
        }
    }

    /// A single form-level error
    pub fn form(error: impl Into<String>) -> Self {
        Self::Form {
            errors: vec![error.into()],
        }
    }

    /// A single field-level error
    pub fn field(name: impl Into<String>, error: impl Into<String>) -> Self {
        let mut errors = IndexMap::new();
        errors.insert(name.into(), vec![error.into()]);
        Self::Fields { errors }
    }
}
