//! Error types for the motion core.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable reason attached to a [`ValidationError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationCode {
    OutOfRange,
    NotFinite,
}

/// A single field-level rejection, shaped for API responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub code: ValidationCode,
    pub message: String,
    /// camelCase field name, e.g. `"stiffness"`.
    pub path: String,
}

/// Every violation found in one parameter set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub(crate) fn push(&mut self, err: ValidationError) {
        self.0.push(err);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("invalid motion parameters: {0}")]
    Validation(ValidationErrors),
    #[error("unknown {kind} '{value}'")]
    UnknownName { kind: &'static str, value: String },
}
