use std::fmt;

use thiserror::Error;

/// Ordered collection of constraint-violation descriptions.
///
/// Violations are recorded in the order the constraints are declared and
/// rendered joined by `"; "`, so a failure message always names every
/// violated field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, description: impl Into<String>) {
        self.0.push(description.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns `Ok(value)` when no violations were recorded, otherwise the
    /// collected violations as a validation error.
    pub fn into_result<T>(self, value: T) -> Result<T> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(BridgeError::Validation(self))
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("; "))
    }
}

impl From<Violations> for BridgeError {
    fn from(violations: Violations) -> Self {
        BridgeError::Validation(violations)
    }
}

/// Error taxonomy for both conversion pipelines.
///
/// `Validation` means the input did not match its declared shape;
/// `MissingHeader` means a shape-valid message was semantically incomplete.
/// Callers distinguish the two by matching on the variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BridgeError {
    #[error("{0}")]
    Validation(Violations),
    #[error("Invalid HL7 message: missing MSH segment.")]
    MissingHeader,
}

pub type Result<T> = std::result::Result<T, BridgeError>;
