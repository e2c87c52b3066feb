// Errors raised by template instantiation
use thiserror::Error;

/// Failures that stop an instantiation outright. Compatibility problems are
/// never raised; they are reported inside a `ValidationResult`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstantiationError {
    /// Instantiation was requested without a valid validation result.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The template itself is malformed.
    #[error("integrity error: {0}")]
    Integrity(String),
}

impl InstantiationError {
    pub fn undeclared_tag(tag: &str) -> Self {
        InstantiationError::Integrity(format!("component references undeclared tag: {}", tag))
    }
}
