//! Domain Layer - Error Type
//!
//! Common error type for all fallible operations in the crate.

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone)]
pub enum DomainError {
    /// Durable slot read/write failure
    Storage(String),
    /// Payload could not be encoded or decoded
    Serialization(String),
    /// Remote directory fetch failure (transport or non-success status)
    Fetch(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
            DomainError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            DomainError::Fetch(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
