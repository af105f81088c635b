//! Error types for the Resolver

use thiserror::Error;

/// Result type alias for resolver operations
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors that can occur while resolving a relationship
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Member id not present in the graph
    #[error("Unknown member: {0}")]
    UnknownMember(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}
