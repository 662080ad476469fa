mod errors;

// Re-export error types
pub use errors::{DomainError, ValidationError};
