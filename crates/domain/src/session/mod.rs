mod aggregate;
mod dice;
mod errors;
mod identity;

// Re-export aggregate
pub use aggregate::{Session, TARGET_SCORE};

// Re-export dice types
pub use dice::{BUST_FACE, DieFace, MAX_FACE, MIN_FACE};

// Re-export error types
pub use errors::SessionError;

// Re-export identity types
pub use identity::{MAX_IDENTITY_LENGTH, PlayerIdentity};
