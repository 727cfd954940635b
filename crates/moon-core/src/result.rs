//! Convenience result type alias for moon-lib.

use crate::error::AppError;

/// A specialized `Result` type for moon-lib operations.
pub type AppResult<T> = Result<T, AppError>;
