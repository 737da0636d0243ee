//! Animation error types

use thiserror::Error;

/// Errors raised by the animation entry points
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    /// A numeric argument was non-finite or out of range
    #[error("Invalid argument `{name}`: {value}")]
    InvalidArgument { name: &'static str, value: f64 },

    /// The easing name is not one of the known curves
    #[error("Unknown easing curve: {0}")]
    UnknownEasing(String),
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, MotionError>;
