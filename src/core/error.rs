//! Error types for engine operations.
//!
//! Every error is local to the call that produced it: a failed mutation
//! leaves the world exactly as it was.

use thiserror::Error;

/// Errors that can occur while building or mutating a world.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Construction or settings parameters are unusable.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// Square size/mass must be positive and finite, position finite.
    #[error("invalid body: {0}")]
    InvalidBody(String),
    /// Force index does not address a stored force.
    #[error("force index {index} out of range (count: {count})")]
    IndexOutOfRange { index: usize, count: usize },
    /// Text input did not parse to a finite number.
    #[error("`{input}` is not a finite number")]
    InvalidNumber { input: String },
    /// Spawn refused because it overlaps an existing square.
    #[error("square at ({x}, {y}) overlaps an existing square")]
    SpawnOverlap { x: f32, y: f32 },
}

pub type EngineResult<T> = Result<T, EngineError>;
