//! Core functionality shared by every layer: errors and logging.

pub mod error;
pub mod logging;

pub use error::EngineError;
