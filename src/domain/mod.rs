//! Domain types: forces, squares and world configuration.

pub mod config;
pub mod force;
pub mod square;
pub mod vec2;

pub use config::{MassPolicy, WorldConfig};
pub use force::{Force, ForceSnapshot};
pub use square::{BodyKind, Square};
pub use vec2::Vec2;
