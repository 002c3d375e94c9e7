//! Systems that advance world state: the clock and the physics pass.

pub mod clock;
pub mod physics;
