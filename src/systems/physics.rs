//! Physics System - force accumulation and time integration
//!
//! Key concepts:
//! - All forces are summed once per update into one global acceleration
//! - Dynamic squares integrate with semi-implicit Euler (velocity, then position)
//! - Static squares are never touched
//! - No collisions, no walls; optional off-screen culling only

mod forces;
mod integrate;
mod cull;

pub use cull::cull_offscreen;
pub use forces::total_acceleration;
pub use integrate::{integrate_squares, step_square, IntegrationCounts};
