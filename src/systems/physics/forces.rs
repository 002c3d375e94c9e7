use crate::domain::force::Force;
use crate::domain::vec2::Vec2;

/// Sum of every force's acceleration.
///
/// Folded in storage order so a fixed force set always produces the same bits.
#[inline]
pub fn total_acceleration(forces: &[Force]) -> Vec2 {
    forces
        .iter()
        .fold(Vec2::zero(), |acc, force| acc + force.acceleration())
}
