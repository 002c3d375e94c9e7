use crate::domain::config::MassPolicy;
use crate::domain::square::Square;
use crate::domain::vec2::Vec2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this many squares the rayon split costs more than it saves.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 4096;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntegrationCounts {
    pub integrated: u32,
    pub skipped_static: u32,
}

/// Semi-implicit Euler for one square. Returns false for static squares.
#[inline(always)]
pub fn step_square(square: &mut Square, acceleration: Vec2, dt: f32, mass_policy: MassPolicy) -> bool {
    let accel = match mass_policy {
        MassPolicy::Ignore => acceleration,
        MassPolicy::Divide => acceleration / square.mass(),
    };

    let Some((pos, velocity)) = square.motion_mut() else {
        return false;
    };

    *velocity += accel * dt;
    *pos += *velocity * dt;
    true
}

/// Integrate every dynamic square by `dt` under one shared acceleration.
///
/// `dt == 0` returns without touching any square, so even an overflowed
/// (infinite) acceleration cannot turn state into NaN through `inf * 0`.
pub fn integrate_squares(
    squares: &mut [Square],
    acceleration: Vec2,
    dt: f32,
    mass_policy: MassPolicy,
) -> IntegrationCounts {
    let total = squares.len() as u32;
    if dt <= 0.0 {
        let dynamic = squares.iter().filter(|s| !s.is_static()).count() as u32;
        return IntegrationCounts { integrated: 0, skipped_static: total - dynamic };
    }

    #[cfg(feature = "parallel")]
    {
        if squares.len() >= PARALLEL_THRESHOLD {
            let integrated: u32 = squares
                .par_iter_mut()
                .map(|s| step_square(s, acceleration, dt, mass_policy) as u32)
                .sum();
            return IntegrationCounts { integrated, skipped_static: total - integrated };
        }
    }

    let mut integrated = 0u32;
    for square in squares.iter_mut() {
        if step_square(square, acceleration, dt, mass_policy) {
            integrated += 1;
        }
    }

    IntegrationCounts { integrated, skipped_static: total - integrated }
}
