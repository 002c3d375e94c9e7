use crate::systems::physics::{cull_offscreen, integrate_squares, total_acceleration};

use super::{PerfTimer, WorldCore};

pub(super) fn update(world: &mut WorldCore, now: f64) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.force_count = world.forces.len() as u32;
    }
    let update_start = PerfTimer::start_if(perf_on);

    // === CLOCK ===
    // Regressions integrate nothing and leave the timestamp where it was.
    let tick = world.clock.advance(now);
    if tick.regressed {
        world.perf_stats.clock_regressions = world.perf_stats.clock_regressions.saturating_add(1);
        log::warn!(
            "update({now}) does not move past last update {}; integrating dt=0",
            world.clock.last_update()
        );
    }
    let mut dt = (tick.dt * world.time_scale as f64) as f32;
    if !dt.is_finite() {
        // Overflowed the f32 range; an infinite dt turns zero accelerations into NaN.
        log::warn!("update({now}) step of {} exceeds f32 range; clamping dt", tick.dt);
        dt = f32::MAX;
    }

    // === INTEGRATION ===
    // One summed acceleration per update, shared by every dynamic square.
    let acceleration = total_acceleration(&world.forces);
    let counts = integrate_squares(&mut world.squares, acceleration, dt, world.mass_policy);

    let culled = if world.cull_offscreen {
        cull_offscreen(&mut world.squares, world.width, world.height)
    } else {
        0
    };
    if culled > 0 {
        log::debug!("culled {culled} off-screen square(s)");
    }

    if let Some(t0) = update_start {
        world.perf_stats.update_ms = t0.elapsed_ms();
        world.perf_stats.dt = dt as f64;
        world.perf_stats.squares_integrated = counts.integrated;
        world.perf_stats.squares_static = counts.skipped_static;
        world.perf_stats.squares_culled = culled;
        world.perf_stats.square_count = world.squares.len() as u32;
    }
}
