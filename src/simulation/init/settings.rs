use crate::core::error::EngineResult;
use crate::domain::config::{validate_dimensions, validate_time_scale, MassPolicy};

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_time_scale(world: &mut WorldCore, time_scale: f32) -> EngineResult<()> {
    validate_time_scale(time_scale)?;
    world.time_scale = time_scale;
    Ok(())
}

pub(super) fn set_mass_policy(world: &mut WorldCore, mass_policy: MassPolicy) {
    world.mass_policy = mass_policy;
}

pub(super) fn set_reject_overlapping_spawns(world: &mut WorldCore, enabled: bool) {
    world.reject_overlapping_spawns = enabled;
}

pub(super) fn set_cull_offscreen(world: &mut WorldCore, enabled: bool) {
    world.cull_offscreen = enabled;
}

pub(super) fn resize(world: &mut WorldCore, width: f32, height: f32) -> EngineResult<()> {
    validate_dimensions(width, height)?;
    world.width = width;
    world.height = height;
    Ok(())
}
