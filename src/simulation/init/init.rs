use crate::core::error::EngineResult;
use crate::domain::config::WorldConfig;
use crate::systems::clock::SimClock;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(now: f64, config: WorldConfig) -> EngineResult<WorldCore> {
    config.validate()?;

    log::debug!(
        "creating world {}x{} at t={} with {} force(s)",
        config.width,
        config.height,
        now,
        config.forces.len()
    );

    Ok(WorldCore {
        width: config.width,
        height: config.height,
        clock: SimClock::new(now),
        forces: config.forces,
        squares: Vec::new(),
        time_scale: config.time_scale,
        mass_policy: config.mass_policy,
        reject_overlapping_spawns: config.reject_overlapping_spawns,
        cull_offscreen: config.cull_offscreen,
        props_buffer: Vec::new(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

pub(super) fn create_world_core_from_json(now: f64, json: &str) -> EngineResult<WorldCore> {
    let config = WorldConfig::from_json(json)?;
    log::info!(
        "loaded world config: {}x{}, time_scale={}, mass_policy={:?}",
        config.width,
        config.height,
        config.time_scale,
        config.mass_policy
    );
    create_world_core(now, config)
}
