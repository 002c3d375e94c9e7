//! World - square sandbox simulation
//!
//! The world only orchestrates: time bookkeeping lives in `systems::clock`,
//! force summation and integration in `systems::physics`. The contract for the
//! host is "construct once, call `update` every frame, query snapshots between
//! updates".
//!
//! Forces are addressed by position. Nothing removes a force, so an index
//! handed to the UI stays valid for the lifetime of the world.

use crate::core::error::EngineResult;
use crate::domain::config::{MassPolicy, WorldConfig};
use crate::domain::force::{Force, ForceSnapshot};
use crate::domain::square::Square;
use crate::systems::clock::SimClock;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;
pub use render_extract::SquareProps;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    // Bounds (informational unless culling is on)
    width: f32,
    height: f32,

    clock: SimClock,
    forces: Vec<Force>,
    squares: Vec<Square>,

    // Settings
    time_scale: f32,
    mass_policy: MassPolicy,
    reject_overlapping_spawns: bool,
    cull_offscreen: bool,

    // Flattened (x, y, size) triples for zero-copy reads from JS
    props_buffer: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create an empty world. Fails on non-positive dimensions.
    pub fn new(now: f64, width: f32, height: f32) -> EngineResult<Self> {
        init::create_world_core(now, WorldConfig::new(width, height))
    }

    pub fn from_config(now: f64, config: WorldConfig) -> EngineResult<Self> {
        init::create_world_core(now, config)
    }

    pub fn from_config_json(now: f64, json: &str) -> EngineResult<Self> {
        init::create_world_core_from_json(now, json)
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    /// Host timestamp of the last update that moved the clock forward
    pub fn last_update(&self) -> f64 { self.clock.last_update() }

    pub fn force_count(&self) -> usize { self.forces.len() }

    pub fn square_count(&self) -> usize { self.squares.len() }

    pub fn forces(&self) -> &[Force] { &self.forces }

    pub fn squares(&self) -> &[Square] { &self.squares }

    pub fn force(&self, index: usize) -> Option<&Force> { self.forces.get(index) }

    pub fn square(&self, index: usize) -> Option<&Square> { self.squares.get(index) }

    // === SETTINGS ===

    pub fn time_scale(&self) -> f32 { self.time_scale }

    pub fn set_time_scale(&mut self, time_scale: f32) -> EngineResult<()> {
        settings::set_time_scale(self, time_scale)
    }

    pub fn mass_policy(&self) -> MassPolicy { self.mass_policy }

    pub fn set_mass_policy(&mut self, mass_policy: MassPolicy) {
        settings::set_mass_policy(self, mass_policy);
    }

    pub fn set_reject_overlapping_spawns(&mut self, enabled: bool) {
        settings::set_reject_overlapping_spawns(self, enabled);
    }

    pub fn set_cull_offscreen(&mut self, enabled: bool) {
        settings::set_cull_offscreen(self, enabled);
    }

    /// Follow the host canvas size. Same validation as construction.
    pub fn resize(&mut self, width: f32, height: f32) -> EngineResult<()> {
        settings::resize(self, width, height)
    }

    /// Enable or disable per-update perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last update perf snapshot
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === COMMANDS ===

    /// Append a force; returns its index. Non-finite components are rejected.
    pub fn add_force(&mut self, force: Force) -> EngineResult<usize> {
        commands::add_force(self, force)
    }

    /// Append a square at rest; returns its index.
    pub fn add_square(
        &mut self,
        name: &str,
        is_static: bool,
        x: f32,
        y: f32,
        size: f32,
        mass: f32,
    ) -> EngineResult<usize> {
        commands::add_square(self, name, is_static, x, y, size, mass)
    }

    pub fn change_force_title(&mut self, index: usize, value: &str) -> EngineResult<()> {
        commands::change_force_title(self, index, value)
    }

    /// Set a force's x acceleration from user-typed text.
    pub fn change_force_x(&mut self, index: usize, value: &str) -> EngineResult<()> {
        commands::change_force_x(self, index, value)
    }

    /// Set a force's y acceleration from user-typed text.
    pub fn change_force_y(&mut self, index: usize, value: &str) -> EngineResult<()> {
        commands::change_force_y(self, index, value)
    }

    // === STEP ===

    /// Advance the simulation to host time `now`. Never fails.
    pub fn update(&mut self, now: f64) {
        step::update(self, now);
    }

    // === SNAPSHOTS ===

    /// Lazy (x, y, size) per square, in storage order. Call again to restart.
    pub fn square_props(&self) -> SquareProps<'_> {
        render_extract::square_props(self)
    }

    /// Square props flattened as [x0, y0, size0, x1, ...]
    pub fn square_props_flat(&self) -> Vec<f32> {
        render_extract::square_props_flat(self)
    }

    pub fn global_forces(&self) -> Vec<ForceSnapshot> {
        render_extract::global_forces(self)
    }

    pub fn global_forces_json(&self) -> String {
        render_extract::global_forces_json(self)
    }

    /// Fill the props transfer buffer; returns the number of floats written.
    pub fn extract_square_props(&mut self) -> usize {
        render_extract::extract_square_props(self)
    }

    /// Get pointer to the props transfer buffer (valid until the next extract)
    pub fn square_props_ptr(&self) -> *const f32 {
        self.props_buffer.as_ptr()
    }

    pub fn square_props_buffer(&self) -> &[f32] {
        &self.props_buffer
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
