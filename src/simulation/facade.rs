use wasm_bindgen::prelude::*;

use crate::core::error::EngineError;
use crate::domain::config::MassPolicy;
use crate::domain::force::{Force, ForceSnapshot};

use super::perf_stats::PerfStats;
use super::WorldCore;

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world at host time `now` (usually `performance.now()`)
    #[wasm_bindgen(constructor)]
    pub fn new(now: f64, width: f32, height: f32) -> Result<World, JsValue> {
        let core = WorldCore::new(now, width, height).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Create a world from a JSON configuration (see `WorldConfig`)
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(now: f64, json: &str) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(now, json).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn last_update(&self) -> f64 { self.core.last_update() }

    #[wasm_bindgen(getter)]
    pub fn force_count(&self) -> usize { self.core.force_count() }

    #[wasm_bindgen(getter)]
    pub fn square_count(&self) -> usize { self.core.square_count() }

    // === SETTINGS ===

    pub fn set_time_scale(&mut self, time_scale: f32) -> Result<(), JsValue> {
        self.core.set_time_scale(time_scale).map_err(to_js)
    }

    /// `true`: acceleration = force sum / mass. `false`: forces are used as-is.
    pub fn set_divide_by_mass(&mut self, enabled: bool) {
        let policy = if enabled { MassPolicy::Divide } else { MassPolicy::Ignore };
        self.core.set_mass_policy(policy);
    }

    pub fn set_reject_overlapping_spawns(&mut self, enabled: bool) {
        self.core.set_reject_overlapping_spawns(enabled);
    }

    pub fn set_cull_offscreen(&mut self, enabled: bool) {
        self.core.set_cull_offscreen(enabled);
    }

    /// Call from the canvas resize handler
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core.resize(width, height).map_err(to_js)
    }

    /// Enable or disable per-update perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last update perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === FORCES & SQUARES ===

    /// Append a force; returns its index for the `change_force_*` calls
    pub fn add_force(&mut self, force: Force) -> Result<usize, JsValue> {
        self.core.add_force(force).map_err(to_js)
    }

    /// Spawn a square at rest; returns its index
    pub fn add_square(
        &mut self,
        name: &str,
        is_static: bool,
        x: f32,
        y: f32,
        size: f32,
        mass: f32,
    ) -> Result<usize, JsValue> {
        self.core
            .add_square(name, is_static, x, y, size, mass)
            .map_err(to_js)
    }

    pub fn change_force_title(&mut self, index: usize, value: &str) -> Result<(), JsValue> {
        self.core.change_force_title(index, value).map_err(to_js)
    }

    /// `value` is the raw text-field content; malformed input throws and changes nothing
    pub fn change_force_x(&mut self, index: usize, value: &str) -> Result<(), JsValue> {
        self.core.change_force_x(index, value).map_err(to_js)
    }

    pub fn change_force_y(&mut self, index: usize, value: &str) -> Result<(), JsValue> {
        self.core.change_force_y(index, value).map_err(to_js)
    }

    // === STEP ===

    /// Advance to host time `now`. Call once per animation frame.
    pub fn update(&mut self, now: f64) {
        self.core.update(now);
    }

    // === SNAPSHOTS ===

    /// Flat [x, y, size] triples, one per square in spawn order
    pub fn get_square_props(&self) -> Vec<f32> {
        self.core.square_props_flat()
    }

    pub fn get_global_forces(&self) -> Vec<ForceSnapshot> {
        self.core.global_forces()
    }

    pub fn get_global_forces_json(&self) -> String {
        self.core.global_forces_json()
    }

    /// Fill the props transfer buffer and return its length in floats.
    /// Read it through `square_props_ptr` as a Float32Array over wasm memory.
    pub fn extract_square_props(&mut self) -> usize {
        self.core.extract_square_props()
    }

    /// Get pointer to the props transfer buffer
    pub fn square_props_ptr(&self) -> *const f32 {
        self.core.square_props_ptr()
    }
}
