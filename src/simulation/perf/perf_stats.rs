use wasm_bindgen::prelude::*;

/// Snapshot of the last `update` call.
///
/// Everything but `clock_regressions` is zero while perf metrics are disabled;
/// regressions are always counted since the world was created.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) update_ms: f64,
    pub(super) dt: f64,
    pub(super) squares_integrated: u32,
    pub(super) squares_static: u32,
    pub(super) squares_culled: u32,
    pub(super) force_count: u32,
    pub(super) square_count: u32,
    pub(super) clock_regressions: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        let clock_regressions = self.clock_regressions;
        *self = PerfStats {
            clock_regressions,
            ..PerfStats::default()
        };
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> f64 { self.update_ms }
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f64 { self.dt }
    #[wasm_bindgen(getter)]
    pub fn squares_integrated(&self) -> u32 { self.squares_integrated }
    #[wasm_bindgen(getter)]
    pub fn squares_static(&self) -> u32 { self.squares_static }
    #[wasm_bindgen(getter)]
    pub fn squares_culled(&self) -> u32 { self.squares_culled }
    #[wasm_bindgen(getter)]
    pub fn force_count(&self) -> u32 { self.force_count }
    #[wasm_bindgen(getter)]
    pub fn square_count(&self) -> u32 { self.square_count }
    #[wasm_bindgen(getter)]
    pub fn clock_regressions(&self) -> u32 { self.clock_regressions }
}
