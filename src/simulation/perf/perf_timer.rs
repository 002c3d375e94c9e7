/// Host wall clock in milliseconds, used only for perf metrics.
///
/// Simulation time always comes from the `now` the host passes to `update`.
#[cfg(target_arch = "wasm32")]
fn wall_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn wall_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start_ms: f64,
}

impl PerfTimer {
    /// Start timing only when metrics are on, so disabled perf costs one branch.
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        enabled.then(|| PerfTimer { start_ms: wall_ms() })
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (wall_ms() - self.start_ms).max(0.0)
    }
}
