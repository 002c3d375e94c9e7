//! Physics Simulator - square sandbox engine in WASM
//!
//! Squares move under user-editable global forces. The host calls
//! `World::update(performance.now())` once per animation frame and draws one
//! square per `(x, y, size)` triple from `get_square_props`.
//!
//! Architecture:
//! - core/       - Errors and logging
//! - domain/     - Forces, squares, configuration
//! - systems/    - Clock and physics (force sum + semi-implicit Euler)
//! - simulation/ - World orchestration and the JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine with info-level logging
#[wasm_bindgen]
pub fn init() {
    init_with_log_level("info");
}

/// Initialize the engine; `level` is one of off/error/warn/info/debug/trace
#[wasm_bindgen]
pub fn init_with_log_level(level: &str) {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::install(level);
    log::info!("Physics simulator engine v{} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::{EngineError, EngineResult};
pub use domain::{BodyKind, Force, ForceSnapshot, MassPolicy, Square, Vec2, WorldConfig};
pub use simulation::{PerfStats, SquareProps, World, WorldCore};
