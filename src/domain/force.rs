//! Force - a named global acceleration
//!
//! Forces are plain state records. They are summed once per update and the
//! total is applied to every dynamic square; they never update themselves.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use super::vec2::Vec2;

/// A named acceleration vector applied uniformly to all dynamic squares.
///
/// Serialized as `{ "name": ..., "x": ..., "y": ... }` so the same shape
/// appears in configuration files and UI snapshots.
#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Force {
    name: String,
    #[serde(rename = "x")]
    ax: f32,
    #[serde(rename = "y")]
    ay: f32,
}

#[wasm_bindgen]
impl Force {
    #[wasm_bindgen(constructor)]
    pub fn new(name: String, x: f32, y: f32) -> Force {
        Force { name, ax: x, ay: y }
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 {
        self.ax
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 {
        self.ay
    }
}

impl Force {
    pub fn acceleration(&self) -> Vec2 {
        Vec2::new(self.ax, self.ay)
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name.clear();
        self.name.push_str(name);
    }

    pub(crate) fn set_x(&mut self, x: f32) {
        self.ax = x;
    }

    pub(crate) fn set_y(&mut self, y: f32) {
        self.ay = y;
    }

    pub fn snapshot(&self) -> ForceSnapshot {
        ForceSnapshot {
            name: self.name.clone(),
            x: self.ax,
            y: self.ay,
        }
    }
}

/// Read-only copy of a force for UI display. Editing it changes nothing in the world.
#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForceSnapshot {
    name: String,
    x: f32,
    y: f32,
}

#[wasm_bindgen]
impl ForceSnapshot {
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 {
        self.y
    }
}
